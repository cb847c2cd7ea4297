use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use percolate::engine::progress::{Progress, ProgressCallback};
use tracing::warn;

/// Drives an `indicatif` bar on stderr from estimator progress events.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler that tracks state but never draws.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target);
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::EstimationStart { grid_size, trials } => {
                pb.reset();
                pb.set_length(trials as u64);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
                pb.set_message(format!("{0}x{0} grid", grid_size));
            }
            Progress::TrialComplete { .. } => {
                pb.inc(1);
            }
            Progress::EstimationFinish => {
                pb.finish_and_clear();
            }
            Progress::Message(msg) => {
                if pb.is_finished() {
                    pb.set_message(msg);
                } else {
                    pb.println(format!("  {}", msg));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        match ProgressStyle::with_template("{msg:<14} [{bar:40.cyan/blue}] {pos}/{len} ({eta})") {
            Ok(style) => style
                .with_key(
                    "eta",
                    |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                        let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                    },
                )
                .progress_chars("##-"),
            Err(e) => {
                warn!("Invalid progress bar template: {}", e);
                ProgressStyle::default_bar()
            }
        }
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
