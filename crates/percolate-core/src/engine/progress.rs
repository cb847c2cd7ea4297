#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    EstimationStart { grid_size: usize, trials: usize },
    TrialComplete { trial: usize, fraction: f64 },
    EstimationFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + 'a>;

/// Forwards [`Progress`] events to an optional callback.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
