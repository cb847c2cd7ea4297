//! Descriptive statistics over trial samples.

/// Two-sided 95% z-score used for confidence intervals.
pub const Z_95: f64 = 1.96;

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample variance with an `n - 1` denominator.
///
/// A single sample has zero variance; an empty slice yields `NaN`.
pub fn variance(samples: &[f64]) -> f64 {
    match samples.len() {
        0 => f64::NAN,
        1 => 0.0,
        n => {
            let mu = mean(samples);
            let sum_sq: f64 = samples.iter().map(|x| (x - mu) * (x - mu)).sum();
            sum_sq / (n - 1) as f64
        }
    }
}

/// Sample standard deviation, the square root of [`variance`].
pub fn stddev(samples: &[f64]) -> f64 {
    variance(samples).sqrt()
}

/// Returns `(lo, hi)` of the 95% confidence interval `mean ± 1.96·stddev/√n`.
pub fn confidence_interval(mean: f64, stddev: f64, n: usize) -> (f64, f64) {
    let half_width = Z_95 * stddev / (n as f64).sqrt();
    (mean - half_width, mean + half_width)
}
