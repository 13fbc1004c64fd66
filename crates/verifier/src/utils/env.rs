use tracing::warn;

/// The concentration threshold used when `QDIV_CONCENTRATION_THRESHOLD` is unset or invalid.
pub const DEFAULT_CONCENTRATION_THRESHOLD: f64 = 0.999;

/// Returns whether the `QDIV_PARALLEL` environment variable is enabled or disabled.
///
/// This variable controls whether the pairs of a sweep are simulated on the rayon thread pool.
///
/// By default, the variable is enabled.
#[must_use]
pub fn parallel() -> bool {
    let value = std::env::var("QDIV_PARALLEL").unwrap_or_else(|_| "true".to_string());
    !(value == "0" || value.to_lowercase() == "false")
}

/// Returns the `QDIV_CONCENTRATION_THRESHOLD` environment variable, a probability in `(0, 1]`.
///
/// A decoded value whose marginal probability does not exceed the threshold is reported as
/// diffuse even when it is the right answer.
#[must_use]
pub fn concentration_threshold() -> f64 {
    match std::env::var("QDIV_CONCENTRATION_THRESHOLD") {
        Ok(value) => parse_threshold(&value).unwrap_or_else(|| {
            warn!(
                "invalid QDIV_CONCENTRATION_THRESHOLD {value:?}, using \
                 {DEFAULT_CONCENTRATION_THRESHOLD}"
            );
            DEFAULT_CONCENTRATION_THRESHOLD
        }),
        Err(_) => DEFAULT_CONCENTRATION_THRESHOLD,
    }
}

fn parse_threshold(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|t| *t > 0.0 && *t <= 1.0)
}
