use crate::utils::env;

/// Options for an [`ExhaustiveVerifier`](crate::ExhaustiveVerifier) sweep.
///
/// The defaults are read from the environment, see [`env::parallel`] and
/// [`env::concentration_threshold`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerifierOpts {
    /// Simulate pairs on the rayon thread pool. The report is the same either way.
    pub parallel: bool,
    /// A decoded value must be more probable than this to count as a pass.
    pub concentration_threshold: f64,
}

impl Default for VerifierOpts {
    fn default() -> Self {
        Self { parallel: env::parallel(), concentration_threshold: env::concentration_threshold() }
    }
}
