use crate::Estimator;

/// Errors surfaced by the cone engine.
///
/// Non-finite estimator values (log of a zero or negative ratio) are not
/// errors: they propagate through the rolling windows into the affected
/// summary cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConeError {
    /// An estimator tag outside `c2c`/`park`/`gk`/`rsy`/`yz` was parsed.
    #[error("unknown estimator tag {tag:?} (expected c2c, park, gk, rsy or yz)")]
    InvalidEstimator {
        /// The offending tag, verbatim.
        tag: String,
    },

    /// The selected estimator is recognized but has no implementation.
    #[error("estimator {estimator} is not implemented")]
    Unimplemented {
        /// The selected estimator.
        estimator: Estimator,
    },

    /// A requested window admits no complete rolling window over the
    /// estimator series.
    #[error(
        "window length {window} requires more than {available} estimator observations"
    )]
    InsufficientData {
        /// The requested window length.
        window: usize,
        /// Length of the estimator series actually available.
        available: usize,
    },
}
