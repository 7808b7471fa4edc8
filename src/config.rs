//! Classification thresholds and their environment override.

use thiserror::Error;

/// Lengths below this are `Weak`.
pub const DEFAULT_MEDIUM_AT: usize = 6;
/// Lengths at or above this are `Strong`.
pub const DEFAULT_STRONG_AT: usize = 10;

/// Environment variable overriding the thresholds, format `<medium>,<strong>`.
pub const THRESHOLDS_ENV: &str = "FORM_HINTS_THRESHOLDS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThresholdsError {
    #[error("Invalid thresholds `{0}`: expected `<medium>,<strong>`")]
    Malformed(String),
    #[error("Invalid thresholds: medium bound {0} must be below strong bound {1}")]
    OutOfOrder(usize, usize),
}

/// Length bounds for the strength classification.
///
/// The defaults reproduce the shipped behavior: length < 6 is `Weak`,
/// 6 ≤ length < 10 is `Medium`, length ≥ 10 is `Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    medium_at: usize,
    strong_at: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            medium_at: DEFAULT_MEDIUM_AT,
            strong_at: DEFAULT_STRONG_AT,
        }
    }
}

impl Thresholds {
    /// Creates validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdsError::OutOfOrder` if `medium_at` is not strictly
    /// below `strong_at`.
    pub fn new(medium_at: usize, strong_at: usize) -> Result<Self, ThresholdsError> {
        if medium_at >= strong_at {
            return Err(ThresholdsError::OutOfOrder(medium_at, strong_at));
        }
        Ok(Self {
            medium_at,
            strong_at,
        })
    }

    /// Reads thresholds from the environment.
    ///
    /// # Environment Variable
    ///
    /// Set `FORM_HINTS_THRESHOLDS` to `<medium>,<strong>` (e.g. `8,12`) to
    /// override the bounds. If not set, the defaults (`6,10`) are used.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set but:
    /// - Is not two comma-separated integers
    /// - The medium bound is not strictly below the strong bound
    pub fn from_env() -> Result<Self, ThresholdsError> {
        let raw = match std::env::var(THRESHOLDS_ENV) {
            Ok(raw) => raw,
            Err(_) => return Ok(Self::default()),
        };

        let parsed = Self::parse(&raw);

        #[cfg(feature = "tracing")]
        match &parsed {
            Ok(t) => tracing::info!(
                "Thresholds overridden from {}: medium={}, strong={}",
                THRESHOLDS_ENV,
                t.medium_at,
                t.strong_at
            ),
            Err(e) => tracing::error!("Thresholds override FAILED: {}", e),
        }

        parsed
    }

    fn parse(raw: &str) -> Result<Self, ThresholdsError> {
        let malformed = || ThresholdsError::Malformed(raw.to_string());

        let (medium, strong) = raw.split_once(',').ok_or_else(malformed)?;
        let medium_at: usize = medium.trim().parse().map_err(|_| malformed())?;
        let strong_at: usize = strong.trim().parse().map_err(|_| malformed())?;

        Self::new(medium_at, strong_at)
    }

    /// Lengths below this bound classify as `Weak`.
    pub fn medium_at(&self) -> usize {
        self.medium_at
    }

    /// Lengths at or above this bound classify as `Strong`.
    pub fn strong_at(&self) -> usize {
        self.strong_at
    }
}
