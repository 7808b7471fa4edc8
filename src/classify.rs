//! Strength classification - length against the configured thresholds.

use secrecy::{ExposeSecret, SecretString};

use crate::config::Thresholds;
use crate::types::Strength;

/// Classifies a password by length.
///
/// Length is measured in characters. The value is exposed only for the
/// length count and is never logged.
///
/// # Returns
/// - `Strength::Weak` if length is below the medium bound
/// - `Strength::Medium` if length is below the strong bound
/// - `Strength::Strong` otherwise
pub fn classify(password: &SecretString, thresholds: &Thresholds) -> Strength {
    let len = password.expose_secret().chars().count();

    if len < thresholds.medium_at() {
        Strength::Weak
    } else if len < thresholds.strong_at() {
        Strength::Medium
    } else {
        Strength::Strong
    }
}
