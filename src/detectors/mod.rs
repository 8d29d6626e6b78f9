//! Builtin detectors for secret detection and verification.

/// AWS access-key detection and STS-backed verification.
pub mod aws;

use crate::detector::Detector;

/// Returns all builtin detectors in registration order.
#[must_use]
pub fn builtin_detectors() -> Vec<&'static dyn Detector> {
    vec![&aws::AwsKeyDetector]
}
