//! Detector trait implemented by each plugin.

use crate::pattern::PatternDef;
use crate::verify::SecretVerifier;

/// A detector plugin contributing patterns for one secret type.
///
/// Each detector declares its pattern definitions and optionally a
/// [`SecretVerifier`] for live-checking detected secrets. Detectors hold no
/// mutable state; a single instance is shared read-only across all scans.
pub trait Detector: Send + Sync {
    /// Returns the unique identifier for this detector (e.g. `"aws"`).
    fn id(&self) -> &'static str;

    /// Returns the human-readable secret type name (e.g. `"AWS Access Key"`).
    fn secret_type(&self) -> &'static str;

    /// Returns the CLI flag name the framework exposes to opt out of this
    /// detector (e.g. `"no-aws-scan"`).
    fn flag_text(&self) -> &'static str;

    /// Returns the static slice of pattern definitions this detector
    /// contributes. Declaration order is meaningful: earlier patterns take
    /// priority when more than one could match the same text.
    fn patterns(&self) -> &'static [PatternDef];

    /// Returns an optional verifier for live-checking secrets matched by
    /// this detector's verifiable patterns.
    fn verifier(&self) -> Option<&dyn SecretVerifier> {
        None
    }
}
