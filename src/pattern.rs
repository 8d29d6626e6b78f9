//! Pattern metadata for secret detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity '{0}': expected one of 'low', 'medium', 'high', 'critical'")]
pub struct ParseSeverityError(Box<str>);

impl ParseSeverityError {
    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.0
    }
}

/// How severe a detected secret exposure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low risk - the secret has limited scope or is unlikely to be exploitable.
    Low,
    /// Medium risk - the secret could grant partial access.
    Medium,
    /// High risk - the secret grants broad access to sensitive resources.
    High,
    /// Critical risk - the secret grants full administrative or billing access.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError(s.into())),
        }
    }
}

/// A single pattern definition contributed by a detector.
///
/// Patterns are declared as statics; the regex source is compiled once into
/// a [`crate::PatternSet`] when the registry is built.
#[derive(Debug, Clone)]
pub struct PatternDef {
    /// Unique identifier in `"detector/name"` format (e.g. `"aws/access-key-id"`).
    pub id: &'static str,
    /// Short human-readable name shown in diagnostics.
    pub name: &'static str,
    /// Longer description of what this pattern detects.
    pub description: &'static str,
    /// How severe an exposure of this secret type is.
    pub severity: Severity,
    /// The regular expression used to match this secret. When the expression
    /// defines a capture group, group 1 is reported as the matched secret.
    pub regex: &'static str,
    /// Literal keywords for cheap substring pre-filtering. If non-empty, the
    /// pattern is only tested against lines containing at least one keyword.
    pub keywords: &'static [&'static str],
    /// Whether matches of this pattern can be fed to the detector's verifier.
    pub verifiable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_display_formats_as_lowercase() {
        assert_eq!(format!("{}", Severity::Low), "low");
        assert_eq!(format!("{}", Severity::Critical), "critical");
    }

    #[test]
    fn severity_from_str_is_case_insensitive() {
        assert_eq!(Severity::from_str("LOW"), Ok(Severity::Low));
        assert_eq!(Severity::from_str("Critical"), Ok(Severity::Critical));
    }

    #[test]
    fn severity_from_str_returns_error_for_invalid_value() {
        let result = Severity::from_str("extreme");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.invalid_value(), "extreme");
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn severity_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
