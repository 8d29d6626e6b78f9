//! Detector plugins for the ferret secret scanner.
//!
//! This crate provides the pattern definitions and optional live-verification
//! logic that the scanning framework loads as detector plugins. The framework
//! (file walking, CLI, baseline handling) lives elsewhere; this crate only
//! answers two questions: "does this line contain a secret?" and "is that
//! secret actually valid?".
//!
//! # Main Types
//!
//! - [`DetectorRegistry`] - All builtin detectors with compiled patterns
//! - [`Detector`] - The plugin trait each detector implements
//! - [`PatternSet`] - Compiled patterns for matching a line of text
//! - [`PotentialSecret`] - Caller-owned record a verifier may enrich
//! - [`VerifiedResult`] - Tri-state outcome of live verification
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that the
//! framework can match on:
//!
//! - [`PatternError`] - Pattern compilation failures
//! - [`VerificationError`] - HTTP client and dispatch failures
//! - [`DetectorError`] - Top-level error enum combining the above

mod detector;
/// Builtin detectors, one module per service.
pub mod detectors;
mod error;
mod matcher;
mod pattern;
mod registry;
/// AWS Signature Version 4 request signing.
pub mod sigv4;
mod verify;

pub use detector::Detector;
pub use error::{DetectorError, PatternError};
pub use matcher::{LineMatch, PatternSet};
pub use pattern::{ParseSeverityError, PatternDef, Severity};
pub use registry::DetectorRegistry;
pub use verify::{BoxFuture, PotentialSecret, SecretVerifier, VerificationError, VerifiedResult};

/// HTTP `User-Agent` header sent during secret verification requests.
pub(crate) const USER_AGENT: &str = concat!("ferret-secret-scanner/", env!("CARGO_PKG_VERSION"));
