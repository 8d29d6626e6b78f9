use thiserror::Error;

/// Errors that can occur when compiling a detector's patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern's regular expression failed to compile.
    #[error("invalid regex in pattern '{id}': {source}")]
    InvalidRegex {
        /// Identifier of the pattern that failed (e.g. `"aws/access-key-id"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Top-level error type for registry construction and verification dispatch.
///
/// Unifies pattern compilation and verification errors into a single type
/// for callers that build a registry and immediately start verifying.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// A pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Live verification failed or could not be dispatched.
    #[error(transparent)]
    Verification(#[from] crate::verify::VerificationError),
}
