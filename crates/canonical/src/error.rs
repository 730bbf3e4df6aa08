use thiserror::Error;

/// Errors raised while compiling a normalization configuration.
///
/// Tokenizing text never fails; only malformed configuration does, and it
/// fails before any alignment begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid equivalence pair ({left:?}, {right:?}): {reason}")]
    InvalidEquivalence {
        left: String,
        right: String,
        reason: String,
    },
}
