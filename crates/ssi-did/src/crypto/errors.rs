use thiserror::Error;

use super::key_type::{Curve, KeyFamily};

/// The set of errors that can occur while selecting a signature algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("curve must be specified for non-RSA key types")]
    MissingCurve,
    #[error("unsupported {family} signing curve: {curve}")]
    UnsupportedCurve { family: KeyFamily, curve: Curve },
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(KeyFamily),
}

/// Errors raised when reading key type names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),
}
