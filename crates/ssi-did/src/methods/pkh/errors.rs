use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DidPkhError {
    #[error("{0} is not a valid did:pkh address")]
    InvalidDid(String),
    #[error("unsupported did:pkh namespace: {0}")]
    UnsupportedNamespace(String),
}
