use thiserror::Error;

use crate::methods::common::CodecError;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DidPeerError {
    #[error("{0} is not a valid did:peer address")]
    InvalidDid(String),
    #[error("unsupported did:peer numalgo: {0}")]
    UnsupportedNumalgo(char),
    #[error("invalid did:peer purpose code: {0}")]
    InvalidPurposeCode(char),
    #[error("at least one key or service is required")]
    EmptyArguments,
    #[error("keys cannot carry the service purpose")]
    UnexpectedPurpose,
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("invalid service encoding: {0}")]
    InvalidServiceEncoding(String),
    #[error("service serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
