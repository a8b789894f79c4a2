use std::time::Duration;

use hyper::StatusCode;
use thiserror::Error;

use super::{common::CodecError, peer::DidPeerError, pkh::DidPkhError};

/// Errors surfaced while resolving a DID into its document.
///
/// Errors raised by a method resolver are passed through unchanged.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DIDResolutionError {
    #[error("invalid DID, fewer than 2 parts: {0}")]
    MalformedDid(String),
    #[error("unsupported method for DID: {0}")]
    MethodNotSupported(String),
    #[error("invalid DID: {0}")]
    InvalidDid(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Peer(#[from] DidPeerError),
    #[error(transparent)]
    Web(#[from] DidWebError),
    #[error(transparent)]
    Pkh(#[from] DidPkhError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("DID method already registered: {0}")]
    DuplicateMethod(String),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DidWebError {
    #[error("{0} is missing prefix did:web")]
    InvalidDid(String),
    #[error("{0} is missing the required domain")]
    MissingDomain(String),
    #[error("failed to percent-decode DID segment: {0}")]
    InvalidEncoding(String),
    #[error("invalid document URL: {0}")]
    InvalidUrl(#[from] hyper::http::Error),
    #[error("HTTP client error: {0}")]
    ClientError(#[from] hyper_util::client::legacy::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] hyper::Error),
    #[error("Non-success server response: {0}")]
    NonSuccessResponse(StatusCode),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Parsing error: {0}")]
    ParsingError(#[from] ParsingErrorSource),
    #[error("resolved document id {found} does not match {expected}")]
    DocumentMismatch { expected: String, found: String },
}

#[derive(Error, Debug)]
pub enum ParsingErrorSource {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid encoding: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl From<serde_json::Error> for DidWebError {
    fn from(error: serde_json::Error) -> Self {
        DidWebError::ParsingError(ParsingErrorSource::JsonError(error))
    }
}

impl From<std::string::FromUtf8Error> for DidWebError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        DidWebError::ParsingError(ParsingErrorSource::Utf8Error(error))
    }
}

/// Errors raised while loading resolver configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
