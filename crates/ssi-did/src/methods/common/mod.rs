//! Multikey encoding shared by the key-embedding DID methods.
//!
//! A multikey is `z` followed by the base58btc encoding of
//! `varint(multicodec) || raw public key bytes`.

mod document;
pub(super) use document::{single_key_document, verification_method, DID_CONTEXT};

use std::fmt;

use multibase::Base::Base58Btc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::{
    varint::{self, DecodeError},
    KeyType,
};

/// Width in bytes of every multicodec prefix this crate reads or writes.
pub const MULTICODEC_PREFIX_LEN: usize = 2;

/// The DID method a multikey is decoded for.
///
/// The same key decodes to a different verification method type depending on
/// the method, for compatibility with documents already issued by each one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DecodeContext {
    Key,
    Peer,
}

/// Declared representation of a key inside a DID document.
///
/// See https://www.w3.org/TR/did-spec-registries/#verification-method-types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMethodType {
    Ed25519VerificationKey2018,
    Ed25519VerificationKey2020,
    X25519KeyAgreementKey2019,
    X25519KeyAgreementKey2020,
    EcdsaSecp256k1VerificationKey2019,
    EcdsaSecp256k1RecoveryMethod2020,
    JsonWebKey2020,
}

impl VerificationMethodType {
    /// Returns the verification method type of a key decoded in the given context.
    pub fn for_key(key_type: KeyType, context: DecodeContext) -> Self {
        use DecodeContext::*;

        match (key_type, context) {
            (KeyType::Ed25519, Key) => Self::Ed25519VerificationKey2018,
            (KeyType::Ed25519, Peer) => Self::Ed25519VerificationKey2020,
            (KeyType::X25519, Key) => Self::X25519KeyAgreementKey2019,
            (KeyType::X25519, Peer) => Self::X25519KeyAgreementKey2020,
            (KeyType::Secp256k1, Key | Peer) => Self::EcdsaSecp256k1VerificationKey2019,
            (KeyType::P256 | KeyType::P384 | KeyType::P521 | KeyType::RSA, Key | Peer) => Self::JsonWebKey2020,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519VerificationKey2018 => "Ed25519VerificationKey2018",
            Self::Ed25519VerificationKey2020 => "Ed25519VerificationKey2020",
            Self::X25519KeyAgreementKey2019 => "X25519KeyAgreementKey2019",
            Self::X25519KeyAgreementKey2020 => "X25519KeyAgreementKey2020",
            Self::EcdsaSecp256k1VerificationKey2019 => "EcdsaSecp256k1VerificationKey2019",
            Self::EcdsaSecp256k1RecoveryMethod2020 => "EcdsaSecp256k1RecoveryMethod2020",
            Self::JsonWebKey2020 => "JsonWebKey2020",
        }
    }

    /// Returns the JSON-LD context defining the verification method type.
    pub fn context_url(&self) -> &'static str {
        match self {
            Self::Ed25519VerificationKey2018 => "https://w3id.org/security/suites/ed25519-2018/v1",
            Self::Ed25519VerificationKey2020 => "https://w3id.org/security/suites/ed25519-2020/v1",
            Self::X25519KeyAgreementKey2019 => "https://w3id.org/security/suites/x25519-2019/v1",
            Self::X25519KeyAgreementKey2020 => "https://w3id.org/security/suites/x25519-2020/v1",
            Self::EcdsaSecp256k1VerificationKey2019 => "https://w3id.org/security/suites/secp256k1-2019/v1",
            Self::EcdsaSecp256k1RecoveryMethod2020 => "https://w3id.org/security/suites/secp256k1recovery-2020/v2",
            Self::JsonWebKey2020 => "https://w3id.org/security/suites/jws-2020/v1",
        }
    }
}

impl fmt::Display for VerificationMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("empty multikey")]
    EmptyIdentifier,
    #[error("expected base58btc multibase prefix 'z' but found '{prefix}'")]
    UnsupportedEncoding { prefix: char },
    #[error("error to multibase decode: {0}")]
    Multibase(#[from] multibase::Error),
    #[error("malformed multicodec varint: {0}")]
    MalformedVarint(#[from] DecodeError),
    #[error("expected a {MULTICODEC_PREFIX_LEN}-byte multicodec varint but found {width} bytes")]
    MalformedIdentifier { width: usize },
    #[error("unknown multicodec: {code:#x}")]
    UnknownMultiCodec { code: u64 },
    #[error("invalid {key_type} public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },
}

/// Encodes raw public key bytes into a multikey.
///
/// # Example
///
/// ```
/// use ssi_did::{crypto::KeyType, methods::encode_multikey};
///
/// let multikey = encode_multikey(KeyType::Ed25519, &[0u8; 32]).unwrap();
/// assert!(multikey.starts_with("z6Mk"));
/// ```
pub fn encode_multikey(key_type: KeyType, raw_public_key: &[u8]) -> Result<String, CodecError> {
    if let Some(expected) = key_type.public_key_length() {
        if expected != raw_public_key.len() {
            return Err(CodecError::InvalidKeyLength {
                key_type,
                expected,
                actual: raw_public_key.len(),
            });
        }
    }

    let prefix = varint::encode(key_type.multicodec());
    Ok(multibase::encode(Base58Btc, [prefix.as_slice(), raw_public_key].concat()))
}

/// Decodes key type and raw public key bytes from a multikey.
pub fn decode_multikey_type(multikey: &str) -> Result<(KeyType, Vec<u8>), CodecError> {
    let prefix = multikey.chars().next().ok_or(CodecError::EmptyIdentifier)?;
    if prefix != Base58Btc.code() {
        return Err(CodecError::UnsupportedEncoding { prefix });
    }

    let (_, multicodec) = multibase::decode(multikey)?;

    let (code, width) = varint::decode(&multicodec)?;
    if width != MULTICODEC_PREFIX_LEN {
        return Err(CodecError::MalformedIdentifier { width });
    }

    let key_type = KeyType::from_multicodec(code).ok_or(CodecError::UnknownMultiCodec { code })?;

    Ok((key_type, multicodec[width..].to_vec()))
}

/// Decodes raw public key bytes from a multikey along with the verification
/// method type the key takes in the given context.
pub fn decode_multikey(multikey: &str, context: DecodeContext) -> Result<(Vec<u8>, VerificationMethodType), CodecError> {
    let (key_type, raw_public_key) = decode_multikey_type(multikey)?;
    Ok((raw_public_key, VerificationMethodType::for_key(key_type, context)))
}
