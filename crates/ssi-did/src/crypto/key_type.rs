use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::errors::ParseKeyError;

/// Supported public key types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum KeyType {
    Ed25519,
    X25519,
    #[serde(rename = "secp256k1")]
    Secp256k1,
    #[serde(rename = "P-256")]
    P256,
    #[serde(rename = "P-384")]
    P384,
    #[serde(rename = "P-521")]
    P521,
    RSA,
}

/// Elliptic curves a key can be defined over.
///
/// The absence of a curve (as for RSA keys) is expressed as `Option<Curve>::None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    #[serde(rename = "secp256k1")]
    Secp256k1,
    #[serde(rename = "P-256")]
    P256,
    #[serde(rename = "P-384")]
    P384,
    #[serde(rename = "P-521")]
    P521,
    Ed25519,
    X25519,
}

/// Key families as named by the JWK `kty` parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum KeyFamily {
    /// Octet key pair
    #[serde(rename = "OKP")]
    Okp,
    /// Elliptic curve
    #[serde(rename = "EC")]
    Ec,
    #[serde(rename = "RSA")]
    Rsa,
    /// Symmetric key
    #[serde(rename = "oct")]
    Oct,
}

use KeyType::*;

// See:
// - https://github.com/multiformats/multicodec/blob/master/table.csv
// - https://w3c-ccg.github.io/did-method-key/#signature-method-creation-algorithm
impl KeyType {
    /// All supported key types.
    pub const ALL: [KeyType; 7] = [Ed25519, X25519, Secp256k1, P256, P384, P521, RSA];

    /// Returns the multicodec value registered for public keys of this type.
    pub fn multicodec(&self) -> u64 {
        match self {
            Ed25519 => 0xed,
            X25519 => 0xec,
            Secp256k1 => 0xe7,
            P256 => 0x1200,
            P384 => 0x1201,
            P521 => 0x1202,
            RSA => 0x1205,
        }
    }

    /// Creates a `KeyType` from a multicodec value.
    ///
    /// Returns `None` if the value does not designate a supported public key type.
    pub fn from_multicodec(code: u64) -> Option<Self> {
        match code {
            0xed => Some(Ed25519),
            0xec => Some(X25519),
            0xe7 => Some(Secp256k1),
            0x1200 => Some(P256),
            0x1201 => Some(P384),
            0x1202 => Some(P521),
            0x1205 => Some(RSA),
            _ => None,
        }
    }

    /// Returns the length of the (compressed) public key for the key type, if fixed.
    pub fn public_key_length(&self) -> Option<usize> {
        match self {
            Ed25519 => Some(32),
            X25519 => Some(32),
            Secp256k1 => Some(33),
            P256 => Some(33),
            P384 => Some(49),
            P521 => None,
            RSA => None,
        }
    }

    /// Returns the JWK family the key type belongs to.
    pub fn family(&self) -> KeyFamily {
        match self {
            Ed25519 | X25519 => KeyFamily::Okp,
            Secp256k1 | P256 | P384 | P521 => KeyFamily::Ec,
            RSA => KeyFamily::Rsa,
        }
    }

    /// Returns the curve the key type is defined over, `None` for RSA.
    pub fn curve(&self) -> Option<Curve> {
        match self {
            Ed25519 => Some(Curve::Ed25519),
            X25519 => Some(Curve::X25519),
            Secp256k1 => Some(Curve::Secp256k1),
            P256 => Some(Curve::P256),
            P384 => Some(Curve::P384),
            P521 => Some(Curve::P521),
            RSA => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ed25519 => "Ed25519",
            X25519 => "X25519",
            Secp256k1 => "secp256k1",
            P256 => "P-256",
            P384 => "P-384",
            P521 => "P-521",
            RSA => "RSA",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyType::ALL
            .into_iter()
            .find(|kt| kt.as_str() == s)
            .ok_or_else(|| ParseKeyError::UnsupportedKeyType(s.to_owned()))
    }
}

impl Curve {
    pub const ALL: [Curve; 6] = [
        Curve::Secp256k1,
        Curve::P256,
        Curve::P384,
        Curve::P521,
        Curve::Ed25519,
        Curve::X25519,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
            Curve::Ed25519 => "Ed25519",
            Curve::X25519 => "X25519",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Curve {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::ALL
            .into_iter()
            .find(|crv| crv.as_str() == s)
            .ok_or_else(|| ParseKeyError::UnsupportedCurve(s.to_owned()))
    }
}

impl KeyFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFamily::Okp => "OKP",
            KeyFamily::Ec => "EC",
            KeyFamily::Rsa => "RSA",
            KeyFamily::Oct => "oct",
        }
    }
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
