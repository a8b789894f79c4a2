use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    errors::AlgorithmError,
    key_type::{Curve, KeyFamily, KeyType},
};

/// JOSE signature algorithms a key can be used with.
///
/// See https://www.rfc-editor.org/rfc/rfc7518#section-3.1
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum SignatureAlgorithm {
    PS256,
    ES256K,
    ES256,
    ES384,
    EdDSA,
}

impl SignatureAlgorithm {
    /// Returns the signature algorithm for a key type and curve.
    ///
    /// The curve is ignored for RSA keys and required for every other key type.
    ///
    /// # Example
    ///
    /// ```
    /// use ssi_did::crypto::{Curve, KeyType, SignatureAlgorithm};
    ///
    /// let alg = SignatureAlgorithm::from_key_and_curve(KeyType::P256, Some(Curve::P256)).unwrap();
    /// assert_eq!(alg, SignatureAlgorithm::ES256);
    /// ```
    pub fn from_key_and_curve(key_type: KeyType, curve: Option<Curve>) -> Result<Self, AlgorithmError> {
        Self::from_key_family(key_type.family(), curve)
    }

    /// Returns the signature algorithm for a JWK key family and curve.
    pub fn from_key_family(family: KeyFamily, curve: Option<Curve>) -> Result<Self, AlgorithmError> {
        if family == KeyFamily::Rsa {
            return Ok(Self::PS256);
        }

        let curve = curve.ok_or(AlgorithmError::MissingCurve)?;

        match family {
            KeyFamily::Okp => match curve {
                Curve::Ed25519 => Ok(Self::EdDSA),
                _ => Err(AlgorithmError::UnsupportedCurve { family, curve }),
            },
            // P-521 has no ES512 mapping
            KeyFamily::Ec => match curve {
                Curve::Secp256k1 => Ok(Self::ES256K),
                Curve::P256 => Ok(Self::ES256),
                Curve::P384 => Ok(Self::ES384),
                _ => Err(AlgorithmError::UnsupportedCurve { family, curve }),
            },
            KeyFamily::Rsa | KeyFamily::Oct => Err(AlgorithmError::UnsupportedKeyType(family)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PS256 => "PS256",
            Self::ES256K => "ES256K",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::EdDSA => "EdDSA",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SignatureAlgorithm::*;

    #[test]
    fn test_rsa_ignores_curve() {
        assert_eq!(SignatureAlgorithm::from_key_and_curve(KeyType::RSA, None), Ok(PS256));

        for crv in Curve::ALL {
            assert_eq!(SignatureAlgorithm::from_key_and_curve(KeyType::RSA, Some(crv)), Ok(PS256));
        }
    }

    #[test]
    fn test_non_rsa_requires_curve() {
        for kt in KeyType::ALL.into_iter().filter(|kt| *kt != KeyType::RSA) {
            assert_eq!(
                SignatureAlgorithm::from_key_and_curve(kt, None),
                Err(AlgorithmError::MissingCurve),
                "{kt}"
            );
        }
    }

    #[test]
    fn test_every_key_type_and_curve_combination() {
        for kt in KeyType::ALL {
            for crv in Curve::ALL {
                let expected = match (kt.family(), crv) {
                    (KeyFamily::Rsa, _) => Ok(PS256),
                    (KeyFamily::Okp, Curve::Ed25519) => Ok(EdDSA),
                    (KeyFamily::Ec, Curve::Secp256k1) => Ok(ES256K),
                    (KeyFamily::Ec, Curve::P256) => Ok(ES256),
                    (KeyFamily::Ec, Curve::P384) => Ok(ES384),
                    (family, curve) => Err(AlgorithmError::UnsupportedCurve { family, curve }),
                };

                assert_eq!(
                    SignatureAlgorithm::from_key_and_curve(kt, Some(crv)),
                    expected,
                    "key type {kt}, curve {crv}"
                );
            }
        }
    }

    #[test]
    fn test_native_curves() {
        let cases = [
            (KeyType::Ed25519, Ok(EdDSA)),
            (KeyType::Secp256k1, Ok(ES256K)),
            (KeyType::P256, Ok(ES256)),
            (KeyType::P384, Ok(ES384)),
            (KeyType::RSA, Ok(PS256)),
        ];

        for (kt, expected) in cases {
            assert_eq!(SignatureAlgorithm::from_key_and_curve(kt, kt.curve()), expected);
        }
    }

    #[test]
    fn test_unsupported_native_curves() {
        assert_eq!(
            SignatureAlgorithm::from_key_and_curve(KeyType::X25519, Some(Curve::X25519)),
            Err(AlgorithmError::UnsupportedCurve {
                family: KeyFamily::Okp,
                curve: Curve::X25519
            })
        );
        assert_eq!(
            SignatureAlgorithm::from_key_and_curve(KeyType::P521, Some(Curve::P521)),
            Err(AlgorithmError::UnsupportedCurve {
                family: KeyFamily::Ec,
                curve: Curve::P521
            })
        );
    }

    #[test]
    fn test_symmetric_keys_are_unsupported() {
        assert_eq!(
            SignatureAlgorithm::from_key_family(KeyFamily::Oct, Some(Curve::P256)),
            Err(AlgorithmError::UnsupportedKeyType(KeyFamily::Oct))
        );
        assert_eq!(
            SignatureAlgorithm::from_key_family(KeyFamily::Oct, None),
            Err(AlgorithmError::MissingCurve)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SignatureAlgorithm::from_key_and_curve(KeyType::P521, Some(Curve::P521)).unwrap_err();
        assert_eq!(err.to_string(), "unsupported EC signing curve: P-521");

        let err = SignatureAlgorithm::from_key_and_curve(KeyType::Ed25519, None).unwrap_err();
        assert_eq!(err.to_string(), "curve must be specified for non-RSA key types");
    }
}
