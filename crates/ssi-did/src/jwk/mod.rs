//! JSON Web Keys and the signing parameters derived from them.
//!
//! A signer or verifier is built from a JWK by reading its key family (`kty`)
//! and curve (`crv`), selecting the one JOSE algorithm valid for that pair,
//! and stamping the key with the `kid` and `alg` parameters.
//!
//! See https://www.rfc-editor.org/rfc/rfc7517

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::crypto::{AlgorithmError, Curve, KeyFamily, ParseKeyError, SignatureAlgorithm};

/// A JSON Web Key.
///
/// The key material parameters are modelled explicitly; any other member
/// (`x5u`, `x5t`, `x5t#S256`, `k`, ...) is kept in `additional_properties`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Jwk {
    pub kty: KeyFamily,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub crv: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub n: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub e: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<String>,

    /// RSA first prime factor.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub p: Option<String>,

    /// RSA second prime factor.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub q: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dq: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub qi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kid: Option<String>,

    /// The algorithm the key is intended for.
    ///
    /// Any registered JOSE value is accepted here, not only the ones
    /// [`SignatureAlgorithm`] can select.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alg: Option<String>,

    /// The key class (called `use` in the RFC).
    #[serde(skip_serializing_if = "Option::is_none", default, rename = "use")]
    pub key_use: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key_ops: Option<Vec<String>>,

    /// The X.509 certificate chain, base64 (not base64url) encoded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x5c: Option<Vec<String>>,

    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_properties: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwkError {
    #[error("could not get crv value: {0}")]
    Curve(#[from] ParseKeyError),
    #[error("could not get verification alg from jwk: {0}")]
    Algorithm(#[from] AlgorithmError),
    #[error("jwk does not hold private key material")]
    MissingPrivateKey,
}

impl Jwk {
    /// Returns the curve of the key, `None` when the key has no `crv` parameter.
    pub fn curve(&self) -> Result<Option<Curve>, JwkError> {
        match self.crv.as_deref() {
            None | Some("") => Ok(None),
            Some(crv) => Ok(Some(crv.parse()?)),
        }
    }

    /// Returns the signature algorithm matching the key family and curve.
    pub fn signature_algorithm(&self) -> Result<SignatureAlgorithm, JwkError> {
        let curve = match self.kty {
            // RSA keys carry no curve; whatever sits in `crv` is irrelevant.
            KeyFamily::Rsa => None,
            _ => self.curve()?,
        };

        Ok(SignatureAlgorithm::from_key_family(self.kty, curve)?)
    }

    /// Returns a copy of the key stripped of its private material.
    pub fn to_public(&self) -> Jwk {
        Jwk {
            d: None,
            p: None,
            q: None,
            dp: None,
            dq: None,
            qi: None,
            ..self.clone()
        }
    }

    fn with_signing_params(mut self, kid: &str) -> Result<(SignatureAlgorithm, Jwk), JwkError> {
        let alg = self.signature_algorithm()?;
        self.kid = Some(kid.to_owned());
        self.alg = Some(alg.to_string());
        Ok((alg, self))
    }
}

/// A private JWK together with the algorithm it signs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwkSigner {
    pub algorithm: SignatureAlgorithm,
    pub key: Jwk,
}

/// A public JWK together with the algorithm it verifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwkVerifier {
    pub algorithm: SignatureAlgorithm,
    pub key: Jwk,
}

impl JwkSigner {
    /// Builds a signer from a private key, setting its `kid` and `alg` parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use ssi_did::{crypto::SignatureAlgorithm, jwk::{Jwk, JwkSigner}};
    ///
    /// let jwk: Jwk = serde_json::from_str(r#"{
    ///     "kty": "OKP",
    ///     "crv": "Ed25519",
    ///     "x": "O2onvM62pC1io6jQKm8Nc2UyFXcd4kOmOsBIoYtZ2ik",
    ///     "d": "nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A"
    /// }"#).unwrap();
    ///
    /// let signer = JwkSigner::new("key-1", jwk).unwrap();
    /// assert_eq!(signer.algorithm, SignatureAlgorithm::EdDSA);
    /// ```
    pub fn new(kid: &str, key: Jwk) -> Result<Self, JwkError> {
        if key.d.is_none() {
            return Err(JwkError::MissingPrivateKey);
        }

        let (algorithm, key) = key.with_signing_params(kid)?;
        Ok(Self { algorithm, key })
    }

    pub fn kid(&self) -> Option<&str> {
        self.key.kid.as_deref()
    }

    /// Derives the matching verifier, keeping the key id.
    pub fn to_verifier(&self) -> Result<JwkVerifier, JwkError> {
        let kid = self.kid().unwrap_or_default();
        JwkVerifier::new(kid, self.key.to_public())
    }
}

impl JwkVerifier {
    /// Builds a verifier from a key, setting its `kid` and `alg` parameters.
    /// Private material, if any, is dropped.
    pub fn new(kid: &str, key: Jwk) -> Result<Self, JwkError> {
        let (algorithm, key) = key.to_public().with_signing_params(kid)?;
        Ok(Self { algorithm, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jwk(value: Value) -> Jwk {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_signer_sets_kid_and_alg() {
        let key = jwk(json!({
            "kty": "EC",
            "crv": "P-256",
            "x": "fyNYMN0976ci7xqiSdag3buk-ZCwgXU4kz9XNkBlNUI",
            "y": "hW2ojTNfH7Jbi8--CJUo3OCbH3y5n91g-IMA9MLMbTU",
            "d": "YjRs6vyyJLDPXzZzUb6ZB-aVthySBDNsh7UYdpS8yDI"
        }));

        let signer = JwkSigner::new("did:example:123#key-1", key).unwrap();
        assert_eq!(signer.algorithm, SignatureAlgorithm::ES256);
        assert_eq!(signer.kid(), Some("did:example:123#key-1"));

        let serialized = serde_json::to_value(&signer.key).unwrap();
        assert_eq!(serialized["alg"], "ES256");
        assert_eq!(serialized["kid"], "did:example:123#key-1");
    }

    #[test]
    fn test_verifier_from_signer_drops_private_key() {
        let key = jwk(json!({
            "kty": "OKP",
            "crv": "Ed25519",
            "x": "O2onvM62pC1io6jQKm8Nc2UyFXcd4kOmOsBIoYtZ2ik",
            "d": "nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A"
        }));

        let signer = JwkSigner::new("key-1", key).unwrap();
        let verifier = signer.to_verifier().unwrap();

        assert_eq!(verifier.algorithm, SignatureAlgorithm::EdDSA);
        assert_eq!(verifier.key.kid.as_deref(), Some("key-1"));
        assert_eq!(verifier.key.alg.as_deref(), Some("EdDSA"));
        assert!(verifier.key.d.is_none());
        assert_eq!(verifier.key.x, signer.key.x);
    }

    #[test]
    fn test_rsa_key_needs_no_curve() {
        let key = jwk(json!({
            "kty": "RSA",
            "n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw",
            "e": "AQAB"
        }));

        assert_eq!(key.signature_algorithm(), Ok(SignatureAlgorithm::PS256));

        let verifier = JwkVerifier::new("rsa-key", key).unwrap();
        assert_eq!(verifier.algorithm, SignatureAlgorithm::PS256);
    }

    #[test]
    fn test_signer_requires_private_key() {
        let key = jwk(json!({
            "kty": "OKP",
            "crv": "Ed25519",
            "x": "O2onvM62pC1io6jQKm8Nc2UyFXcd4kOmOsBIoYtZ2ik"
        }));

        assert_eq!(JwkSigner::new("key-1", key).unwrap_err(), JwkError::MissingPrivateKey);
    }

    #[test]
    fn test_algorithm_resolution_failures() {
        let cases = [
            (
                json!({"kty": "EC", "x": "abc", "y": "def"}),
                JwkError::Algorithm(AlgorithmError::MissingCurve),
            ),
            (
                json!({"kty": "EC", "crv": "P-521", "x": "abc", "y": "def"}),
                JwkError::Algorithm(AlgorithmError::UnsupportedCurve {
                    family: KeyFamily::Ec,
                    curve: Curve::P521,
                }),
            ),
            (
                json!({"kty": "OKP", "crv": "X25519", "x": "abc"}),
                JwkError::Algorithm(AlgorithmError::UnsupportedCurve {
                    family: KeyFamily::Okp,
                    curve: Curve::X25519,
                }),
            ),
            (
                json!({"kty": "OKP", "crv": "Ed448", "x": "abc"}),
                JwkError::Curve(ParseKeyError::UnsupportedCurve("Ed448".to_string())),
            ),
            (
                json!({"kty": "oct", "crv": "P-256", "k": "abc"}),
                JwkError::Algorithm(AlgorithmError::UnsupportedKeyType(KeyFamily::Oct)),
            ),
        ];

        for (value, expected) in cases {
            assert_eq!(jwk(value).signature_algorithm().unwrap_err(), expected);
        }
    }

    #[test]
    fn test_keeps_registered_alg_outside_signing_set() {
        let key = jwk(json!({
            "kty": "EC",
            "crv": "P-521",
            "alg": "ES512",
            "x": "AHKZLLOsCOzz5cY97ewNUajB957y-C-U88c3v13nmGZx6sYl_oJXu9A5RkTKqjqvjyekWF-7ytDyRXYgCF5cj0Kt",
            "y": "AdymlHvOiLxXkEhayXQnNCvDX4h9htZaCJN34kfmC6pV5OhQHiraVySsUdaQkAgDPrwQrJmbnX9cwlGfP-HqHZR1"
        }));

        assert_eq!(key.alg.as_deref(), Some("ES512"));
        assert_eq!(serde_json::to_value(&key).unwrap()["alg"], "ES512");
    }

    #[test]
    fn test_rsa_private_key_round_trip() {
        let value = json!({
            "kty": "RSA",
            "n": "sXchDaQebHnPiGvyDOAT4saGEUetSyo9MKLOoWFsueri23bOdgWp4Dy1WlUzewbgBHod5pcM9H95GQRV3JDXboIRROSBigeC5yjU1hGzHHyXss8UDprecbAYxknTcQkhslANGRUZmdTOQ5qTRsLAt6BTYuyvVRdhS8exSZEy_c4gs_7svlJJQ4H9_NxsiIoLwAEk7-Q3UXERGYw_75IDrGA84-lA_-Ct4eTlXHBIY2EaV7t7LjJaynVJCpkv4LKjTTAumiGUIuQhrNhZLuF_RJLqHpM2kgWFLU7-VTdL1VbC2tejvcI2BlMkEpk1BzBZI0KQB0GaDWFLN-aEAw3vRw",
            "e": "AQAB",
            "d": "VFCWOqXr8nvZNyaaJLXdnNPXZKRaWCjkU5Q2egQQpTBMwhprMzWzpR8Sxq1OPThh_J6MUD8Z35wky9b8eEO0pwNS8xlh1lOFRRBoNqDIKVOku0aZb-rynq8cxjDTLZQ6Fz7jSjR1Klop-YKaUHc9GsEofQqYruPhzSA-QgajZGPbE_0ZaVDJHfyd7UUBUKunFMScbflYAAOYJqVIVwaYR5zWEEceUjNnTNo_CVSj-VvXLO5VZfCUAVLgW4dpf1SrtZjSt34YLsRarSb127reG_DUwg9Ch-KyvjT1SkHgUWRVGcyly7uvVGRSDwsXypdrNinPA4jlhoNdizK2zF2CWQ",
            "p": "9gY2w6I6S6L0juEKsbeDAwpd9WMfgqFoeA9vEyEUuk4kLwBKcoe1x4HG68ik918hdDSE9vDQSccA3xXHOAFOPJ8R9EeIAbTi1VwBYnbTp87X-xcPWlEPkrdoUKW60tgs1aNd_Nnc9LEVVPMS390zbFxt8TN_biaBgelNgbC95sM",
            "q": "uKlCKvKv_ZJMVcdIs5vVSU_6cPtYI1ljWytExV_skstvRSNi9r66jdd9-yBhVfuG4shsp2j7rGnIio901RBeHo6TPKWVVykPu1iYhQXw1jIABfw-MVsN-3bQ76WLdt2SDxsHs7q7zPyUyHXmps7ycZ5c72wGkUwNOjYelmkiNS0",
            "dp": "w0kZbV63cVRvVX6yk3C8cMxo2qCM4Y8nsq1lmMSYhG4EcL6FWbX5h9yuvngs4iLEFk6eALoUS4vIWEwcL4txw9LsWH_zKI-hwoReoP77cOdSL4AVcraHawlkpyd2TWjE5evgbhWtOxnZee3cXJBkAi64Ik6jZxbvk-RR3pEhnCs",
            "dq": "o_8V14SezckO6CNLKs_btPdFiO9_kC1DsuUTd2LAfIIVeMZ7jn1Gus_Ff7B7IVx3p5KuBGOVF8L-qifLb6nQnLysgHDh132NDioZkhH7mI7hPG-PYE_odApKdnqECHWw0J-F0JWnUd6D2B_1TvF9mXA2Qx-iGYn8OVV1Bsmp6qU",
            "qi": "eNho5yRBEBxhGBtQRww9QirZsB66TrfFReG_CcteI1aCneT0ELGhYlRlCtUkTRclIfuEPmNsNDPbLoLqqCVznFbvdB7x-Tl-m0l_eFTj2KiqwGqE9PZB9nNTwMVvH3VRRSLWACvPnSiwP8N5Usy-WRXS-V7TbpxIhvepTfE0NNo",
            "kid": "rsa-key",
            "use": "sig",
            "key_ops": ["sign"],
            "x5c": ["MIIC+DCCAeCgAwIBAgIJBIGjYW6hFpn2MA0GCSqGSIb3DQEBBQUAMCMxITAfBgNVBAMTGGN1c3RvbWVyLWRlbW9zLmF1dGgwLmNvbTAeFw0xNjExMjIyMjIyMDVaFw0zMDA4MDEyMjIyMDVaMCMxITAfBgNVBAMTGGN1c3RvbWVyLWRlbW9zLmF1dGgwLmNvbTCCASIwDQYJKoZIhvcNAQEBBQADggEPADCCAQoCggEBAMnjZc5bm/eGIHq09N9HKHahM7Y31P0ul+A2wwP4lSpIwFrWHzxw88/7Dwk9QMc+orGXX95R6av4GF+Es/nG3uK45ooMVMa/hYCh0Mtx3gnSuoTavQEkLzCvSwTqVwzZ+5noukWVqJuMKNwjL77GNcPLY7Xy2/skMCT5bR8UoWaufooQvYq6SyPcRAU4BtdquZRiBT4U5f+4pwNTxSvey7ki50yc1tG49Per/0zA4O6Tlpv8x7Red6m1bCNHt7+Z5nSl3RX/QYyAEUX1a28VcYmR41Osy+o2OUCXYdUAphDaHo4/8rbKTJhlu8jEcc1KoMXAKjgaVZtG/v5ltx6AXY0CAwEAAaMvMC0wDAYDVR0TBAUwAwEB/zAdBgNVHQ4EFgQUQxFG602h1cG+pnyvJoy9pGJJoCswDQYJKoZIhvcNAQEFBQADggEBAGvtCbzGNBUJPLICth3mLsX0Z4z8T8iu4tyoiuAshP/Ry/ZBnFnXmhD8vwgMZ2lTgUWwlrvlgN+fAtYKnwFO2G3BOCFw96Nm8So9sjTda9CCZ3dhoH57F/hVMBB0K6xhklAc0b5ZxUpCIN92v/w+xZoz1XQBHe8ZbRHaP1HpRM4M7DJk2G5cgUCyu3UBvYS41sHvzrxQ3z7vIePRA4WF4bEkfX12gvny0RsPkrbVMXX1Rj9t6V7QXrbPYBAO+43JvDGYawxYVvLhz+BJ45x50GFQmHszfY3BR9TPK8xmMmQwtIvLu1PMttNCs7niCYkSiUv2sc2mlq1i3IashGkkgmo="],
            "x5t": "NjVBRjY5MDlCMUIwNzU4RTA2QzZFMDQ4QzQ2MDAyQjVDNjk1RTM2Qg"
        });

        let signer = JwkSigner::new("rsa-key", jwk(value.clone())).unwrap();
        assert_eq!(signer.algorithm, SignatureAlgorithm::PS256);

        let mut expected = value;
        expected["alg"] = json!("PS256");
        assert_eq!(serde_json::to_value(&signer.key).unwrap(), expected);

        let public = serde_json::to_value(signer.to_verifier().unwrap().key).unwrap();
        for private in ["d", "p", "q", "dp", "dq", "qi"] {
            assert!(public.get(private).is_none(), "{private} leaked into the public key");
        }
        assert_eq!(public["x5t"], expected["x5t"]);
        assert_eq!(public["use"], "sig");
    }
}
