use crate::{
    crypto::KeyType,
    didcore::Document,
    methods::{
        common::{encode_multikey, single_key_document, CodecError, DecodeContext},
        errors::DIDResolutionError,
        traits::DIDMethod,
    },
};

const DID_KEY_PREFIX: &str = "did:key:";

#[derive(Debug, Default, Clone, Copy)]
pub struct DidKey;

impl DIDMethod for DidKey {
    fn name(&self) -> &'static str {
        "did:key"
    }
}

impl DidKey {
    pub fn new() -> Self {
        Self
    }

    /// Computes did:key address corresponding to raw public key bytes
    pub fn from_raw_public_key(key_type: KeyType, bytes: &[u8]) -> Result<String, CodecError> {
        let multikey = encode_multikey(key_type, bytes)?;

        Ok(format!("{DID_KEY_PREFIX}{multikey}"))
    }

    /// Expands did:key address into DID document
    ///
    /// See https://w3c-ccg.github.io/did-method-key/#document-creation-algorithm
    pub fn expand(&self, did: &str) -> Result<Document, DIDResolutionError> {
        let multikey = did
            .strip_prefix(DID_KEY_PREFIX)
            .ok_or_else(|| DIDResolutionError::InvalidDid(did.to_owned()))?;

        tracing::debug!("expanding did:key with multikey {multikey}");
        single_key_document(did, multikey, DecodeContext::Key).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{
        didcore::VerificationMethodRef,
        methods::common::VerificationMethodType,
    };

    #[test]
    fn test_did_key_generation_from_given_key_material() {
        let entries = [
            (
                KeyType::Ed25519,
                hex::decode("3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29").unwrap(),
                "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
            ),
            (
                KeyType::X25519,
                hex::decode("2fe57da347cd62431528daac5fbb290730fff684afc4cfc2ed90995f58cb3b74").unwrap(),
                "did:key:z6LSeu9HkTHSfLLeUs2nnzUSNedgDUevfNQgQjQC23ZCit6F",
            ),
            (
                KeyType::Secp256k1,
                hex::decode("03874c15c7fda20e539c6e5ba573c139884c351188799f5458b4b41f7924f235cd").unwrap(),
                "did:key:zQ3shokFTS3brHcDQrn82RUDfCZESWL1ZdCEJwekUDPQiYBme",
            ),
        ];

        for (key_type, bytes, expected) in entries {
            let did = DidKey::from_raw_public_key(key_type, &bytes);
            assert_eq!(did.unwrap(), expected);
        }
    }

    #[test]
    fn test_did_key_generation_rejects_invalid_key_length() {
        let did = DidKey::from_raw_public_key(KeyType::X25519, &[0u8; 16]);
        assert!(matches!(did.unwrap_err(), CodecError::InvalidKeyLength { expected: 32, actual: 16, .. }));
    }

    #[test]
    fn test_did_key_expansion_ed25519() {
        let did = "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";
        let diddoc = DidKey::new().expand(did).unwrap();

        let expected: Value = serde_json::from_str(
            r##"{
                "@context": [
                    "https://www.w3.org/ns/did/v1",
                    "https://w3id.org/security/suites/ed25519-2018/v1"
                ],
                "id": "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
                "verificationMethod": [
                    {
                        "id": "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
                        "type": "Ed25519VerificationKey2018",
                        "controller": "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
                        "publicKeyBase58": "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"
                    }
                ],
                "authentication": [
                    "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
                ],
                "assertionMethod": [
                    "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
                ],
                "capabilityDelegation": [
                    "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
                ],
                "capabilityInvocation": [
                    "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(
            json_canon::to_string(&diddoc).unwrap(),
            json_canon::to_string(&expected).unwrap(),
        );
    }

    #[test]
    fn test_did_key_expansion_x25519_is_key_agreement_only() {
        let did = "did:key:z6LSeu9HkTHSfLLeUs2nnzUSNedgDUevfNQgQjQC23ZCit6F";
        let diddoc = DidKey::new().expand(did).unwrap();

        let vm = &diddoc.verification_method.as_ref().unwrap()[0];
        assert_eq!(vm.key_type, VerificationMethodType::X25519KeyAgreementKey2019.as_str());
        assert_eq!(
            diddoc.key_agreement.unwrap(),
            vec![VerificationMethodRef::Reference(vm.id.clone())]
        );
        assert!(diddoc.authentication.is_none());
        assert!(diddoc.assertion_method.is_none());
    }

    #[test]
    fn test_did_key_expansion_p256_keeps_multikey() {
        let did = "did:key:zDnaerDaTF5BXEavCrfRZEk316dpbLsfPDZ3WJ5hRTPFU2169";
        let diddoc = DidKey::new().expand(did).unwrap();

        let vm = &diddoc.verification_method.as_ref().unwrap()[0];
        assert_eq!(vm.key_type, "JsonWebKey2020");
        assert_eq!(
            vm.public_key_multibase.as_deref(),
            Some("zDnaerDaTF5BXEavCrfRZEk316dpbLsfPDZ3WJ5hRTPFU2169")
        );
        assert!(vm.public_key_base58.is_none());
    }

    #[test]
    fn test_did_key_expansion_fails_on_wrong_prefix() {
        let did = "did:peer:0z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";
        let err = DidKey::new().expand(did).unwrap_err();
        assert!(matches!(err, DIDResolutionError::InvalidDid(_)));
    }

    #[test]
    fn test_did_key_expansion_fails_on_malformed_multikey() {
        let err = DidKey::new().expand("did:key:").unwrap_err();
        assert!(matches!(err, DIDResolutionError::Codec(CodecError::EmptyIdentifier)));

        let err = DidKey::new().expand("did:key:Z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp").unwrap_err();
        assert!(matches!(err, DIDResolutionError::Codec(CodecError::UnsupportedEncoding { prefix: 'Z' })));
    }
}
