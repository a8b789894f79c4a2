use multibase::Base::Base58Btc;

use super::{decode_multikey_type, CodecError, DecodeContext, VerificationMethodType};
use crate::{
    crypto::KeyType,
    didcore::{Document, VerificationMethod, VerificationMethodRef},
    ldmodel::Context,
};

pub(crate) const DID_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// Builds the verification method of a decoded key.
///
/// Legacy 2018/2019 suites carry the raw key in base58, the others the multikey itself.
pub(crate) fn verification_method(
    id: &str,
    controller: &str,
    multikey: &str,
    raw_public_key: &[u8],
    vm_type: VerificationMethodType,
) -> VerificationMethod {
    use VerificationMethodType::*;

    let (public_key_base58, public_key_multibase) = match vm_type {
        Ed25519VerificationKey2018 | X25519KeyAgreementKey2019 | EcdsaSecp256k1VerificationKey2019 => {
            (Some(Base58Btc.encode(raw_public_key)), None)
        }
        _ => (None, Some(multikey.to_owned())),
    };

    VerificationMethod {
        id: id.to_owned(),
        key_type: vm_type.to_string(),
        controller: controller.to_owned(),
        public_key_base58,
        public_key_multibase,
        ..Default::default()
    }
}

/// Expands a DID embedding a single multikey into its document.
///
/// Key agreement keys are only referenced from `keyAgreement`; every other
/// key from the four signing relationships.
pub(crate) fn single_key_document(did: &str, multikey: &str, context: DecodeContext) -> Result<Document, CodecError> {
    let (key_type, raw_public_key) = decode_multikey_type(multikey)?;
    let vm_type = VerificationMethodType::for_key(key_type, context);

    let id = format!("{did}#{multikey}");
    let method = verification_method(&id, did, multikey, &raw_public_key, vm_type);
    let reference = vec![VerificationMethodRef::Reference(id)];

    let mut diddoc = Document::new(
        Context::SetOfString(vec![DID_CONTEXT.to_owned(), vm_type.context_url().to_owned()]),
        did,
    );
    diddoc.verification_method = Some(vec![method]);

    if key_type == KeyType::X25519 {
        diddoc.key_agreement = Some(reference);
    } else {
        diddoc.authentication = Some(reference.clone());
        diddoc.assertion_method = Some(reference.clone());
        diddoc.capability_delegation = Some(reference.clone());
        diddoc.capability_invocation = Some(reference);
    }

    Ok(diddoc)
}
