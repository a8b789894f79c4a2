use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    errors::DidPeerError,
    util::{abbreviate_service, expand_service},
};
use crate::{
    crypto::KeyType,
    didcore::{Document, Service, VerificationMethodRef},
    ldmodel::Context,
    methods::{
        common::{
            decode_multikey_type, encode_multikey, single_key_document, verification_method, DecodeContext,
            VerificationMethodType, DID_CONTEXT,
        },
        traits::DIDMethod,
    },
};

const DID_PEER_PREFIX: &str = "did:peer:";

#[derive(Debug, Default, Clone, Copy)]
pub struct DidPeer;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Purpose {
    Assertion,
    Encryption,   // Key Agreement
    Verification, // Authentication
    CapabilityInvocation,
    CapabilityDelegation,
    Service,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurposedKey {
    pub purpose: Purpose,
    pub public_key_multibase: String,
}

impl DIDMethod for DidPeer {
    fn name(&self) -> &'static str {
        "did:peer"
    }
}

impl Purpose {
    /// Converts purpose to normalized one-letter code
    pub fn code(&self) -> char {
        match self {
            Purpose::Assertion => 'A',
            Purpose::Encryption => 'E',
            Purpose::Verification => 'V',
            Purpose::CapabilityInvocation => 'I',
            Purpose::CapabilityDelegation => 'D',
            Purpose::Service => 'S',
        }
    }

    /// Derives purpose from normalized one-letter code
    pub fn from_code(c: char) -> Result<Self, DidPeerError> {
        match c {
            'A' => Ok(Purpose::Assertion),
            'E' => Ok(Purpose::Encryption),
            'V' => Ok(Purpose::Verification),
            'I' => Ok(Purpose::CapabilityInvocation),
            'D' => Ok(Purpose::CapabilityDelegation),
            'S' => Ok(Purpose::Service),
            _ => Err(DidPeerError::InvalidPurposeCode(c)),
        }
    }
}

/// Verification relationships collected while expanding a did:peer:2 address.
#[derive(Default)]
struct Relationships {
    authentication: Vec<VerificationMethodRef>,
    assertion_method: Vec<VerificationMethodRef>,
    key_agreement: Vec<VerificationMethodRef>,
    capability_delegation: Vec<VerificationMethodRef>,
    capability_invocation: Vec<VerificationMethodRef>,
}

impl Relationships {
    fn push(&mut self, purpose: Purpose, id: String) {
        let reference = VerificationMethodRef::Reference(id);
        match purpose {
            Purpose::Assertion => self.assertion_method.push(reference),
            Purpose::Encryption => self.key_agreement.push(reference),
            Purpose::Verification => self.authentication.push(reference),
            Purpose::CapabilityDelegation => self.capability_delegation.push(reference),
            Purpose::CapabilityInvocation => self.capability_invocation.push(reference),
            Purpose::Service => (),
        }
    }

    fn apply(self, diddoc: &mut Document) {
        let non_empty = |refs: Vec<VerificationMethodRef>| (!refs.is_empty()).then_some(refs);

        diddoc.authentication = non_empty(self.authentication);
        diddoc.assertion_method = non_empty(self.assertion_method);
        diddoc.key_agreement = non_empty(self.key_agreement);
        diddoc.capability_delegation = non_empty(self.capability_delegation);
        diddoc.capability_invocation = non_empty(self.capability_invocation);
    }
}

impl DidPeer {
    pub fn new() -> Self {
        Self
    }

    /// Method 0: Generates did:peer address from inception key without doc
    ///
    /// See https://identity.foundation/peer-did-method-spec/#method-0-inception-key-without-doc
    pub fn create_numalgo_0(key_type: KeyType, bytes: &[u8]) -> Result<String, DidPeerError> {
        let multikey = encode_multikey(key_type, bytes)?;

        Ok(format!("{DID_PEER_PREFIX}0{multikey}"))
    }

    /// Method 2: Generates did:peer address from multiple inception key
    ///
    /// See https://identity.foundation/peer-did-method-spec/#method-2-multiple-inception-key-without-doc
    pub fn create_numalgo_2(keys: &[PurposedKey], services: &[Service]) -> Result<String, DidPeerError> {
        if keys.is_empty() && services.is_empty() {
            return Err(DidPeerError::EmptyArguments);
        }

        let mut chain = vec![];

        for key in keys {
            if key.purpose == Purpose::Service {
                return Err(DidPeerError::UnexpectedPurpose);
            }

            // Only well-formed multikeys make it into an address
            decode_multikey_type(&key.public_key_multibase)?;
            chain.push(format!(".{}{}", key.purpose.code(), key.public_key_multibase));
        }

        for service in services {
            let mut value = serde_json::to_value(service)?;
            abbreviate_service(&mut value);

            let encoded = Base64UrlUnpadded::encode_string(serde_json::to_string(&value)?.as_bytes());
            chain.push(format!(".{}{}", Purpose::Service.code(), encoded));
        }

        Ok(format!("{DID_PEER_PREFIX}2{}", chain.concat()))
    }

    /// Expands `did:peer` address into DID document
    pub fn expand(&self, did: &str) -> Result<Document, DidPeerError> {
        let stripped = did
            .strip_prefix(DID_PEER_PREFIX)
            .ok_or_else(|| DidPeerError::InvalidDid(did.to_owned()))?;

        let mut chars = stripped.chars();
        let numalgo = chars.next().ok_or_else(|| DidPeerError::InvalidDid(did.to_owned()))?;

        tracing::debug!("expanding did:peer with numalgo {numalgo}");
        match numalgo {
            '0' => Self::expand_numalgo_0(did, chars.as_str()),
            '2' => Self::expand_numalgo_2(did, chars.as_str()),
            other => Err(DidPeerError::UnsupportedNumalgo(other)),
        }
    }

    /// Expands did:peer:0 address
    ///
    /// See https://identity.foundation/peer-did-method-spec/#method-0-inception-key-without-doc
    fn expand_numalgo_0(did: &str, multikey: &str) -> Result<Document, DidPeerError> {
        single_key_document(did, multikey, DecodeContext::Peer).map_err(Into::into)
    }

    /// Expands did:peer:2 address
    ///
    /// See https://identity.foundation/peer-did-method-spec/#resolving-a-didpeer2
    fn expand_numalgo_2(did: &str, chain: &str) -> Result<Document, DidPeerError> {
        let chain = chain
            .strip_prefix('.')
            .ok_or_else(|| DidPeerError::InvalidDid(did.to_owned()))?;

        let mut contexts = vec![DID_CONTEXT.to_owned()];
        let mut relationships = Relationships::default();
        let mut methods = vec![];
        let mut services = vec![];

        for element in chain.split('.') {
            let mut chars = element.chars();
            let code = chars.next().ok_or_else(|| DidPeerError::InvalidDid(did.to_owned()))?;
            let purpose = Purpose::from_code(code)?;
            let value = chars.as_str();

            if purpose == Purpose::Service {
                services.push(Self::decode_service(value, services.len())?);
                continue;
            }

            let (key_type, raw_public_key) = decode_multikey_type(value)?;
            let vm_type = VerificationMethodType::for_key(key_type, DecodeContext::Peer);

            let context = vm_type.context_url().to_owned();
            if !contexts.contains(&context) {
                contexts.push(context);
            }

            let id = format!("#key-{}", methods.len() + 1);
            relationships.push(purpose, id.clone());
            methods.push(verification_method(&id, did, value, &raw_public_key, vm_type));
        }

        let mut diddoc = Document::new(Context::SetOfString(contexts), did);
        diddoc.verification_method = (!methods.is_empty()).then_some(methods);
        diddoc.service = (!services.is_empty()).then_some(services);
        relationships.apply(&mut diddoc);

        Ok(diddoc)
    }

    /// Decodes an abbreviated base64url service element.
    ///
    /// Services without an id are numbered `#service`, `#service-1`, ...
    /// in order of appearance.
    fn decode_service(encoded: &str, position: usize) -> Result<Service, DidPeerError> {
        let bytes = Base64UrlUnpadded::decode_vec(encoded.trim_end_matches('='))
            .map_err(|err| DidPeerError::InvalidServiceEncoding(err.to_string()))?;

        let mut value: Value = serde_json::from_slice(&bytes)?;
        expand_service(&mut value);

        let Some(obj) = value.as_object_mut() else {
            return Err(DidPeerError::InvalidServiceEncoding(String::from("expected a JSON object")));
        };

        if !obj.contains_key("id") {
            let id = match position {
                0 => String::from("#service"),
                n => format!("#service-{n}"),
            };
            obj.insert(String::from("id"), Value::String(id));
        }

        serde_json::from_value(value).map_err(Into::into)
    }
}
