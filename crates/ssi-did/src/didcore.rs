use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{jwk::Jwk, ldmodel::Context};

// === Structure of a did document ===

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    // The @context property defines the vocabulary used in the document,
    // mapping its keys to terms from external vocabularies.
    #[serde(rename = "@context", default)]
    pub context: Context,

    // === Identifier ===

    // Identifier property is mandatory in a did document.
    // see https://www.w3.org/TR/did-core/#dfn-id
    pub id: String,

    // See https://www.w3.org/TR/did-core/#dfn-controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<Controller>,

    // See https://www.w3.org/TR/did-core/#dfn-alsoknownas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub also_known_as: Option<Vec<String>>,

    // === Verification Methods ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    // === Verification Relationships ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<VerificationMethodRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<VerificationMethodRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<VerificationMethodRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<VerificationMethodRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<VerificationMethodRef>>,

    // === Services ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<Service>>,

    // === Dynamic Properties ===
    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_properties: HashMap<String, Value>,
}

impl Document {
    /// Creates an empty document for the given DID.
    pub fn new(context: Context, id: &str) -> Self {
        Self {
            context,
            id: id.to_owned(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Controller {
    SingleString(String),
    SetOfString(Vec<String>),
}

/// An entry of a verification relationship, either a reference to a
/// verification method or an embedded one.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VerificationMethodRef {
    Reference(String),
    Embedded(Box<VerificationMethod>),
}

// See https://www.w3.org/TR/did-core/#services
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,

    #[serde(rename = "type")]
    pub service_type: String,

    // Either a URI string or a map of endpoint properties
    pub service_endpoint: Value,

    // === Additional properties ===
    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_properties: HashMap<String, Value>,
}

// See https://www.w3.org/TR/did-core/#verification-methods
#[derive(Serialize, Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,

    #[serde(rename = "type")]
    pub key_type: String,

    pub controller: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_base58: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<Jwk>,

    // See https://github.com/w3c-ccg/did-pkh/blob/main/did-pkh-method-draft.md
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_account_id: Option<String>,

    // === Additional properties ===
    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_properties: HashMap<String, Value>,
}
