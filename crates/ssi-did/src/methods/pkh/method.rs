use lazy_static::lazy_static;
use regex::Regex;

use super::errors::DidPkhError;
use crate::{
    didcore::{Document, VerificationMethod, VerificationMethodRef},
    ldmodel::Context,
    methods::{
        common::{VerificationMethodType, DID_CONTEXT},
        traits::DIDMethod,
    },
};

lazy_static!(
    // did:pkh:<namespace>:<reference>:<account address>
    static ref DID_PKH_REGEX: Regex =
        Regex::new("^did:pkh:([-a-z0-9]{3,8}):([-_a-zA-Z0-9]{1,32}):([-.%a-zA-Z0-9]{1,128})$").unwrap();
);

#[derive(Debug, Default, Clone, Copy)]
pub struct DidPkh;

impl DIDMethod for DidPkh {
    fn name(&self) -> &'static str {
        "did:pkh"
    }
}

impl DidPkh {
    pub fn new() -> Self {
        Self
    }

    /// Returns the verification method type of accounts in a CAIP-2 namespace.
    fn verification_method_type(namespace: &str) -> Result<VerificationMethodType, DidPkhError> {
        match namespace {
            "eip155" => Ok(VerificationMethodType::EcdsaSecp256k1RecoveryMethod2020),
            "bip122" => Ok(VerificationMethodType::EcdsaSecp256k1VerificationKey2019),
            "solana" => Ok(VerificationMethodType::Ed25519VerificationKey2018),
            other => Err(DidPkhError::UnsupportedNamespace(other.to_owned())),
        }
    }

    /// Expands a did:pkh address into DID document
    pub fn expand(&self, did: &str) -> Result<Document, DidPkhError> {
        let captures = DID_PKH_REGEX
            .captures(did)
            .ok_or_else(|| DidPkhError::InvalidDid(did.to_owned()))?;

        let namespace = &captures[1];
        let vm_type = Self::verification_method_type(namespace)?;
        let account_id = format!("{namespace}:{}:{}", &captures[2], &captures[3]);

        tracing::debug!("expanding did:pkh for account {account_id}");

        let id = format!("{did}#blockchainAccountId");
        let method = VerificationMethod {
            id: id.clone(),
            key_type: vm_type.to_string(),
            controller: did.to_owned(),
            blockchain_account_id: Some(account_id),
            ..Default::default()
        };
        let reference = vec![VerificationMethodRef::Reference(id)];

        let mut diddoc = Document::new(
            Context::SetOfString(vec![DID_CONTEXT.to_owned(), vm_type.context_url().to_owned()]),
            did,
        );
        diddoc.verification_method = Some(vec![method]);
        diddoc.authentication = Some(reference.clone());
        diddoc.assertion_method = Some(reference.clone());
        diddoc.capability_delegation = Some(reference.clone());
        diddoc.capability_invocation = Some(reference);

        Ok(diddoc)
    }
}
