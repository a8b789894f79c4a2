use async_trait::async_trait;

use super::DidKey;
use crate::{
    didcore::Document,
    methods::{errors::DIDResolutionError, traits::DIDResolver},
};

#[async_trait]
impl DIDResolver for DidKey {
    /// Resolves a did:key address by expanding its embedded key.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
        self.expand(did)
    }
}
