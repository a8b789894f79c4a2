use async_trait::async_trait;

use super::DidPeer;
use crate::{
    didcore::Document,
    methods::{errors::DIDResolutionError, traits::DIDResolver},
};

#[async_trait]
impl DIDResolver for DidPeer {
    /// Resolves a did:peer address by expanding it offline.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
        self.expand(did).map_err(Into::into)
    }
}
