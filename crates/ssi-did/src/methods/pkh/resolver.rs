use async_trait::async_trait;

use super::DidPkh;
use crate::{
    didcore::Document,
    methods::{errors::DIDResolutionError, traits::DIDResolver},
};

#[async_trait]
impl DIDResolver for DidPkh {
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
        self.expand(did).map_err(Into::into)
    }
}
