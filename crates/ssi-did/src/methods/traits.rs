//! Trait definitions for DID methods.

use async_trait::async_trait;

use crate::{didcore::Document, methods::errors::DIDResolutionError};

/// Abstract contract for DID methods.
pub trait DIDMethod: DIDResolver {
    /// Returns the DIDMethod's registered name, prefixed with `did:`,
    /// e.g. did:key, did:web, etc.
    fn name(&self) -> &'static str;
}

/// Abstract contract for DID resolution.
///
/// [See DID Resolution Specification](https://w3c.github.io/did-resolution)
#[async_trait]
pub trait DIDResolver: Send + Sync {
    /// Resolves a DID address into its corresponding DID document.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError>;
}
