use std::collections::HashMap;

use async_trait::async_trait;

use super::{
    errors::{DIDResolutionError, RegistryError},
    traits::{DIDMethod, DIDResolver},
    DidKey, DidPeer, DidPkh, DidWeb, DidWebConfig,
};
use crate::didcore::Document;

/// Routes DIDs to the resolver registered for their method prefix.
///
/// The prefix is made of the first two colon-delimited segments of a DID,
/// e.g. `did:key`. Each prefix maps to at most one resolver.
#[derive(Default)]
pub struct MethodRegistry {
    methods: HashMap<&'static str, Box<dyn DIDMethod>>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the did:key, did:peer, did:web and did:pkh resolvers.
    pub fn with_default_methods(web_config: DidWebConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_default_methods(web_config)?;
        Ok(registry)
    }

    /// Registers the did:key, did:peer, did:web and did:pkh resolvers.
    ///
    /// Fails on the first method whose name is already taken.
    pub fn register_default_methods(&mut self, web_config: DidWebConfig) -> Result<(), RegistryError> {
        self.register(DidKey::new())?;
        self.register(DidPeer::new())?;
        self.register(DidWeb::with_config(web_config))?;
        self.register(DidPkh::new())
    }

    /// Registers a resolver under its method name.
    ///
    /// Fails if a resolver is already registered for that name.
    pub fn register<M>(&mut self, method: M) -> Result<(), RegistryError>
    where
        M: DIDMethod + 'static,
    {
        let name = method.name();
        if self.methods.contains_key(name) {
            return Err(RegistryError::DuplicateMethod(name.to_owned()));
        }

        tracing::debug!("registering DID method {name}");
        self.methods.insert(name, Box::new(method));
        Ok(())
    }

    /// Returns the registered method names.
    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }

    /// Returns the `scheme:method` prefix of a DID.
    fn method_prefix(did: &str) -> Result<String, DIDResolutionError> {
        let mut parts = did.split(':');
        match (parts.next(), parts.next()) {
            (Some(scheme), Some(method)) => Ok(format!("{scheme}:{method}")),
            _ => Err(DIDResolutionError::MalformedDid(did.to_owned())),
        }
    }
}

#[async_trait]
impl DIDResolver for MethodRegistry {
    /// Resolves a DID with the resolver registered for its method.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
        let prefix = Self::method_prefix(did)?;

        let Some(method) = self.methods.get(prefix.as_str()) else {
            tracing::warn!("no resolver registered for {prefix}");
            return Err(DIDResolutionError::MethodNotSupported(prefix));
        };

        tracing::debug!("resolving {did} with {prefix} resolver");
        method.resolve(did).await
    }
}
