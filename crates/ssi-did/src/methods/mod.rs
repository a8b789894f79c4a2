//! A collection of methods for DID resolution and related utilities.
//!
//! This module provides functionality for creating and resolving Decentralized Identifiers (DIDs)
//! using different DID methods including [did:key], [did:peer], [did:web] and [did:pkh].
//!
//! # DID Methods
//!
//! ## did:key
//!
//! The [did:key] method is the simplest possible implementation of a DID Method that is able to achieve many,
//! but not all, of the benefits of utilizing DIDs. The DID embeds a multikey.
//!
//! ## did:peer
//!
//! The [did:peer] DID method is designed to be used independent of any central source of truth.
//! Numalgo 0 embeds a single multikey, numalgo 2 a list of purposed keys and services.
//!
//! ## did:web
//!
//! The [did:web] is a DID method that uses the web domain's existing reputation to create and manage DIDs.
//! Resolution fetches the document over HTTPS.
//!
//! ## did:pkh
//!
//! The [did:pkh] method derives a document from a blockchain account address.
//!
//! [did:key]: https://w3c-ccg.github.io/did-method-key/
//! [did:peer]: https://identity.foundation/peer-did-method-spec/
//! [did:web]: https://w3c-ccg.github.io/did-method-web/
//! [did:pkh]: https://github.com/w3c-ccg/did-pkh/blob/main/did-pkh-method-draft.md
//!
//! # Basic Usage
//!
//! ```
//! # use ssi_did::methods::{DIDResolver, DidWebConfig, MethodRegistry};
//! #
//! # async fn resolve_any_did() {
//!     let registry = MethodRegistry::with_default_methods(DidWebConfig::default()).unwrap();
//!     let did = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";
//!     let diddoc = registry.resolve(did).await;
//! # }
//! ```

mod common;
mod errors;
mod key;
mod peer;
mod pkh;
mod registry;
mod traits;
mod web;

// Re-exported items
pub use common::{
    decode_multikey, decode_multikey_type, encode_multikey, CodecError, DecodeContext, VerificationMethodType,
    MULTICODEC_PREFIX_LEN,
};
pub use errors::{ConfigError, DIDResolutionError, DidWebError, ParsingErrorSource, RegistryError};
pub use key::DidKey;
pub use peer::{DidPeer, DidPeerError, Purpose, PurposedKey};
pub use pkh::{DidPkh, DidPkhError};
pub use registry::MethodRegistry;
pub use traits::{DIDMethod, DIDResolver};
pub use web::{DidWeb, DidWebConfig};
