//! Implementation of the DID Web method as defined in [the did:web method draft](https://w3c-ccg.github.io/did-method-web/).
//!
//! # Examples
//!
//! ### Derive the document URL of a DID
//!
//! ```rust
//! use ssi_did::methods::DidWeb;
//!
//! let url = DidWeb::document_url("did:web:example.com%3A3000:user:alice").unwrap();
//! assert_eq!(url, "https://example.com:3000/user/alice/did.json");
//! ```
//!
//! ### Resolve a DID
//!
//! ```rust
//! use ssi_did::methods::{DIDResolver, DidWeb, DidWebConfig};
//!
//! # async fn resolves_did_web_document() {
//! let resolver = DidWeb::with_config(DidWebConfig::default());
//! let diddoc = resolver.resolve("did:web:w3c-ccg.github.io").await;
//! # }
//! ```

mod config;
mod resolver;

pub use config::DidWebConfig;
pub use resolver::DidWeb;
