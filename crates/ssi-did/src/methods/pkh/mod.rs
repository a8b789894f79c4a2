//! The [`did:pkh`] method derives a DID document from a blockchain account
//! identifier in the [CAIP-10] format, without any registry lookup.
//!
//! [`did:pkh`]: https://github.com/w3c-ccg/did-pkh/blob/main/did-pkh-method-draft.md
//! [CAIP-10]: https://github.com/ChainAgnostic/CAIPs/blob/main/CAIPs/caip-10.md

mod errors;
mod method;
mod resolver;

pub use errors::DidPkhError;
pub use method::DidPkh;
