//! This module contains the key type tables.
//!
//! Provides the closed set of supported key types and curves, their [multicodec]
//! values, the [unsigned varint] framing used in multikey identifiers, and the
//! selection of a [JOSE] signature algorithm for a given key type and curve.
//!
//! [multicodec]: https://github.com/multiformats/multicodec
//! [unsigned varint]: https://github.com/multiformats/unsigned-varint
//! [JOSE]: https://www.iana.org/assignments/jose/jose.xhtml

pub mod alg;
mod errors;
mod key_type;
pub mod varint;

pub use alg::SignatureAlgorithm;
pub use errors::{AlgorithmError, ParseKeyError};
pub use key_type::{Curve, KeyFamily, KeyType};
