/*! # ssi-did

This library turns public keys into self-describing [multikey] identifiers and back,
selects the JOSE signature algorithm matching a key type and curve, and dispatches
Decentralized Identifier (DID) resolution across the supported DID methods.

## Features

- **Multikey codec**: `z`-prefixed base58btc encoding of `varint(multicodec) || public key`,
  with strict validation on decoding.
- **Algorithm selection**: deterministic mapping from key type and curve to a JOSE algorithm.
- **DID resolution**: a registry of [did:key], [did:peer], [did:web] and [did:pkh] resolvers
  keyed by method prefix.

[multikey]: https://www.w3.org/TR/controller-document/#multikey
[did:key]: https://w3c-ccg.github.io/did-method-key/
[did:peer]: https://identity.foundation/peer-did-method-spec/
[did:web]: https://w3c-ccg.github.io/did-method-web/
[did:pkh]: https://github.com/w3c-ccg/did-pkh/blob/main/did-pkh-method-draft.md

*/
pub mod crypto;
pub mod didcore;
pub mod jwk;
pub mod ldmodel;
pub mod methods;
