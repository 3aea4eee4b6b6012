//! Identifier circle for the Tulip overlay.
//!
//! Peers and content artefacts share one keyspace: every artefact is hashed,
//! and the leading digits of its digest become its address. Routing and
//! storage placement build on the primitives here.
//!
//! # Types
//!
//! ## Addresses
//! - [`Identifier`] - Fixed-width address, `KEY_SIZE` hex digits by default
//! - [`Node`] - Artefact bound to its derived address
//! - [`Artefact`] - Content that can be hashed onto the circle
//!
//! ## Derivation
//! - [`digest`], [`hash_artefact`] - SHA-256 hex digests
//! - [`normalize`] - Digest to address
//! - [`derive`] - Artefact to address, the single derivation entry point
//!
//! ## Proximity
//! - [`distance`], [`magnitude`], [`distance_cmp`] - Linear distance metric
//! - [`nearest`], [`nearest_k`] - Candidates ordered by distance from a target
//!
//! ## Identities
//! - [`fresh_identity`], [`fresh_identity_with`] - Random peer nodes
//!
//! ## Keyspace
//! - [`KEY_SIZE`], [`keyspace_size`], [`KeyspaceSpec`] - Shared parameters
//!
//! # Example
//!
//! ```
//! use tulip_circle::{Identifier, Node, nearest};
//!
//! let target: Identifier<8> = "00000000".parse().unwrap();
//! let nodes = ["hello", "world", "tulip"].map(|s| Node::<8>::new(s).unwrap());
//!
//! let closest = nearest(&target, &nodes).next().unwrap();
//! assert_eq!(closest.address().to_string().len(), 8);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod codec;
mod distance;
mod error;
mod hash;
mod identifier;
mod identity;
pub mod keyspace;
mod node;
mod proximity;

pub use codec::{derive, normalize};
pub use distance::{Distance, distance, distance_cmp, magnitude};
pub use error::{
    DerivationError, DigestError, EncodingError, IdentityError, KeyspaceMismatch, OutOfKeyspace,
    ParseIdentifierError,
};
pub use hash::{Artefact, digest, hash_artefact};
pub use identifier::Identifier;
pub use identity::{MAX_IDENTITY_ATTEMPTS, fresh_identity, fresh_identity_with};
pub use keyspace::{KEY_SIZE, KeyspaceSpec, keyspace_size};
pub use node::Node;
pub use proximity::{Locate, Nearest, nearest, nearest_k};

// Re-export the integer types addresses and distances are expressed in.
pub use alloy_primitives::{I256, U256};
pub use bytes::Bytes;
