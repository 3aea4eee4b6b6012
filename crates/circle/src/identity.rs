//! Random identities for new peers.
//!
//! A peer joining the circle needs an address no other peer is likely to
//! hold. The identity artefact is `N` random bytes, placed like any other
//! artefact. The randomness only needs to spread peers over the keyspace; it
//! is not a secret.

use bytes::Bytes;
use rand::Rng;
use tracing::{debug, warn};

use crate::{
    error::{DerivationError, IdentityError},
    node::Node,
};

/// Draws attempted before identity generation gives up.
pub const MAX_IDENTITY_ATTEMPTS: usize = 8;

/// Generates a fresh peer node using the thread-local generator.
///
/// Safe to call from many threads at once; each thread draws from its own
/// generator.
pub fn fresh_identity<const N: usize>() -> Result<Node<N>, IdentityError> {
    fresh_identity_with(&mut rand::rng())
}

/// Generates a fresh peer node from the given random source.
pub fn fresh_identity_with<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<Node<N>, IdentityError> {
    generate(rng, Node::from_bytes)
}

fn generate<const N: usize, R, F>(rng: &mut R, mut place: F) -> Result<Node<N>, IdentityError>
where
    R: Rng + ?Sized,
    F: FnMut(Bytes) -> Result<Node<N>, DerivationError>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;

        let mut name = [0u8; N];
        rng.fill_bytes(&mut name);

        match place(Bytes::copy_from_slice(&name)) {
            Ok(node) => {
                debug!(address = %node, attempt, "generated identity");
                return Ok(node);
            }
            Err(err) if attempt < MAX_IDENTITY_ATTEMPTS => {
                warn!(%err, attempt, "identity derivation failed, drawing again");
            }
            Err(last) => {
                return Err(IdentityError::Exhausted {
                    attempts: attempt,
                    last,
                });
            }
        }
    }
}
