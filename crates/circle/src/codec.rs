//! Address derivation: digest normalization into the keyspace.

use tracing::{debug, trace};

use crate::{
    error::{DerivationError, DigestError},
    hash::{Artefact, hash_artefact},
    identifier::Identifier,
    keyspace::DIGEST_LEN,
};

/// Normalizes a full hex digest into an identifier `N` digits wide.
///
/// The digest must be exactly [`DIGEST_LEN`] hex characters. The address is
/// its leading `N` digits read big-endian; the remaining digits are discarded,
/// so artefacts sharing a prefix collide.
pub fn normalize<const N: usize>(digest: &str) -> Result<Identifier<N>, DigestError> {
    if digest.len() != DIGEST_LEN {
        return Err(DigestError::Length {
            expected: DIGEST_LEN,
            got: digest.len(),
        });
    }
    if let Some((index, ch)) = digest.char_indices().find(|(_, ch)| !ch.is_ascii_hexdigit()) {
        return Err(DigestError::NonHex { index, ch });
    }

    // All ascii at this point, so any prefix is a char boundary.
    let (prefix, _) = digest.split_at(N);
    Identifier::from_hex_digits(prefix).map_err(|(index, ch)| DigestError::NonHex { index, ch })
}

/// Derives the address of an artefact: hash, then normalize.
///
/// This is the only way addresses are computed.
pub fn derive<const N: usize, A: Artefact + ?Sized>(
    artefact: &A,
) -> Result<Identifier<N>, DerivationError> {
    let result = hash_artefact(artefact)
        .map_err(DerivationError::from)
        .and_then(|digest| normalize(&digest).map_err(DerivationError::from));

    match &result {
        Ok(address) => trace!(%address, "derived address"),
        Err(err) => debug!(%err, "address derivation failed"),
    }
    result
}
