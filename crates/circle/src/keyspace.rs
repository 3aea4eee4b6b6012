//! Keyspace parameters shared by every participant of the circle.
//!
//! Peers that disagree on any of these values cannot route to each other, so
//! they are fixed at build time. [`KeyspaceSpec`] bundles them into a value
//! that a handshake layer can exchange and compare.

use alloy_primitives::U256;

use crate::error::KeyspaceMismatch;

/// Radix of the digest alphabet.
pub const BASE: u32 = 16;

/// Number of hex digits retained from a digest to form an address.
pub const KEY_SIZE: usize = 48;

/// Length of a SHA-256 digest rendered as hex.
pub const DIGEST_LEN: usize = 64;

/// Widest address supported.
///
/// One hex digit short of a full digest, so the difference of any two
/// addresses fits a signed 256-bit integer.
pub const MAX_KEY_SIZE: usize = DIGEST_LEN - 1;

/// Text encoding applied to non-byte artefacts before hashing.
pub const ENCODING: TextEncoding = TextEncoding::Utf8;

/// Digest function used for address derivation.
pub const HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

/// Text encodings an artefact may be encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TextEncoding {
    #[default]
    #[strum(serialize = "utf-8")]
    Utf8,
}

/// Digest functions an address may be derived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HashAlgorithm {
    #[default]
    #[strum(serialize = "sha-256")]
    Sha256,
}

/// Number of distinct addresses for identifiers `N` hex digits wide (`16^N`).
pub fn keyspace_size<const N: usize>() -> U256 {
    U256::from(1u8) << (4 * N)
}

/// Description of the keyspace a node operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyspaceSpec {
    /// Encoding applied to text artefacts.
    pub encoding: TextEncoding,
    /// Digest function.
    pub hash_algorithm: HashAlgorithm,
    /// Address width in hex digits.
    pub key_size: usize,
}

impl Default for KeyspaceSpec {
    fn default() -> Self {
        Self::current()
    }
}

impl KeyspaceSpec {
    /// The keyspace this build uses.
    pub const fn current() -> Self {
        Self::for_width::<KEY_SIZE>()
    }

    /// The keyspace of identifiers `N` hex digits wide.
    pub const fn for_width<const N: usize>() -> Self {
        Self {
            encoding: ENCODING,
            hash_algorithm: HASH_ALGORITHM,
            key_size: N,
        }
    }

    /// Total number of addresses in this keyspace.
    ///
    /// Saturates at `U256::MAX` for widths beyond the 256-bit range.
    pub fn size(&self) -> U256 {
        match self.key_size.checked_mul(4) {
            Some(bits) if bits < 256 => U256::from(1u8) << bits,
            _ => U256::MAX,
        }
    }

    /// Checks that a remote peer shares this keyspace.
    ///
    /// Reports the first field that differs.
    pub fn check_compatible(&self, other: &Self) -> Result<(), KeyspaceMismatch> {
        if self.encoding != other.encoding {
            return Err(KeyspaceMismatch::Encoding {
                local: self.encoding,
                remote: other.encoding,
            });
        }
        if self.hash_algorithm != other.hash_algorithm {
            return Err(KeyspaceMismatch::HashAlgorithm {
                local: self.hash_algorithm,
                remote: other.hash_algorithm,
            });
        }
        if self.key_size != other.key_size {
            return Err(KeyspaceMismatch::KeySize {
                local: self.key_size,
                remote: other.key_size,
            });
        }
        Ok(())
    }
}
