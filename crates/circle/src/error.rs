//! Error types for address derivation and identifier handling.

use alloy_primitives::U256;

use crate::keyspace::{HashAlgorithm, TextEncoding};

/// An artefact could not be converted to bytes under the network's text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The artefact is not valid text in the required encoding.
    #[error("artefact is not valid {encoding} text")]
    InvalidText { encoding: TextEncoding },
}

/// A digest was rejected during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    /// The digest does not have the full digest length.
    #[error("digest length mismatch (expected: {expected}, got: {got})")]
    Length { expected: usize, got: usize },

    /// The digest contains a character outside the hex alphabet.
    #[error("digest has non-hex character {ch:?} at index {index}")]
    NonHex { index: usize, ch: char },
}

/// No address could be derived for an artefact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DerivationError {
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("normalization failed: {0}")]
    Digest(#[from] DigestError),
}

/// Canonical identifier text could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdentifierError {
    #[error("identifier length mismatch (expected: {expected}, got: {got})")]
    Length { expected: usize, got: usize },

    #[error("identifier has non-hex character {ch:?} at index {index}")]
    NonHex { index: usize, ch: char },
}

/// A numeric value does not lie within the keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value {value} exceeds a keyspace of {width} hex digits")]
pub struct OutOfKeyspace {
    /// The rejected value.
    pub value: U256,
    /// Width of the keyspace in hex digits.
    pub width: usize,
}

/// Identity generation gave up after repeated derivation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("no valid identity after {attempts} attempts: {last}")]
    Exhausted {
        attempts: usize,
        last: DerivationError,
    },
}

/// Two peers disagree on the keyspace they operate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyspaceMismatch {
    #[error("text encoding mismatch (local: {local}, remote: {remote})")]
    Encoding {
        local: TextEncoding,
        remote: TextEncoding,
    },

    #[error("hash algorithm mismatch (local: {local}, remote: {remote})")]
    HashAlgorithm {
        local: HashAlgorithm,
        remote: HashAlgorithm,
    },

    #[error("key size mismatch (local: {local}, remote: {remote})")]
    KeySize { local: usize, remote: usize },
}
