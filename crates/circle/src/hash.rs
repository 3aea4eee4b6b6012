//! Artefact hashing.
//!
//! Every address on the circle starts as a SHA-256 digest of the artefact's
//! bytes. Text artefacts are encoded with [`ENCODING`] first.

use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use bytes::Bytes;
use sha2::{Digest, Sha256};

use crate::{error::EncodingError, keyspace::ENCODING};

/// Content that can be placed on the circle.
///
/// Implementors expose the exact bytes that get hashed. Text types are
/// encoded with [`ENCODING`]; platform strings that are not valid text fail
/// with [`EncodingError`].
pub trait Artefact {
    /// Returns the bytes this artefact hashes to.
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError>;
}

impl Artefact for [u8] {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const M: usize> Artefact for [u8; M] {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl Artefact for Vec<u8> {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl Artefact for Bytes {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        Ok(Cow::Borrowed(self.as_ref()))
    }
}

impl Artefact for str {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl Artefact for String {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        self.as_str().artefact_bytes()
    }
}

impl Artefact for OsStr {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        self.to_str()
            .map(|text| Cow::Borrowed(text.as_bytes()))
            .ok_or(EncodingError::InvalidText { encoding: ENCODING })
    }
}

impl Artefact for OsString {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        self.as_os_str().artefact_bytes()
    }
}

impl Artefact for Path {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        self.as_os_str().artefact_bytes()
    }
}

impl Artefact for PathBuf {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        self.as_os_str().artefact_bytes()
    }
}

impl<T: Artefact + ?Sized> Artefact for &T {
    fn artefact_bytes(&self) -> Result<Cow<'_, [u8]>, EncodingError> {
        (**self).artefact_bytes()
    }
}

/// Returns the lowercase hex SHA-256 digest of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Encodes `artefact` and returns its hex digest.
pub fn hash_artefact<A: Artefact + ?Sized>(artefact: &A) -> Result<String, EncodingError> {
    Ok(digest(&artefact.artefact_bytes()?))
}
