//! Artefacts bound to their addresses.

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Sub,
};

use bytes::Bytes;

use crate::{
    codec::derive,
    distance::{Distance, distance},
    error::DerivationError,
    hash::Artefact,
    identifier::Identifier,
    keyspace::KEY_SIZE,
};

/// A point on the circle: an artefact and the address derived from it.
///
/// Peers and content share this type; only the origin of the artefact bytes
/// differs. The address is always the derivation of the artefact, and the two
/// can only change together through [`bind`](Self::bind).
///
/// Equality and hashing use the address alone, so distinct artefacts that
/// collide on the same address are treated as the same node.
#[derive(Clone)]
pub struct Node<const N: usize = KEY_SIZE> {
    artefact: Bytes,
    address: Identifier<N>,
}

impl<const N: usize> Node<N> {
    /// Places an artefact on the circle.
    pub fn new<A: Artefact + ?Sized>(artefact: &A) -> Result<Self, DerivationError> {
        let bytes = artefact.artefact_bytes()?;
        let address = derive(&*bytes)?;
        Ok(Self {
            artefact: Bytes::from(bytes.into_owned()),
            address,
        })
    }

    /// Places raw artefact bytes on the circle without copying them.
    pub fn from_bytes(artefact: Bytes) -> Result<Self, DerivationError> {
        let address = derive(&*artefact)?;
        Ok(Self { artefact, address })
    }

    /// Rebinds the node to a new artefact and recomputes its address.
    ///
    /// If no address can be derived the node is left unchanged.
    pub fn bind<A: Artefact + ?Sized>(&mut self, artefact: &A) -> Result<(), DerivationError> {
        *self = Self::new(artefact)?;
        Ok(())
    }

    /// The node's address.
    #[inline]
    pub fn address(&self) -> &Identifier<N> {
        &self.address
    }

    /// Numeric view of the node's position.
    #[inline]
    pub fn as_identifier(&self) -> Identifier<N> {
        self.address
    }

    /// The bytes the address was derived from.
    #[inline]
    pub fn artefact(&self) -> &Bytes {
        &self.artefact
    }

    /// Splits the node into its artefact and address.
    pub fn into_parts(self) -> (Bytes, Identifier<N>) {
        (self.artefact, self.address)
    }
}

impl<const N: usize> PartialEq for Node<N> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<const N: usize> Eq for Node<N> {}

impl<const N: usize> Hash for Node<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl<const N: usize> fmt::Debug for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("address", &self.address)
            .field("artefact_len", &self.artefact.len())
            .finish()
    }
}

impl<const N: usize> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.address, f)
    }
}

impl<const N: usize> From<&Node<N>> for Identifier<N> {
    fn from(node: &Node<N>) -> Self {
        node.address
    }
}

impl<const N: usize> Sub for &Node<N> {
    type Output = Distance;

    fn sub(self, rhs: Self) -> Distance {
        distance(&self.address, &rhs.address)
    }
}
