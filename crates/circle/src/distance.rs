use std::{cmp::Ordering, ops::Sub};

use alloy_primitives::{I256, U256};

use crate::identifier::Identifier;

/// Signed distance between two addresses.
pub type Distance = I256;

/// Returns `value(a) - value(b)`.
///
/// The distance is linear and directional: positive when `a` lies above `b`
/// on the circle, negative when below. It does not wrap around the keyspace.
#[inline]
pub fn distance<const N: usize>(a: &Identifier<N>, b: &Identifier<N>) -> Distance {
    // Both values are below 2^252, so neither the conversion nor the
    // subtraction can overflow.
    I256::from_raw(a.value()) - I256::from_raw(b.value())
}

/// Returns `|value(a) - value(b)|`, the closeness of two addresses.
#[inline]
pub fn magnitude<const N: usize>(a: &Identifier<N>, b: &Identifier<N>) -> U256 {
    let (x, y) = (a.value(), b.value());
    if x >= y { x - y } else { y - x }
}

/// Compares how close `x` and `y` are to `target`.
///
/// Returns:
///   - `Ordering::Less` if `x` is closer to `target` than `y`
///   - `Ordering::Equal` if `x` and `y` are equidistant from `target`
///   - `Ordering::Greater` if `x` is farther from `target` than `y`
#[inline]
pub fn distance_cmp<const N: usize>(
    target: &Identifier<N>,
    x: &Identifier<N>,
    y: &Identifier<N>,
) -> Ordering {
    magnitude(target, x).cmp(&magnitude(target, y))
}

impl<const N: usize> Identifier<N> {
    /// Returns true if `self` is strictly closer to `a` than `y` is.
    pub fn closer(&self, a: &Self, y: &Self) -> bool {
        matches!(distance_cmp(a, self, y), Ordering::Less)
    }
}

impl<const N: usize> Sub for Identifier<N> {
    type Output = Distance;

    fn sub(self, rhs: Self) -> Distance {
        distance(&self, &rhs)
    }
}

impl<const N: usize> Sub for &Identifier<N> {
    type Output = Distance;

    fn sub(self, rhs: Self) -> Distance {
        distance(self, rhs)
    }
}
