//! Fixed-width addresses on the circle.

use core::{fmt, str::FromStr};

use alloy_primitives::U256;

use crate::{
    error::{OutOfKeyspace, ParseIdentifierError},
    keyspace::{KEY_SIZE, MAX_KEY_SIZE, keyspace_size},
};

/// Hex digits needed to render any `U256`.
const U256_HEX_DIGITS: usize = 64;

/// A position on the circle, `N` hex digits wide.
///
/// The numeric value always lies in `[0, 16^N)`. The canonical text form is
/// exactly `N` lowercase hex digits, zero padded on the left, so small values
/// never lose their leading digits.
///
/// The width is part of the type: identifiers from keyspaces of different
/// widths cannot be compared or measured against each other. `N` must lie in
/// `1..=63`, which is checked when an identifier is constructed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier<const N: usize = KEY_SIZE> {
    value: U256,
}

impl<const N: usize> Identifier<N> {
    const VALID_WIDTH: () = assert!(
        N >= 1 && N <= MAX_KEY_SIZE,
        "identifier width must be between 1 and 63 hex digits"
    );

    /// Width of the canonical text form in hex digits.
    pub const WIDTH: usize = N;

    /// The lowest address.
    pub const ZERO: Self = {
        let () = Self::VALID_WIDTH;
        Self { value: U256::ZERO }
    };

    /// The highest address, `16^N - 1`.
    pub fn max() -> Self {
        Self::from_value_unchecked(keyspace_size::<N>() - U256::from(1u8))
    }

    /// Creates an identifier from a numeric value.
    ///
    /// Fails if `value` does not fit in `N` hex digits.
    pub fn from_value(value: U256) -> Result<Self, OutOfKeyspace> {
        if value >= keyspace_size::<N>() {
            return Err(OutOfKeyspace { value, width: N });
        }
        Ok(Self::from_value_unchecked(value))
    }

    /// Caller guarantees `value < 16^N`.
    pub(crate) fn from_value_unchecked(value: U256) -> Self {
        let () = Self::VALID_WIDTH;
        debug_assert!(value < keyspace_size::<N>(), "value outside keyspace");
        Self { value }
    }

    /// Parses exactly `N` hex digits, most significant first.
    ///
    /// On failure returns the byte index and character that is not a hex digit.
    pub(crate) fn from_hex_digits(digits: &str) -> Result<Self, (usize, char)> {
        let mut value = U256::ZERO;
        for (index, ch) in digits.char_indices() {
            let nibble = ch.to_digit(16).ok_or((index, ch))?;
            value = (value << 4usize) | U256::from(nibble);
        }
        Ok(Self::from_value_unchecked(value))
    }

    /// Numeric value of the address.
    #[inline]
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Canonical text form: `N` lowercase hex digits.
    pub fn to_hex_string(&self) -> String {
        let full = hex::encode(self.value.to_be_bytes::<32>());
        let (padding, digits) = full.split_at(U256_HEX_DIGITS - N);
        debug_assert!(padding.bytes().all(|b| b == b'0'));
        digits.to_owned()
    }
}

impl<const N: usize> Default for Identifier<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> fmt::Display for Identifier<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex_string())
    }
}

impl<const N: usize> fmt::LowerHex for Identifier<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex_string())
    }
}

impl<const N: usize> fmt::Debug for Identifier<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.to_hex_string())
    }
}

impl<const N: usize> FromStr for Identifier<N> {
    type Err = ParseIdentifierError;

    /// Parses canonical text. Upper case digits are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != N {
            return Err(ParseIdentifierError::Length {
                expected: N,
                got: s.len(),
            });
        }
        Self::from_hex_digits(s).map_err(|(index, ch)| ParseIdentifierError::NonHex { index, ch })
    }
}

impl<const N: usize> TryFrom<U256> for Identifier<N> {
    type Error = OutOfKeyspace;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Use `.into()`; `U256::from` resolves to the inherent `Uint::from` instead.
impl<const N: usize> From<Identifier<N>> for U256 {
    fn from(id: Identifier<N>) -> Self {
        id.value
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Identifier<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Identifier<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
