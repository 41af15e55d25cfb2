//! The counter shown on the panel: a single decimal digit that wraps in both directions.

use derive_more::derive::Display;

use crate::{Error, Result};

/// A value in `0..=9`.
///
/// ```rust
/// use digit_panel::counter::Digit;
///
/// assert_eq!(Digit::MAX.increment(), Digit::MIN);
/// assert_eq!(Digit::MIN.decrement(), Digit::MAX);
/// assert!(Digit::new(10).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
#[display("{_0}")]
pub struct Digit(u8);

impl Digit {
    /// Zero.
    pub const MIN: Self = Self(0);
    /// Nine.
    pub const MAX: Self = Self(9);

    /// Validate a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange { value })
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next digit; 9 wraps to 0.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 == Self::MAX.0 {
            Self::MIN
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous digit; 0 wraps to 9.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 == Self::MIN.0 {
            Self::MAX
        } else {
            Self(self.0 - 1)
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}
