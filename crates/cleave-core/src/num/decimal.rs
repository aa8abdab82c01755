// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Decimal Digit Strings
//!
//! `DecimalString` is a non-negative integer of arbitrary magnitude stored as
//! its base-10 ASCII digits, most significant first.
//!
//! ## Invariants
//!
//! - At least one digit; every byte is in `b'0'..=b'9'`.
//! - No sign and no separators.
//! - Leading zeros are allowed while a computation is in flight. The
//!   canonical form has none, except for the literal `"0"`.
//!
//! ## Usage
//!
//! ```rust
//! use cleave_core::num::decimal::DecimalString;
//!
//! let x = DecimalString::parse("000123").unwrap();
//! assert_eq!(x.len(), 6);
//! assert_eq!(x.canonical().as_str(), "123");
//! assert_eq!(x.to_native::<u64>(), Some(123));
//! ```

use crate::error::CleaveError;
use num_traits::{NumCast, PrimInt, Unsigned};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalString {
    digits: String,
}

impl DecimalString {
    /// Validates `s` and wraps it. Leading zeros are kept as given.
    pub fn parse(s: &str) -> Result<Self, CleaveError> {
        if s.is_empty() {
            return Err(CleaveError::invalid_input("operand must not be empty"));
        }
        if let Some((pos, c)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(CleaveError::invalid_input(format!(
                "operand contains non-digit character {:?} at position {}",
                c, pos
            )));
        }
        Ok(Self {
            digits: s.to_string(),
        })
    }

    /// Builds a value from ASCII digits produced by the arithmetic routines.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `digits` is empty or contains a non-digit.
    #[inline]
    pub(crate) fn from_ascii_digits(digits: &[u8]) -> Self {
        debug_assert!(
            !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
            "called `DecimalString::from_ascii_digits` with invalid digits"
        );
        Self {
            digits: digits.iter().map(|&d| char::from(d)).collect(),
        }
    }

    /// The value zero, `"0"`.
    #[inline]
    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.digits.as_bytes()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.digits
    }

    /// Number of digits, leading zeros included.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|d| d == b'0')
    }

    /// Returns `true` if the value has no redundant leading zeros.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.digits.len() == 1 || !self.digits.starts_with('0')
    }

    /// Returns the digits without redundant leading zeros.
    pub fn significant_digits(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }

    /// Returns the canonical form of this value.
    #[inline]
    pub fn canonical(&self) -> Self {
        Self {
            digits: self.significant_digits().to_string(),
        }
    }

    /// Consumes `self` and returns its canonical form without reallocating
    /// when it is already canonical.
    pub fn into_canonical(self) -> Self {
        if self.is_canonical() {
            self
        } else {
            self.canonical()
        }
    }

    /// Renders at most `max_digits` leading digits, followed by `...` when
    /// the value was cut.
    pub fn preview(&self, max_digits: usize) -> String {
        if self.digits.len() <= max_digits {
            self.digits.clone()
        } else {
            format!("{}...", &self.digits[..max_digits])
        }
    }

    /// Converts to a native unsigned integer, or `None` on overflow.
    pub fn to_native<T>(&self) -> Option<T>
    where
        T: PrimInt + Unsigned,
    {
        let ten = <T as NumCast>::from(10u8)?;
        self.digits.bytes().try_fold(T::zero(), |acc, d| {
            let digit = <T as NumCast>::from(d - b'0')?;
            acc.checked_mul(&ten)?.checked_add(&digit)
        })
    }
}

impl From<u128> for DecimalString {
    fn from(value: u128) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl From<u64> for DecimalString {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl std::str::FromStr for DecimalString {
    type Err = CleaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DecimalString {
    type Error = CleaveError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DecimalString {
    type Error = CleaveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)?;
        Ok(Self { digits: s })
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl std::fmt::Display for DecimalString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

impl std::fmt::Debug for DecimalString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DecimalString({})", self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_digits_and_keeps_leading_zeros() {
        let d = DecimalString::parse("007").unwrap();
        assert_eq!(d.as_str(), "007");
        assert_eq!(d.len(), 3);
        assert!(!d.is_canonical());
        assert_eq!(d.canonical().as_str(), "7");
    }

    #[test]
    fn test_parse_rejects_empty_and_non_digits() {
        assert!(DecimalString::parse("").unwrap_err().is_invalid_input());
        assert!(DecimalString::parse("-12").unwrap_err().is_invalid_input());
        assert!(DecimalString::parse("1 2").unwrap_err().is_invalid_input());
        assert!(DecimalString::parse("12a").unwrap_err().is_invalid_input());
        assert!("١٢".parse::<DecimalString>().is_err());
    }

    #[test]
    fn test_zero_forms() {
        let z = DecimalString::parse("0000").unwrap();
        assert!(z.is_zero());
        assert_eq!(z.canonical(), DecimalString::zero());
        assert!(DecimalString::zero().is_canonical());
        assert_eq!(z.into_canonical().as_str(), "0");
    }

    #[test]
    fn test_preview_truncates_long_values() {
        let d = DecimalString::parse("12345678901234567890").unwrap();
        assert_eq!(d.preview(15), "123456789012345...");
        assert_eq!(d.preview(20), "12345678901234567890");
    }

    #[test]
    fn test_to_native_detects_overflow() {
        let d = DecimalString::parse("255").unwrap();
        assert_eq!(d.to_native::<u8>(), Some(255));
        let d = DecimalString::parse("256").unwrap();
        assert_eq!(d.to_native::<u8>(), None);
        let d = DecimalString::parse("000000000000000000000000000000000042").unwrap();
        assert_eq!(d.to_native::<u8>(), Some(42));
        let d: DecimalString = u128::MAX.into();
        assert_eq!(d.to_native::<u128>(), Some(u128::MAX));
    }

    #[test]
    fn test_conversions() {
        let d: DecimalString = "99".parse().unwrap();
        assert_eq!(d, DecimalString::from(99u64));
        assert_eq!(format!("{}", d), "99");
        assert_eq!(format!("{:?}", d), "DecimalString(99)");
        assert!(DecimalString::try_from(String::from("x")).is_err());
    }
}
