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

use cleave_core::{error::CleaveError, num::native::MAX_NATIVE_OPERAND_DIGITS};

/// Tuning knobs of the Karatsuba solver.
///
/// # Configuration
/// * `base_case_digits`: when both operands have at most this many digits
///   they are multiplied natively. Must be in `1..=19` so the product fits a
///   `u128`. Defaults to 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaratsubaConfig {
    base_case_digits: usize,
}

impl KaratsubaConfig {
    pub const DEFAULT_BASE_CASE_DIGITS: usize = 15;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn base_case_digits(mut self, digits: usize) -> Self {
        self.base_case_digits = digits;
        self
    }

    #[inline]
    pub fn get_base_case_digits(&self) -> usize {
        self.base_case_digits
    }

    pub fn validate(&self) -> Result<(), CleaveError> {
        if !(1..=MAX_NATIVE_OPERAND_DIGITS).contains(&self.base_case_digits) {
            return Err(CleaveError::invalid_config(format!(
                "base case digits must be in 1..={}, got {}",
                MAX_NATIVE_OPERAND_DIGITS, self.base_case_digits
            )));
        }
        Ok(())
    }
}

impl Default for KaratsubaConfig {
    fn default() -> Self {
        Self {
            base_case_digits: Self::DEFAULT_BASE_CASE_DIGITS,
        }
    }
}

impl std::fmt::Display for KaratsubaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KaratsubaConfig(base_case_digits: {})", self.base_case_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_bounds() {
        assert!(KaratsubaConfig::new().validate().is_ok());
        assert!(KaratsubaConfig::new().base_case_digits(1).validate().is_ok());
        assert!(KaratsubaConfig::new().base_case_digits(19).validate().is_ok());
        assert!(KaratsubaConfig::new().base_case_digits(0).validate().is_err());
        assert!(KaratsubaConfig::new().base_case_digits(20).validate().is_err());
    }
}
