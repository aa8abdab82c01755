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

//! Error type shared by both engines.
//!
//! Input problems are reported before any recursion starts. Arithmetic
//! invariant violations can only originate inside the Karatsuba combine step
//! and indicate a logic defect rather than bad input.

/// Errors that can occur while preparing or running a solve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CleaveError {
    /// The caller supplied input the engines cannot work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `subtract` was asked to compute a negative difference.
    #[error("Arithmetic invariant violated: {minuend} - {subtrahend} would be negative")]
    ArithmeticInvariantViolation { minuend: String, subtrahend: String },

    /// The native base case could not hold a product that the configured
    /// threshold admitted.
    #[error("Native base case overflowed on a {x_digits}-digit × {y_digits}-digit product")]
    NativeOverflow { x_digits: usize, y_digits: usize },

    /// A configuration value is outside its admissible range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CleaveError {
    #[inline]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    #[inline]
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig(message.into())
    }

    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    #[inline]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::ArithmeticInvariantViolation { .. } | Self::NativeOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CleaveError::invalid_input("empty point set");
        assert_eq!(e.to_string(), "Invalid input: empty point set");

        let e = CleaveError::ArithmeticInvariantViolation {
            minuend: "12".to_string(),
            subtrahend: "13".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Arithmetic invariant violated: 12 - 13 would be negative"
        );
        assert!(e.is_invariant_violation());
        assert!(!e.is_invalid_input());
    }

    #[test]
    fn test_native_overflow_is_an_invariant_violation() {
        let e = CleaveError::NativeOverflow {
            x_digits: 20,
            y_digits: 20,
        };
        assert_eq!(
            e.to_string(),
            "Native base case overflowed on a 20-digit × 20-digit product"
        );
        assert!(e.is_invariant_violation());
        assert!(!matches!(e, CleaveError::InvalidConfig(_)));
    }
}
