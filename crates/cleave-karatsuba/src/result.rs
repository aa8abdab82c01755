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

use crate::event::KaratsubaEvent;
use cleave_core::{num::decimal::DecimalString, stats::SolveStatistics, trace::Trace};

/// The exact product of two operands, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KaratsubaResult {
    product: DecimalString,
}

impl KaratsubaResult {
    /// Wraps `product`, stripping any leading zeros.
    #[inline]
    pub fn new(product: DecimalString) -> Self {
        Self {
            product: product.into_canonical(),
        }
    }

    #[inline]
    pub fn product(&self) -> &DecimalString {
        &self.product
    }

    #[inline]
    pub fn digit_count(&self) -> usize {
        self.product.len()
    }

    #[inline]
    pub fn into_product(self) -> DecimalString {
        self.product
    }
}

impl std::fmt::Display for KaratsubaResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.product)
    }
}

/// Everything a Karatsuba solve produces.
#[derive(Debug, Clone, PartialEq)]
pub struct KaratsubaOutcome {
    pub result: KaratsubaResult,
    pub trace: Trace<KaratsubaEvent>,
    pub statistics: SolveStatistics,
}

impl KaratsubaOutcome {
    #[inline]
    pub fn into_parts(self) -> (KaratsubaResult, Trace<KaratsubaEvent>) {
        (self.result, self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canonicalises() {
        let r = KaratsubaResult::new(DecimalString::parse("000560").unwrap());
        assert_eq!(r.product().as_str(), "560");
        assert_eq!(r.digit_count(), 3);
        assert_eq!(r.to_string(), "560");
    }
}
