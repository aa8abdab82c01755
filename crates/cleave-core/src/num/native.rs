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

//! Native integer fallbacks for short operands.
//!
//! Recursive digit-string algorithms bottom out once both operands are short
//! enough that their product fits a native integer. The helpers here decide
//! that boundary and compute the product with checked `u128` arithmetic.

use crate::num::decimal::DecimalString;
use num_traits::CheckedMul;

/// The largest operand length for which the product of two operands is
/// guaranteed to fit in a `u128` (`(10^19)^2 = 10^38 < 2^128`).
pub const MAX_NATIVE_OPERAND_DIGITS: usize = 19;

/// Returns `true` if two operands with the given digit counts can both be
/// handled natively under `limit` digits per operand.
#[inline]
pub fn fits_native_product(len_a: usize, len_b: usize, limit: usize) -> bool {
    let limit = limit.min(MAX_NATIVE_OPERAND_DIGITS);
    len_a <= limit && len_b <= limit
}

/// Multiplies two short operands natively.
///
/// Returns `None` if either operand or the product does not fit in a `u128`.
pub fn native_product(a: &DecimalString, b: &DecimalString) -> Option<DecimalString> {
    let x = a.to_native::<u128>()?;
    let y = b.to_native::<u128>()?;
    CheckedMul::checked_mul(&x, &y).map(DecimalString::from)
}
