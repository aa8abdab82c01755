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

//! # Digit-String Arithmetic
//!
//! Schoolbook operations over `DecimalString`, processed right to left one
//! digit at a time. None of them converts to a native integer, so operand
//! magnitude is bounded only by memory.
//!
//! ## Leading zeros
//!
//! - `add` and `shift_left_by_power_of_ten` keep whatever leading zeros their
//!   inputs carry.
//! - `subtract` always returns a canonical value.
//! - `split_at_from_right` pads on the left before splitting, so its parts
//!   may start with zeros.

use crate::{error::CleaveError, num::decimal::DecimalString};
use std::cmp::Ordering;

/// Returns `a + b`.
pub fn add(a: &DecimalString, b: &DecimalString) -> DecimalString {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);

    let mut i = a.len();
    let mut j = b.len();
    let mut carry = 0u8;
    while i > 0 || j > 0 || carry > 0 {
        let da = if i > 0 {
            i -= 1;
            a[i] - b'0'
        } else {
            0
        };
        let db = if j > 0 {
            j -= 1;
            b[j] - b'0'
        } else {
            0
        };
        let sum = da + db + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }

    out.reverse();
    DecimalString::from_ascii_digits(&out)
}

/// Returns `a - b` in canonical form.
///
/// # Errors
///
/// Returns `CleaveError::ArithmeticInvariantViolation` if `a < b`. The
/// difference is never clamped to zero.
pub fn subtract(a: &DecimalString, b: &DecimalString) -> Result<DecimalString, CleaveError> {
    if compare(a, b) == Ordering::Less {
        return Err(CleaveError::ArithmeticInvariantViolation {
            minuend: a.significant_digits().to_string(),
            subtrahend: b.significant_digits().to_string(),
        });
    }

    // `a >= b`, so any digits of `b` beyond the length of `a` are zeros and
    // no borrow is left over.
    let (ad, bd) = (a.as_bytes(), b.as_bytes());
    let mut out = Vec::with_capacity(ad.len());

    let mut j = bd.len();
    let mut borrow = 0i8;
    for &digit in ad.iter().rev() {
        let da = (digit - b'0') as i8;
        let db = if j > 0 {
            j -= 1;
            (bd[j] - b'0') as i8
        } else {
            0
        };
        let mut diff = da - db - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(b'0' + diff as u8);
    }
    debug_assert_eq!(borrow, 0, "borrow left over after `a >= b` check");

    while out.len() > 1 && out.last() == Some(&b'0') {
        out.pop();
    }
    out.reverse();
    Ok(DecimalString::from_ascii_digits(&out))
}

/// Returns `num * 10^k` by appending `k` zero digits.
pub fn shift_left_by_power_of_ten(num: &DecimalString, k: usize) -> DecimalString {
    let mut digits = String::with_capacity(num.len() + k);
    digits.push_str(num.as_str());
    digits.extend(std::iter::repeat_n('0', k));
    DecimalString::from_ascii_digits(digits.as_bytes())
}

/// Left-pads `num` with zeros to `width` digits. Values that are already at
/// least `width` digits long are returned unchanged.
pub fn pad_left(num: &DecimalString, width: usize) -> DecimalString {
    if num.len() >= width {
        return num.clone();
    }
    let mut digits = String::with_capacity(width);
    digits.extend(std::iter::repeat_n('0', width - num.len()));
    digits.push_str(num.as_str());
    DecimalString::from_ascii_digits(digits.as_bytes())
}

/// The two halves of a split operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitParts {
    /// Everything except the last `position` digits.
    pub high: DecimalString,
    /// The last `position` digits.
    pub low: DecimalString,
}

/// Pads `num` to `width` digits and splits it `position` digits from the
/// right. An empty half becomes `"0"`.
pub fn split_at_from_right(num: &DecimalString, position: usize, width: usize) -> SplitParts {
    let padded = pad_left(num, width);
    let digits = padded.as_bytes();
    let cut = digits.len().saturating_sub(position);

    let part = |slice: &[u8]| {
        if slice.is_empty() {
            DecimalString::zero()
        } else {
            DecimalString::from_ascii_digits(slice)
        }
    };

    SplitParts {
        high: part(&digits[..cut]),
        low: part(&digits[cut..]),
    }
}

/// Compares two values by magnitude, ignoring leading zeros.
pub fn compare(a: &DecimalString, b: &DecimalString) -> Ordering {
    let (a, b) = (a.significant_digits(), b.significant_digits());
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn d(s: &str) -> DecimalString {
        DecimalString::parse(s).unwrap()
    }

    fn random_digits(rng: &mut impl Rng, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }

    #[test]
    fn test_add_with_carry_and_unequal_lengths() {
        assert_eq!(add(&d("999"), &d("1")).as_str(), "1000");
        assert_eq!(add(&d("1"), &d("999")).as_str(), "1000");
        assert_eq!(add(&d("0"), &d("0")).as_str(), "0");
        assert_eq!(add(&d("123"), &d("877")).as_str(), "1000");
    }

    #[test]
    fn test_add_keeps_leading_zeros() {
        assert_eq!(add(&d("0012"), &d("3")).as_str(), "0015");
    }

    #[test]
    fn test_subtract_strips_leading_zeros() {
        assert_eq!(subtract(&d("1000"), &d("1")).unwrap().as_str(), "999");
        assert_eq!(subtract(&d("1000"), &d("999")).unwrap().as_str(), "1");
        assert_eq!(subtract(&d("42"), &d("42")).unwrap().as_str(), "0");
        assert_eq!(subtract(&d("0042"), &d("0002")).unwrap().as_str(), "40");
        assert_eq!(subtract(&d("5"), &d("0000")).unwrap().as_str(), "5");
    }

    #[test]
    fn test_subtract_reports_negative_differences() {
        let err = subtract(&d("12"), &d("13")).unwrap_err();
        assert_eq!(
            err,
            CleaveError::ArithmeticInvariantViolation {
                minuend: "12".to_string(),
                subtrahend: "13".to_string()
            }
        );
        assert!(subtract(&d("9"), &d("10")).unwrap_err().is_invariant_violation());
        assert!(subtract(&d("0"), &d("1")).is_err());
        // A longer subtrahend is fine as long as its extra digits are zero.
        assert_eq!(subtract(&d("9"), &d("0003")).unwrap().as_str(), "6");
    }

    #[test]
    fn test_shift_and_pad() {
        assert_eq!(shift_left_by_power_of_ten(&d("12"), 3).as_str(), "12000");
        assert_eq!(shift_left_by_power_of_ten(&d("12"), 0).as_str(), "12");
        assert_eq!(pad_left(&d("12"), 5).as_str(), "00012");
        assert_eq!(pad_left(&d("12345"), 3).as_str(), "12345");
    }

    #[test]
    fn test_split_at_from_right() {
        let p = split_at_from_right(&d("123456"), 3, 6);
        assert_eq!((p.high.as_str(), p.low.as_str()), ("123", "456"));

        let p = split_at_from_right(&d("456"), 2, 5);
        assert_eq!((p.high.as_str(), p.low.as_str()), ("004", "56"));

        let p = split_at_from_right(&d("7"), 0, 1);
        assert_eq!((p.high.as_str(), p.low.as_str()), ("7", "0"));

        let p = split_at_from_right(&d("7"), 3, 1);
        assert_eq!((p.high.as_str(), p.low.as_str()), ("0", "7"));
    }

    #[test]
    fn test_compare_ignores_leading_zeros() {
        assert_eq!(compare(&d("0010"), &d("10")), Ordering::Equal);
        assert_eq!(compare(&d("9"), &d("10")), Ordering::Less);
        assert_eq!(compare(&d("100"), &d("099")), Ordering::Greater);
    }

    #[test]
    fn test_add_and_subtract_match_reference_big_integers() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let la = rng.random_range(1..80);
            let lb = rng.random_range(1..80);
            let a = d(&random_digits(&mut rng, la));
            let b = d(&random_digits(&mut rng, lb));
            let ba: BigUint = a.as_str().parse().unwrap();
            let bb: BigUint = b.as_str().parse().unwrap();

            let sum = add(&a, &b);
            assert_eq!(sum.canonical().as_str(), (&ba + &bb).to_string());

            let (hi, lo, bhi, blo) = if ba >= bb {
                (&a, &b, &ba, &bb)
            } else {
                (&b, &a, &bb, &ba)
            };
            let diff = subtract(hi, lo).unwrap();
            assert!(diff.is_canonical());
            assert_eq!(diff.as_str(), (bhi - blo).to_string());
            if ba != bb {
                assert!(subtract(lo, hi).is_err());
            }
        }
    }
}
