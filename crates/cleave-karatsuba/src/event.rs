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

//! Trace events of the Karatsuba recursion.
//!
//! Every call emits `Multiply` first. Base calls then emit `Base`; recursive
//! calls emit `Split`, the events of the `z0`, `z1` and `z2` sub-products in
//! that order, and finally `Combine`.

use cleave_core::{num::decimal::DecimalString, trace::TraceEvent};

/// Leading digits of an operand shown in event messages.
pub const MESSAGE_PREVIEW_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KaratsubaEventKind {
    Multiply,
    Split,
    Base,
    Combine,
}

impl std::fmt::Display for KaratsubaEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KaratsubaEventKind::Multiply => write!(f, "multiply"),
            KaratsubaEventKind::Split => write!(f, "split"),
            KaratsubaEventKind::Base => write!(f, "base"),
            KaratsubaEventKind::Combine => write!(f, "combine"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KaratsubaEvent {
    /// A call started on `x × y`.
    Multiply {
        depth: usize,
        x: DecimalString,
        y: DecimalString,
    },
    /// Both operands were padded and split `position` digits from the right.
    Split {
        depth: usize,
        position: usize,
        x_high: DecimalString,
        x_low: DecimalString,
        y_high: DecimalString,
        y_low: DecimalString,
    },
    /// The operands were short enough to multiply natively.
    Base {
        depth: usize,
        x: DecimalString,
        y: DecimalString,
        product: DecimalString,
    },
    /// `result = z2·10^(2·position) + (z1 − z2 − z0)·10^position + z0`.
    Combine {
        depth: usize,
        position: usize,
        z0: DecimalString,
        z1: DecimalString,
        z2: DecimalString,
        result: DecimalString,
    },
}

impl TraceEvent for KaratsubaEvent {
    type Kind = KaratsubaEventKind;

    fn kind(&self) -> KaratsubaEventKind {
        match self {
            Self::Multiply { .. } => KaratsubaEventKind::Multiply,
            Self::Split { .. } => KaratsubaEventKind::Split,
            Self::Base { .. } => KaratsubaEventKind::Base,
            Self::Combine { .. } => KaratsubaEventKind::Combine,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Multiply { depth, .. }
            | Self::Split { depth, .. }
            | Self::Base { depth, .. }
            | Self::Combine { depth, .. } => *depth,
        }
    }

    fn message(&self) -> String {
        let short = |d: &DecimalString| d.preview(MESSAGE_PREVIEW_DIGITS);
        match self {
            Self::Multiply { x, y, .. } => format!(
                "Multiplying {} × {} ({}-digit × {}-digit)",
                short(x),
                short(y),
                x.len(),
                y.len()
            ),
            Self::Split {
                position,
                x_high,
                x_low,
                y_high,
                y_low,
                ..
            } => format!(
                "Split at position {}: x = {} | {}, y = {} | {}",
                position,
                short(x_high),
                short(x_low),
                short(y_high),
                short(y_low)
            ),
            Self::Base { x, y, product, .. } => {
                format!("Base case: {} × {} = {}", x, y, product)
            }
            Self::Combine {
                depth,
                position,
                z0,
                z1,
                z2,
                ..
            } => format!(
                "Combined results at depth {}: {}×10^{} + ({}-{}-{})×10^{} + {}",
                depth,
                short(z2),
                2 * position,
                short(z1),
                short(z2),
                short(z0),
                position,
                short(z0)
            ),
        }
    }
}

impl std::fmt::Display for KaratsubaEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
