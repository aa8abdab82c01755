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

//! # Karatsuba Multiplication over Digit Strings
//!
//! Each call multiplies `x × y`:
//!
//! - when both operands have at most `base_case_digits` digits the product
//!   is computed natively;
//! - otherwise, with `n = max(|x|, |y|)` and `m = n / 2`, both operands are
//!   padded to `n` digits and split `m` digits from the right, and
//!
//!   ```text
//!   z0 = low(x) · low(y)
//!   z1 = (low(x) + high(x)) · (low(y) + high(y))
//!   z2 = high(x) · high(y)
//!   x · y = z2 · 10^(2m) + (z1 − z2 − z0) · 10^m + z0
//!   ```
//!
//!   with the three sub-products evaluated in that order one level deeper.
//!
//! Intermediate values may carry leading zeros. Only the root result is
//! canonicalised.

use crate::{
    config::KaratsubaConfig,
    event::KaratsubaEvent,
    result::{KaratsubaOutcome, KaratsubaResult},
};
use cleave_core::{
    error::CleaveError,
    monitor::{no_op::NoOpMonitor, trace_monitor::TraceMonitor},
    num::{
        arithmetic::{add, shift_left_by_power_of_ten, split_at_from_right, subtract},
        decimal::DecimalString,
        native::{fits_native_product, native_product},
    },
    stats::SolveStatistics,
    trace::{Trace, TraceRecorder},
};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KaratsubaSolver {
    config: KaratsubaConfig,
}

impl KaratsubaSolver {
    /// Name reported to monitors.
    pub const ALGORITHM: &'static str = "karatsuba";

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with `config`, rejecting invalid settings.
    pub fn with_config(config: KaratsubaConfig) -> Result<Self, CleaveError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &KaratsubaConfig {
        &self.config
    }

    /// Multiplies two operands given as decimal digit strings.
    ///
    /// # Errors
    ///
    /// `CleaveError::InvalidInput` if either operand is empty or contains a
    /// character other than `0`-`9`.
    pub fn solve(
        &self,
        x: &str,
        y: &str,
    ) -> Result<(KaratsubaResult, Trace<KaratsubaEvent>), CleaveError> {
        let x = DecimalString::parse(x)?;
        let y = DecimalString::parse(y)?;
        let mut monitor = NoOpMonitor::new();
        self.solve_with_monitor(&x, &y, &mut monitor)
            .map(KaratsubaOutcome::into_parts)
    }

    /// Multiplies `x × y`, forwarding every event to `monitor` as it is
    /// recorded.
    pub fn solve_with_monitor(
        &self,
        x: &DecimalString,
        y: &DecimalString,
        monitor: &mut dyn TraceMonitor<KaratsubaEvent>,
    ) -> Result<KaratsubaOutcome, CleaveError> {
        let start = Instant::now();
        monitor.on_enter_solve(Self::ALGORITHM);

        let mut session = Session {
            recorder: TraceRecorder::with_monitor(&mut *monitor),
            stats: SolveStatistics::default(),
            base_case_digits: self.config.get_base_case_digits(),
        };
        let product = session.multiply(x, y, 0);

        let Session {
            recorder,
            mut stats,
            ..
        } = session;
        let trace = recorder.seal();
        stats.set_total_time(start.elapsed());
        monitor.on_exit_solve(&stats);

        let result = KaratsubaResult::new(product?);
        tracing::debug!(
            x_digits = x.len(),
            y_digits = y.len(),
            product_digits = result.digit_count(),
            events = trace.len(),
            "karatsuba solved"
        );

        Ok(KaratsubaOutcome {
            result,
            trace,
            statistics: stats,
        })
    }
}

impl std::fmt::Display for KaratsubaSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KaratsubaSolver({})", self.config)
    }
}

struct Session<'m> {
    recorder: TraceRecorder<'m, KaratsubaEvent>,
    stats: SolveStatistics,
    base_case_digits: usize,
}

impl Session<'_> {
    #[inline]
    fn emit(&mut self, event: KaratsubaEvent) {
        self.stats.on_event_recorded();
        self.recorder.record(event);
    }

    #[inline]
    fn add(&mut self, a: &DecimalString, b: &DecimalString) -> DecimalString {
        self.stats.on_digit_operation();
        add(a, b)
    }

    fn subtract(
        &mut self,
        a: &DecimalString,
        b: &DecimalString,
        depth: usize,
    ) -> Result<DecimalString, CleaveError> {
        self.stats.on_digit_operation();
        subtract(a, b).inspect_err(|e| {
            tracing::error!(depth, error = %e, "karatsuba combine step went negative");
        })
    }

    fn multiply(
        &mut self,
        x: &DecimalString,
        y: &DecimalString,
        depth: usize,
    ) -> Result<DecimalString, CleaveError> {
        self.stats.on_recursive_call(depth);
        self.emit(KaratsubaEvent::Multiply {
            depth,
            x: x.clone(),
            y: y.clone(),
        });

        if fits_native_product(x.len(), y.len(), self.base_case_digits) {
            // `base_case_digits` is validated to at most 19, so the product
            // always fits a u128.
            let product = native_product(x, y);
            debug_assert!(product.is_some(), "native base case overflowed");
            let product = product.ok_or(CleaveError::NativeOverflow {
                x_digits: x.len(),
                y_digits: y.len(),
            })?;
            self.stats.on_base_case();
            self.emit(KaratsubaEvent::Base {
                depth,
                x: x.clone(),
                y: y.clone(),
                product: product.clone(),
            });
            return Ok(product);
        }

        let n = x.len().max(y.len());
        let m = n / 2;
        let xs = split_at_from_right(x, m, n);
        let ys = split_at_from_right(y, m, n);
        self.emit(KaratsubaEvent::Split {
            depth,
            position: m,
            x_high: xs.high.clone(),
            x_low: xs.low.clone(),
            y_high: ys.high.clone(),
            y_low: ys.low.clone(),
        });

        let z0 = self.multiply(&xs.low, &ys.low, depth + 1)?;
        let x_sum = self.add(&xs.low, &xs.high);
        let y_sum = self.add(&ys.low, &ys.high);
        let z1 = self.multiply(&x_sum, &y_sum, depth + 1)?;
        let z2 = self.multiply(&xs.high, &ys.high, depth + 1)?;

        let partial = self.subtract(&z1, &z2, depth)?;
        let middle = self.subtract(&partial, &z0, depth)?;
        let high_term = shift_left_by_power_of_ten(&z2, 2 * m);
        let middle_term = shift_left_by_power_of_ten(&middle, m);
        let upper = self.add(&high_term, &middle_term);
        let result = self.add(&upper, &z0);

        self.emit(KaratsubaEvent::Combine {
            depth,
            position: m,
            z0,
            z1,
            z2,
            result: result.clone(),
        });
        Ok(result)
    }
}
