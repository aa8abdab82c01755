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

use cleave_core::error::CleaveError;

/// Tuning knobs of the closest-pair solver.
///
/// # Configuration
/// * `base_case_size`: calls on at most this many points are solved by
///   exhaustive search. Must be at least 2. Defaults to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestPairConfig {
    base_case_size: usize,
}

impl ClosestPairConfig {
    pub const DEFAULT_BASE_CASE_SIZE: usize = 3;
    pub const MIN_BASE_CASE_SIZE: usize = 2;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn base_case_size(mut self, size: usize) -> Self {
        self.base_case_size = size;
        self
    }

    #[inline]
    pub fn get_base_case_size(&self) -> usize {
        self.base_case_size
    }

    pub fn validate(&self) -> Result<(), CleaveError> {
        if self.base_case_size < Self::MIN_BASE_CASE_SIZE {
            return Err(CleaveError::invalid_config(format!(
                "base case size must be at least {}, got {}",
                Self::MIN_BASE_CASE_SIZE,
                self.base_case_size
            )));
        }
        Ok(())
    }
}

impl Default for ClosestPairConfig {
    fn default() -> Self {
        Self {
            base_case_size: Self::DEFAULT_BASE_CASE_SIZE,
        }
    }
}

impl std::fmt::Display for ClosestPairConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosestPairConfig(base_case_size: {})", self.base_case_size)
    }
}
