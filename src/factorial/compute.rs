//! Single factorial computation.
//!
//! Two flavors are provided: an arbitrary-precision one that cannot
//! overflow, and a fixed-width `u64` one that reports overflow as an error.

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

/// Errors raised by fixed-width factorial arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorialError {
    /// `n!` does not fit in a `u64`.
    #[error("{n}! overflows a 64-bit integer")]
    Overflow { n: u64 },
}

/// Compute `n!` iteratively with arbitrary precision.
///
/// Returns 1 for `n < 2` (empty product).
pub fn compute_factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |result, value| result * value)
}

/// Compute `n!` in a `u64`, failing instead of wrapping.
pub fn checked_factorial(n: u64) -> Result<u64, FactorialError> {
    (2..=n).try_fold(1u64, |result, value| {
        result
            .checked_mul(value)
            .ok_or(FactorialError::Overflow { n })
    })
}
