//! Factorial aggregation over a range.
//!
//! Sums `start! + (start + 1)! + ... + end!` with a single running product,
//! so each step costs one multiplication. Terms are only kept on request.

use super::compute::{checked_factorial, compute_factorial, FactorialError};
use crate::models::{Aggregation, Arithmetic, Term};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

/// Running product `n!`, advanced one value at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RunningProduct {
    Arbitrary(BigUint),
    Checked(u64),
}

impl RunningProduct {
    /// Seed the product with `n!`.
    fn starting_at(n: u64, arithmetic: Arithmetic) -> Result<Self, FactorialError> {
        Ok(match arithmetic {
            Arithmetic::Arbitrary => Self::Arbitrary(compute_factorial(n)),
            Arithmetic::Checked => Self::Checked(checked_factorial(n)?),
        })
    }

    /// Turn `(n - 1)!` into `n!`.
    fn advance(&mut self, n: u64) -> Result<(), FactorialError> {
        match self {
            Self::Arbitrary(product) => *product *= n,
            Self::Checked(product) => {
                *product = product
                    .checked_mul(n)
                    .ok_or(FactorialError::Overflow { n })?;
            }
        }
        Ok(())
    }

    fn add_to(&self, total: &mut BigUint) {
        match self {
            Self::Arbitrary(product) => *total += product,
            Self::Checked(product) => *total += *product,
        }
    }

    fn to_biguint(&self) -> BigUint {
        match self {
            Self::Arbitrary(product) => product.clone(),
            Self::Checked(product) => BigUint::from(*product),
        }
    }
}

/// Sum the factorials of every value in `start..=end`.
///
/// An empty range (`start > end`) yields no terms and a total of zero.
/// With `keep_terms` every `n!` is stored in the result; otherwise only the
/// running product and the total are held. The total is always accumulated
/// with arbitrary precision: in checked mode every term fits in a `u64`, and
/// 0! + ... + 20! does too.
pub fn aggregate(
    start: u64,
    end: u64,
    arithmetic: Arithmetic,
    keep_terms: bool,
) -> Result<Aggregation, FactorialError> {
    let mut terms = Vec::new();
    let mut total = BigUint::zero();
    let mut count = 0u64;
    let mut running: Option<RunningProduct> = None;

    for n in start..=end {
        let product = match running.take() {
            Some(mut product) => {
                product.advance(n)?;
                product
            }
            None => RunningProduct::starting_at(n, arithmetic)?,
        };

        product.add_to(&mut total);
        count += 1;

        if keep_terms {
            let factorial = product.to_biguint();
            debug!("{}! = {}", n, factorial);
            terms.push(Term { n, factorial });
        }

        running = Some(product);
    }

    Ok(Aggregation {
        start,
        end,
        arithmetic,
        count,
        terms,
        total,
    })
}
