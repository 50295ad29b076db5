//! Factorial computation and aggregation.

pub mod aggregator;
pub mod compute;

pub use aggregator::*;
pub use compute::*;
