//! Data models for factorial aggregation.
//!
//! This module contains the core data structures shared by the
//! aggregator, the configuration layer and the report renderer.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Arithmetic used to compute factorials.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Arithmetic {
    /// Arbitrary-precision integers (never overflows)
    #[default]
    Arbitrary,
    /// Fixed-width 64-bit integers, failing on overflow
    Checked,
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arithmetic::Arbitrary => write!(f, "arbitrary"),
            Arithmetic::Checked => write!(f, "checked"),
        }
    }
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single text line (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One summand of an aggregation: `n` and `n!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    /// Input to the factorial.
    pub n: u64,
    /// The factorial of `n`.
    #[serde(serialize_with = "serialize_decimal")]
    pub factorial: BigUint,
}

/// Result of summing the factorials over an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// First value of the range (inclusive).
    pub start: u64,
    /// Last value of the range (inclusive).
    pub end: u64,
    /// Arithmetic the terms were computed with.
    pub arithmetic: Arithmetic,
    /// Number of values in the range.
    pub count: u64,
    /// Every term, in ascending order of `n`. Empty unless terms were requested.
    pub terms: Vec<Term>,
    /// Sum of all term factorials.
    #[serde(serialize_with = "serialize_decimal")]
    pub total: BigUint,
}

impl Aggregation {
    /// Number of terms that were summed, kept or not.
    pub fn term_count(&self) -> u64 {
        self.count
    }

    /// Returns true if the range contained no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Serialize a big integer as its decimal string.
fn serialize_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}
