//! # bigrat
//!
//! Exact arbitrary precision integer and rational arithmetic.
//!
//! This crate provides:
//! - Arbitrary precision signed integers ([`BigInt`])
//! - Canonical reduced rationals ([`BigRat`]) with an integer-exponent power
//!   operation
//!
//! All values are immutable: every operation is a pure function of its inputs
//! and allocates a fresh result, so values can be shared freely across
//! threads with no synchronization. Malformed inputs (a zero denominator, a
//! fractional exponent, a zero base under a negative exponent) fail loudly
//! with an [`ArithmeticError`] rather than returning a sentinel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::{BigInt, Sign};
pub use rational::BigRat;
