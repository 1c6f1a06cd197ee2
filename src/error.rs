//! Errors reported by the arithmetic engine.

use thiserror::Error;

/// Errors that can occur during exact rational arithmetic.
///
/// These are pure-computation failures: they abort the current operation and
/// carry no partial result. Nothing is retried and nothing is swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A rational was constructed with a zero denominator, or a zero base was
    /// raised to a negative exponent.
    #[error("division by zero")]
    DivisionByZero,

    /// A power operation received an exponent whose canonical denominator is
    /// not 1.
    #[error("exponent is not an integer")]
    NonIntegerExponent,
}
