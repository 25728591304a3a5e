//! # shunt
//!
//! shunt is an infix arithmetic expression calculator written in Rust.
//! It tokenizes an expression, reorders the tokens into Reverse Polish
//! Notation with the shunting-yard algorithm, and evaluates the result on a
//! value stack, reporting failures with their source position.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::calculator::{evaluator::evaluate, lexer::tokenize, shunting_yard::to_postfix};

/// Implements the three stages of the evaluation pipeline.
///
/// This module ties together the lexer, the shunting-yard converter, the RPN
/// evaluator, and the operator and value types they share. Data flows
/// strictly left to right through the stages: text becomes tokens, tokens
/// become a postfix sequence, and the postfix sequence becomes a number.
///
/// # Responsibilities
/// - Declares the stage modules and the types exchanged between them.
/// - Keeps every stage independent of anything downstream of it.
pub mod calculator;
/// Provides the unified error type for every stage of the pipeline.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting, or evaluating an expression. Each failure carries a category,
/// a message, and (almost always) the offset into the source text where it
/// was detected.
///
/// # Responsibilities
/// - Defines one error variant per failure category.
/// - Renders errors as `"<category> error: <message> at position <n>"`.
/// - Supports integration with standard error handling traits.
pub mod error;

pub use crate::{calculator::value::Number, error::EvalError};

/// Evaluates an infix arithmetic expression.
///
/// The expression is tokenized, converted to Reverse Polish Notation, and
/// evaluated, short-circuiting on the first failure. A blank expression is
/// rejected before conversion. Every error propagates to the caller with its
/// original category, message, and position intact.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is empty, malformed, or fails
/// during calculation.
///
/// # Examples
/// ```
/// use shunt::{calculate, Number};
///
/// assert_eq!(calculate("2 + 2 * 2").unwrap(), Number::Int(6));
/// assert_eq!(calculate("7 / 2").unwrap(), Number::Float(3.5));
///
/// // Failures carry the offending source position.
/// let error = calculate("1/0").unwrap_err();
/// assert_eq!(error.to_string(), "Calculation error: Division by zero at position 1");
/// ```
pub fn calculate(expression: &str) -> Result<Number, EvalError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let rpn = to_postfix(tokens)?;

    evaluate(&rpn)
}
