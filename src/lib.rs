//! # mu
//!
//! mu is a minimal expression language interpreter written in Rust.
//! It lexes, parses, and evaluates parenthesized sum expressions over
//! single-digit numbers, such as `(s 2 4)` or `(s (s 4 5) 4)`.

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

use crate::interpreter::{evaluator::eval, lexer::tokenize, parser::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` and `PrimaryExpression` types that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the binary expression node and its two operand kinds.
/// - Supports arbitrarily deep nesting through boxed recursion.
/// - Provides conversions for ergonomic tree construction.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including the offending token and its
/// position in the token stream.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches token positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline for source code evaluation. It exposes the stages the
/// public API composes when interpreting an expression.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing, and evaluating user
///   code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the final evaluation result of a mu expression.
///
/// This function tokenizes the provided source string, parses one expression
/// from the resulting tokens, and evaluates it to a number. Tokens left over
/// after a complete expression are ignored.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use mu::run;
///
/// // Simple expression: the sum of 2 and 4.
/// let result = run("(s 2 4)");
/// assert_eq!(result.unwrap(), 6);
///
/// // Nested expressions are evaluated recursively.
/// let result = run("(s (s 4 5) 4)");
/// assert_eq!(result.unwrap(), 13);
///
/// // Example with an intentional error (the operator is missing).
/// let result = run("(2 4)");
/// assert!(result.is_err());
/// ```
pub fn run(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().enumerate().peekable();

    let expression = match parse(&mut iter) {
        Ok(expression) => expression,
        Err(e) => return Err(Box::new(e)),
    };

    match eval(&expression) {
        Ok(value) => Ok(value),
        Err(e) => Err(Box::new(e)),
    }
}
