//! # batchcalc
//!
//! batchcalc is a concurrent batch calculator for integer expression requests.
//! Each request is an ordered list of statement lines that is tokenized,
//! parsed, and evaluated in isolation, producing a deterministic snapshot of
//! the request's final variable state. Independent requests in a batch are
//! evaluated concurrently on a bounded worker pool.

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

/// Defines the structure of parsed statements.
///
/// This module declares the `AstNode` enum that represents one statement as a
/// tree, together with its evaluation logic. The AST is built by the parser
/// and evaluated against a variable store and an operation registry.
///
/// # Responsibilities
/// - Defines node types for literals, variables, binary operations,
///   assignments, and increment/decrement forms.
/// - Evaluates a tree to an integer, applying side effects to the store.
pub mod ast;
/// Composes one request's full evaluation pipeline.
///
/// This module ties the tokenizer, parser, operation registry, and variable
/// store together into a single per-request unit, and holds the canonical
/// operator, factor, and operation configuration.
///
/// # Responsibilities
/// - Runs a request's statement lines through lex, parse, and evaluate.
/// - Renders the final snapshot and resets state between requests.
/// - Defines the canonical registry configuration.
pub mod calculator;
/// Evaluates batches of requests concurrently.
///
/// This module provides the worker pool and the dispatch service that fans a
/// batch of independent requests out across threads and collects their
/// outcomes back in submission order.
///
/// # Responsibilities
/// - Runs a bounded worker pool with a caller-runs saturation policy.
/// - Assigns request identifiers and preserves submission order.
/// - Isolates request state and failures from sibling requests.
pub mod dispatch;
/// Provides unified error types for configuration, parsing, and evaluation.
///
/// This module defines all errors that can be raised while configuring a
/// registry, tokenizing and parsing a statement, or evaluating an AST. Lexical
/// and syntactic errors carry character positions for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the statement interpretation pipeline.
///
/// This module hosts the core phases: the tokenizer with its operator
/// registry, the operation tables, the precedence-climbing parser with its
/// factor rules, and the variable store.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, operations, and store submodules.
/// - Keeps each phase extensible through its registry.
pub mod interpreter;
/// Adapts the calculator to its input and output channels.
///
/// This module abstracts over where request lines come from and where result
/// lines go, with console and file implementations, and splits raw lines into
/// discrete requests.
///
/// # Responsibilities
/// - Reads input lines and writes result lines.
/// - Detects new file content for continuous monitoring.
/// - Splits line streams into blank-line-delimited requests.
pub mod io;

use crate::{calculator::Calculator, error::CalcError};

/// Evaluates one request and returns its final variable snapshot.
///
/// This is the convenience entry point for callers that do not need the
/// concurrent dispatch layer: it builds a calculator with the canonical
/// configuration, runs the statement lines in order, and returns the
/// formatted snapshot.
///
/// # Errors
/// Returns the first [`CalcError`] raised by any statement line.
///
/// # Examples
/// ```
/// use batchcalc::evaluate_request;
///
/// let snapshot = evaluate_request(&["x = 2 + 3 * 4", "y = x++", "z = x"]).unwrap();
/// assert_eq!(snapshot, "(x=15,y=14,z=15)");
///
/// // Division by zero is a runtime error.
/// assert!(evaluate_request(&["x = 1 / 0"]).is_err());
/// ```
pub fn evaluate_request<S: AsRef<str>>(lines: &[S]) -> Result<String, CalcError> {
    Calculator::new().process_statements(lines)
}
