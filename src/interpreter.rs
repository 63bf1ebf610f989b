/// The lexer module tokenizes statement lines for parsing.
///
/// The tokenizer reads one statement's raw text and produces a finite token
/// sequence ending in an end-of-input marker. Operator recognition is
/// delegated to a registry of literal patterns, tried longest-first, so new
/// operators are added without touching the tokenizer itself.
///
/// # Responsibilities
/// - Converts the character stream into tokens with kind, lexeme, and
///   position.
/// - Handles numbers, identifiers, registered operators, and parentheses.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The operations module holds the executable operator semantics.
///
/// Binary and assignment operators are resolved at evaluation time through a
/// registry of integer functions keyed by token kind, which keeps the AST
/// independent of concrete arithmetic.
///
/// # Responsibilities
/// - Maintains the binary and assignment operation tables.
/// - Reports unknown operator kinds as runtime errors.
pub mod operations;
/// The parser module builds an AST from the token sequence.
///
/// The parser recognizes assignment statements by lookahead and parses
/// expressions with precedence climbing. Atomic units are claimed by
/// pluggable factor rules dispatched first-match in registration order.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with position info.
/// - Keeps operator binding and atomic-unit recognition in tables, outside
///   the driver.
pub mod parser;
/// The store module manages one request's variable state.
///
/// A variable store maps names to integers for exactly one request's
/// evaluation and renders the final deterministic snapshot.
///
/// # Responsibilities
/// - Provides default-zero reads and assignment writes.
/// - Formats the sorted snapshot output.
pub mod store;
