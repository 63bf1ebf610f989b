use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::lexer::TokenKind};

/// Executable semantics of a binary operator: `(left, right) -> result`.
pub type BinaryOperation = fn(i64, i64) -> Result<i64, RuntimeError>;

/// Executable semantics of an assignment operator:
/// `(current value, operand) -> new value`.
///
/// Plain `=` ignores the current value and returns the operand unchanged;
/// compound operators like `+=` combine the two.
pub type AssignmentOperation = fn(i64, i64) -> Result<i64, RuntimeError>;

/// Registry mapping operator kinds to their executable semantics.
///
/// Binary (non-mutating) and assignment operations live in two independent
/// tables. The parser produces operator kinds; evaluation resolves them here,
/// so new operators are added by registering a function rather than by
/// touching the AST. Every kind the parser can emit in a binary or assignment
/// position must have an entry, otherwise evaluation fails with an
/// unknown-operator error.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    binary:     HashMap<TokenKind, BinaryOperation>,
    assignment: HashMap<TokenKind, AssignmentOperation>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the semantics of a binary operator kind.
    ///
    /// Registering the same kind again replaces the previous function.
    pub fn register_binary(&mut self, kind: TokenKind, operation: BinaryOperation) {
        self.binary.insert(kind, operation);
    }

    /// Registers the semantics of an assignment operator kind.
    ///
    /// Registering the same kind again replaces the previous function.
    pub fn register_assignment(&mut self, kind: TokenKind, operation: AssignmentOperation) {
        self.assignment.insert(kind, operation);
    }

    /// Looks up the binary operation for a kind.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownOperator`] if no operation was
    /// registered for `kind`.
    pub fn binary(&self, kind: TokenKind) -> Result<BinaryOperation, RuntimeError> {
        self.binary
            .get(&kind)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownOperator { kind: format!("{kind:?}") })
    }

    /// Looks up the assignment operation for a kind.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownOperator`] if no operation was
    /// registered for `kind`.
    pub fn assignment(&self, kind: TokenKind) -> Result<AssignmentOperation, RuntimeError> {
        self.assignment
            .get(&kind)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownOperator { kind: format!("{kind:?}") })
    }
}
