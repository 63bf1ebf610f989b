use crate::{
    error::RuntimeError,
    interpreter::{lexer::TokenKind, operations::OperationRegistry, store::VariableStore},
};

/// An abstract syntax tree node for one statement.
///
/// The parser builds nodes bottom-up; each node owns its children
/// exclusively, so the tree is acyclic by construction. A tree is evaluated
/// once against a request's variable store and then discarded.
///
/// Binary and assignment nodes carry the token kind of their operator rather
/// than a function: the executable semantics live in the
/// [`OperationRegistry`], which keeps the tree decoupled from concrete
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
    },
    /// A read of a variable by name.
    Variable {
        /// The variable name.
        name: String,
    },
    /// A binary operation between two sub-expressions.
    BinaryOp {
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// The operator's token kind, resolved through the operation
        /// registry at evaluation time.
        op:    TokenKind,
        /// Right operand.
        right: Box<Self>,
    },
    /// A plain or compound assignment to a variable.
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The assignment operator's token kind (`=`, `+=`, ...).
        op:    TokenKind,
        /// The right-hand side expression.
        value: Box<Self>,
    },
    /// `++name` or `--name`; yields the value after mutation.
    PreIncDec {
        /// The variable being mutated.
        name:      String,
        /// `true` for `++`, `false` for `--`.
        increment: bool,
    },
    /// `name++` or `name--`; yields the value before mutation.
    PostIncDec {
        /// The variable being mutated.
        name:      String,
        /// `true` for `++`, `false` for `--`.
        increment: bool,
    },
}

impl AstNode {
    /// Evaluates the node, mutating the store as side effects require.
    ///
    /// Variables read before any assignment evaluate to 0; this is a
    /// deliberate semantic choice, not an error, and such reads do not create
    /// an entry in the store.
    ///
    /// # Parameters
    /// - `store`: The request's private variable store.
    /// - `operations`: The registry holding the executable semantics of
    ///   binary and assignment operators.
    ///
    /// # Returns
    /// The integer value of the expression.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] from the division operations.
    /// - [`RuntimeError::UnknownOperator`] if an operator kind has no
    ///   registered operation.
    pub fn evaluate(&self,
                    store: &mut VariableStore,
                    operations: &OperationRegistry)
                    -> Result<i64, RuntimeError> {
        match self {
            Self::Number { value } => Ok(*value),

            Self::Variable { name } => Ok(store.get(name)),

            Self::BinaryOp { left, op, right } => {
                let left_value = left.evaluate(store, operations)?;
                let right_value = right.evaluate(store, operations)?;
                let operation = operations.binary(*op)?;
                operation(left_value, right_value)
            },

            Self::Assignment { name, op, value } => {
                let operand = value.evaluate(store, operations)?;
                let current = store.get(name);
                let operation = operations.assignment(*op)?;
                let new_value = operation(current, operand)?;
                store.assign(name, new_value);
                Ok(new_value)
            },

            Self::PreIncDec { name, increment } => {
                let new_value = stepped(store.get(name), *increment);
                store.assign(name, new_value);
                Ok(new_value)
            },

            Self::PostIncDec { name, increment } => {
                let current = store.get(name);
                store.assign(name, stepped(current, *increment));
                Ok(current)
            },
        }
    }
}

const fn stepped(value: i64, increment: bool) -> i64 {
    if increment {
        value.wrapping_add(1)
    } else {
        value.wrapping_sub(1)
    }
}
