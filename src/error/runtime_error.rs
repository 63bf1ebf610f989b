#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an AST.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator kind reached evaluation without a registered operation.
    ///
    /// The canonical configuration registers an operation for every operator
    /// kind the parser can produce, so seeing this error means the registries
    /// were set up inconsistently.
    UnknownOperator {
        /// A description of the operator kind.
        kind: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),

            Self::UnknownOperator { kind } => write!(f, "Unknown operator: {kind}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
