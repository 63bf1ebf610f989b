/// Configuration errors.
///
/// Contains the error types raised while setting up the operator, factor, and
/// operation registries. These fail fast at construction time and never occur
/// during request evaluation.
pub mod config_error;
/// Parsing errors.
///
/// Defines all error types that can occur during tokenization and parsing of a
/// statement line. Parse errors include unrecognized characters, unexpected
/// tokens, and missing expected tokens, each carrying the offset where the
/// problem was found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or an operator kind missing from the operation registry.
pub mod runtime_error;

pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error that can occur while evaluating one request.
///
/// A request fails either while turning a statement line into an AST or while
/// evaluating that AST. `CalcError` unifies the two so a whole request can be
/// processed with a single fallible call, and so the dispatcher can convert
/// any failure into the request's error outcome.
pub enum CalcError {
    /// The statement could not be tokenized or parsed.
    Parse(ParseError),
    /// The statement parsed but failed during evaluation.
    Eval(RuntimeError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(error: RuntimeError) -> Self {
        Self::Eval(error)
    }
}
