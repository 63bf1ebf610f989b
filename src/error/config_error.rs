#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised while configuring the registries.
///
/// Configuration errors surface during setup, before any request is
/// evaluated, and abort construction of the calculator.
pub enum ConfigError {
    /// An operator was registered with an empty pattern.
    EmptyOperatorPattern,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOperatorPattern => write!(f, "Operator pattern cannot be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
