#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization or parsing.
pub enum ParseError {
    /// The tokenizer found a character it cannot form a token from.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The offset in the statement where the character was found.
        position:  usize,
    },
    /// No factor rule was able to claim the current token.
    UnexpectedToken {
        /// A description of the token encountered.
        kind:     String,
        /// The offset in the statement where the token starts.
        position: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// A description of the token that was required.
        expected: String,
        /// A description of the token that was found instead.
        found:    String,
        /// The offset in the statement where the mismatch occurred.
        position: usize,
    },
    /// A pre-increment or pre-decrement operator was not followed by a
    /// variable name.
    ExpectedIdentifier {
        /// The operator that dangles, `++` or `--`.
        operator: String,
        /// The offset in the statement where an identifier was required.
        position: usize,
    },
    /// A numeric literal does not fit into a 64-bit signed integer.
    InvalidNumber {
        /// The literal as written.
        lexeme:   String,
        /// The offset in the statement where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character: {character} at position {position}")
            },

            Self::UnexpectedToken { kind, position } => {
                write!(f, "Unexpected token: {kind} at position {position}")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  position, } => {
                write!(f, "Expected {expected} but got {found} at position {position}")
            },

            Self::ExpectedIdentifier { operator, position } => {
                write!(f, "Expected identifier after {operator} at position {position}")
            },

            Self::InvalidNumber { lexeme, position } => {
                write!(f, "Invalid number literal '{lexeme}' at position {position}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
