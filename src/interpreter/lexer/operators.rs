use crate::{
    error::ConfigError,
    interpreter::lexer::{Token, TokenKind},
};

/// A registered operator pattern and the token kind it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInfo {
    /// The literal characters to match, e.g. `+=`.
    pub pattern: String,
    /// The kind of token created when the pattern matches.
    pub kind:    TokenKind,
}

/// Registry of operator patterns, ordered longest-first.
///
/// The tokenizer consults the registry at every position that does not start
/// a number or an identifier. Longest-first ordering is the core invariant:
/// it guarantees that a two-character operator like `+=` or `++` is preferred
/// over the single-character `+` when both match at the same position.
/// Registration order among patterns of equal length is preserved, so
/// registering the canonical set twice changes nothing about which pattern
/// wins.
#[derive(Debug, Default)]
pub struct OperatorRegistry {
    sorted: Vec<OperatorInfo>,
}

impl OperatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { sorted: Vec::new() }
    }

    /// Registers a new operator pattern.
    ///
    /// The pattern is inserted so that the internal list stays sorted by
    /// descending pattern length, after any already-registered pattern of the
    /// same length.
    ///
    /// # Parameters
    /// - `pattern`: The operator symbol(s) to recognize.
    /// - `kind`: The token kind to create when the pattern is found.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyOperatorPattern`] if `pattern` is empty.
    pub fn register(&mut self, pattern: &str, kind: TokenKind) -> Result<(), ConfigError> {
        if pattern.is_empty() {
            return Err(ConfigError::EmptyOperatorPattern);
        }

        let length = pattern.chars().count();
        let insert_at = self.sorted
                            .iter()
                            .position(|op| op.pattern.chars().count() < length)
                            .unwrap_or(self.sorted.len());

        self.sorted.insert(insert_at,
                           OperatorInfo { pattern: pattern.to_string(),
                                          kind });
        Ok(())
    }

    /// Tries to recognize an operator at the given position.
    ///
    /// Patterns are tried longest-first; the first whose characters all match
    /// the statement starting at `position` wins.
    ///
    /// # Parameters
    /// - `chars`: The statement as a character sequence.
    /// - `position`: The offset to match at.
    ///
    /// # Returns
    /// The operator token if a registered pattern matches, `None` otherwise.
    #[must_use]
    pub fn recognize(&self, chars: &[char], position: usize) -> Option<Token> {
        for op in &self.sorted {
            let length = op.pattern.chars().count();
            if position + length > chars.len() {
                continue;
            }
            if op.pattern
                 .chars()
                 .zip(&chars[position..])
                 .all(|(expected, found)| expected == *found)
            {
                return Some(Token { kind:     op.kind,
                                    lexeme:   op.pattern.clone(),
                                    position,
                                    length, });
            }
        }
        None
    }

    /// Returns the number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns `true` when no pattern has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}
