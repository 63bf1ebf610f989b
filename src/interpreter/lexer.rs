use crate::{error::ParseError, interpreter::lexer::operators::OperatorRegistry};

/// The operator registry queried by the tokenizer.
///
/// Maps literal symbol patterns such as `+`, `+=`, or `++` to token kinds,
/// trying the longest registered pattern first so that multi-character
/// operators always win over their single-character prefixes.
///
/// # Responsibilities
/// - Keeps registered patterns ordered longest-first.
/// - Recognizes the operator starting at a given position, if any.
/// - Rejects empty patterns at registration time.
pub mod operators;

/// Identifies what kind of language element a token is.
///
/// The kinds fall into three families: the core structural kinds every
/// statement needs, the basic arithmetic kinds, and the assignment and
/// comparison kinds. New operators extend this enum and get wired up through
/// the operator and operation registries; the tokenizer and parser cores stay
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Core structural kinds.
    /// An unsigned integer literal such as `42`.
    Number,
    /// A variable name such as `x` or `total_2`.
    Identifier,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input, appended once after the last real token.
    Eof,

    // Arithmetic kinds.
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `=`
    Assign,

    // Assignment and comparison kinds.
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl TokenKind {
    /// Returns `true` when the kind can appear as the operator of an
    /// assignment statement.
    #[must_use]
    pub const fn is_assignment_operator(self) -> bool {
        matches!(self,
                 Self::Assign
                 | Self::PlusAssign
                 | Self::MinusAssign
                 | Self::MultiplyAssign
                 | Self::DivideAssign)
    }

    /// Returns `true` when the kind is a binary operator the expression
    /// parser folds with precedence climbing.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        self.precedence().is_some()
    }

    /// Returns the binding strength of a binary operator kind.
    ///
    /// Lower values bind tighter: multiplication and division are 1, addition
    /// and subtraction are 2. Kinds that are not binary operators have no
    /// precedence.
    ///
    /// # Example
    /// ```
    /// use batchcalc::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Multiply.precedence(), Some(1));
    /// assert_eq!(TokenKind::Minus.precedence(), Some(2));
    /// assert_eq!(TokenKind::Assign.precedence(), None);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Option<u8> {
        match self {
            Self::Multiply | Self::Divide => Some(1),
            Self::Plus | Self::Minus => Some(2),
            _ => None,
        }
    }
}

/// A minimal meaningful unit of a statement line.
///
/// Tokens are created once by the tokenizer and never modified. The position
/// and length refer to character offsets within the statement the token came
/// from and are carried into parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The characters the token was read from. Empty for `Eof`.
    pub lexeme:   String,
    /// Offset of the first character within the statement.
    pub position: usize,
    /// Number of characters the token spans.
    pub length:   usize,
}

impl Token {
    /// Creates a token whose length is taken from its lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        let lexeme = lexeme.into();
        let length = lexeme.chars().count();
        Self { kind,
               lexeme,
               position,
               length }
    }
}

/// Splits one statement line into a token sequence.
///
/// The tokenizer walks the statement character by character, skipping
/// whitespace. At each position it recognizes, in order: a digit run as a
/// number, an alphabetic-or-underscore-led run as an identifier, the longest
/// registered operator pattern, and finally the structural parentheses. Any
/// other character is a lexical error. The returned sequence always ends with
/// a single `Eof` token at the final offset.
///
/// Tokenization is a pure function of the statement text and the registry
/// configuration; the tokenizer holds no mutable state between calls.
pub struct Tokenizer<'a> {
    chars:     Vec<char>,
    operators: &'a OperatorRegistry,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over one statement line.
    ///
    /// # Parameters
    /// - `statement`: The raw statement text.
    /// - `operators`: The operator registry to consult at non-alphanumeric
    ///   positions.
    #[must_use]
    pub fn new(statement: &str, operators: &'a OperatorRegistry) -> Self {
        Self { chars: statement.chars().collect(),
               operators }
    }

    /// Produces the full token sequence for the statement.
    ///
    /// # Returns
    /// All tokens in source order, terminated by one `Eof` token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedCharacter`] when a character matches
    /// neither a number, an identifier, a registered operator, nor a
    /// parenthesis.
    pub fn tokenize(&self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < self.chars.len() {
            let current = self.chars[position];

            if current.is_whitespace() {
                position += 1;
            } else if current.is_ascii_digit() {
                let lexeme = self.read_while(position, |c| c.is_ascii_digit());
                let start = position;
                position += lexeme.chars().count();
                tokens.push(Token::new(TokenKind::Number, lexeme, start));
            } else if is_identifier_start(current) {
                let lexeme = self.read_while(position, is_identifier_char);
                let start = position;
                position += lexeme.chars().count();
                tokens.push(Token::new(TokenKind::Identifier, lexeme, start));
            } else if let Some(token) = self.operators.recognize(&self.chars, position) {
                position += token.length;
                tokens.push(token);
            } else if current == '(' {
                tokens.push(Token::new(TokenKind::LParen, "(", position));
                position += 1;
            } else if current == ')' {
                tokens.push(Token::new(TokenKind::RParen, ")", position));
                position += 1;
            } else {
                return Err(ParseError::UnexpectedCharacter { character: current,
                                                             position });
            }
        }

        tokens.push(Token { kind:     TokenKind::Eof,
                            lexeme:   String::new(),
                            position: self.chars.len(),
                            length:   0, });
        Ok(tokens)
    }

    fn read_while(&self, start: usize, accept: impl Fn(char) -> bool) -> String {
        self.chars[start..].iter()
                           .take_while(|c| accept(**c))
                           .collect()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
