use crate::{
    ast::AstNode,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::factor::FactorRegistry,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over one statement's token sequence.
///
/// The parser owns a cursor into the tokens and a reference to the factor
/// registry. Operator semantics stay out of it: which kinds bind and how
/// tightly comes from [`TokenKind::precedence`], and which kinds start an
/// assignment comes from [`TokenKind::is_assignment_operator`], so extending
/// the operator set never touches this driver.
pub struct Parser<'a> {
    tokens:  &'a [Token],
    index:   usize,
    factors: &'a FactorRegistry,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    ///
    /// The token sequence is expected to come from the tokenizer and
    /// therefore to end with an `Eof` token; in particular it is never
    /// empty.
    ///
    /// # Panics
    /// Panics if `tokens` is empty.
    #[must_use]
    pub const fn new(tokens: &'a [Token], factors: &'a FactorRegistry) -> Self {
        assert!(!tokens.is_empty(), "token sequence must end with Eof");
        Self { tokens,
               index: 0,
               factors }
    }

    /// Parses one full statement.
    ///
    /// If the current token is an identifier immediately followed by an
    /// assignment operator, the statement is an assignment and its right-hand
    /// side is parsed as a full expression. Anything else is parsed as a bare
    /// expression statement.
    ///
    /// # Errors
    /// Propagates any [`ParseError`] from expression parsing.
    pub fn parse_statement(&mut self) -> ParseResult<AstNode> {
        if self.current().kind == TokenKind::Identifier {
            if let Some(next) = self.tokens.get(self.index + 1) {
                if next.kind.is_assignment_operator() {
                    let name = self.current().lexeme.clone();
                    self.advance();

                    let op = self.current().kind;
                    self.advance();

                    let value = self.parse_expression()?;
                    return Ok(AstNode::Assignment { name,
                                                    op,
                                                    value: Box::new(value) });
                }
            }
        }

        self.parse_expression()
    }

    /// Parses one expression via precedence climbing.
    ///
    /// The entry call uses the loosest possible bound so every binary
    /// operator is accepted at the top level.
    ///
    /// # Errors
    /// Propagates any [`ParseError`] from factor parsing.
    pub fn parse_expression(&mut self) -> ParseResult<AstNode> {
        self.climb(u8::MAX)
    }

    /// The precedence-climbing loop.
    ///
    /// After parsing one factor, operators keep being folded while the
    /// current token is a binary operator whose precedence is strictly less
    /// than `min_precedence` (lower value = binds tighter). The right operand
    /// is parsed with the operator's own precedence as the new bound; the
    /// strict comparison is what makes operators of equal precedence fold
    /// left-to-right.
    fn climb(&mut self, min_precedence: u8) -> ParseResult<AstNode> {
        let mut node = self.parse_factor()?;

        loop {
            let op = self.current().kind;
            let precedence = match op.precedence() {
                Some(p) if p < min_precedence => p,
                _ => break,
            };
            self.advance();

            let right = self.climb(precedence)?;
            node = AstNode::BinaryOp { left: Box::new(node),
                                       op,
                                       right: Box::new(right) };
        }

        Ok(node)
    }

    /// Parses one atomic expression unit through the factor registry.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] when no registered rule
    /// claims the current token, or whatever error the claiming rule raises.
    pub fn parse_factor(&mut self) -> ParseResult<AstNode> {
        let factors = self.factors;
        factors.parse_factor(self)
    }

    /// The token under the cursor.
    ///
    /// Once the cursor reaches the trailing `Eof` token it stays there.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    /// The full token sequence, for rule lookahead.
    #[must_use]
    pub const fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    /// The cursor position within the token sequence.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Moves the cursor to the next token, saturating at the final `Eof`.
    pub fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedToken`] describing both kinds and the
    /// position when the current token does not match.
    pub fn expect(&mut self, expected: TokenKind) -> ParseResult<()> {
        let current = self.current();
        if current.kind != expected {
            return Err(ParseError::ExpectedToken { expected: format!("{expected:?}"),
                                                   found:    format!("{:?}", current.kind),
                                                   position: current.position, });
        }
        self.advance();
        Ok(())
    }
}
