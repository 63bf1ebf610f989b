use crate::{
    ast::AstNode,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// A strategy able to parse one kind of factor.
///
/// A factor is the smallest parsed expression unit: a literal, a variable
/// (possibly post-incremented), a pre-increment form, or a parenthesized
/// sub-expression. Implementations first declare whether they can handle the
/// current position, then parse it; the registry invokes the first rule that
/// matches, so rules never need to agree on disjoint token sets as long as
/// registration order resolves the overlap.
pub trait FactorRule: Send + Sync {
    /// Checks whether this rule can parse the current token sequence.
    ///
    /// # Parameters
    /// - `current`: The token under the cursor.
    /// - `tokens`: The complete token sequence, for lookahead.
    /// - `index`: The cursor position within `tokens`.
    fn matches(&self, current: &Token, tokens: &[Token], index: usize) -> bool;

    /// Parses the factor, consuming its tokens from the parser.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the tokens claimed by [`matches`]
    /// turn out to be malformed.
    ///
    /// [`matches`]: FactorRule::matches
    fn parse(&self, parser: &mut Parser<'_>) -> ParseResult<AstNode>;
}

/// Ordered registry of factor rules with deterministic first-match dispatch.
///
/// Rules are tried in registration order. The canonical set, in required
/// order, is: number literal, identifier, pre-increment/decrement,
/// parenthesized expression. Registering the set twice does not change which
/// rule wins for any input.
#[derive(Default)]
pub struct FactorRegistry {
    rules: Vec<Box<dyn FactorRule>>,
}

impl FactorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the registry.
    pub fn register(&mut self, rule: impl FactorRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Removes all registered rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when no rule has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parses one factor with the first rule that claims the current token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] when no rule matches, or the
    /// matching rule's error.
    pub fn parse_factor(&self, parser: &mut Parser<'_>) -> ParseResult<AstNode> {
        for rule in &self.rules {
            if rule.matches(parser.current(), parser.tokens(), parser.index()) {
                return rule.parse(parser);
            }
        }

        let current = parser.current();
        Err(ParseError::UnexpectedToken { kind:     format!("{:?}", current.kind),
                                          position: current.position, })
    }
}

/// Parses integer literals such as `42`.
pub struct NumberRule;

impl FactorRule for NumberRule {
    fn matches(&self, current: &Token, _tokens: &[Token], _index: usize) -> bool {
        current.kind == TokenKind::Number
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseResult<AstNode> {
        let token = parser.current().clone();
        parser.advance();

        let value = token.lexeme
                         .parse::<i64>()
                         .map_err(|_| ParseError::InvalidNumber { lexeme:   token.lexeme.clone(),
                                                                  position: token.position, })?;
        Ok(AstNode::Number { value })
    }
}

/// Parses identifiers: plain variable references like `x`, plus the trailing
/// `++`/`--` that turns them into post-increment or post-decrement nodes.
pub struct IdentifierRule;

impl FactorRule for IdentifierRule {
    fn matches(&self, current: &Token, _tokens: &[Token], _index: usize) -> bool {
        current.kind == TokenKind::Identifier
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseResult<AstNode> {
        let name = parser.current().lexeme.clone();
        parser.advance();

        match parser.current().kind {
            TokenKind::Increment => {
                parser.advance();
                Ok(AstNode::PostIncDec { name,
                                         increment: true })
            },
            TokenKind::Decrement => {
                parser.advance();
                Ok(AstNode::PostIncDec { name,
                                         increment: false })
            },
            _ => Ok(AstNode::Variable { name }),
        }
    }
}

/// Parses pre-increment and pre-decrement forms: `++x`, `--counter`.
pub struct PreIncDecRule;

impl FactorRule for PreIncDecRule {
    fn matches(&self, current: &Token, _tokens: &[Token], _index: usize) -> bool {
        matches!(current.kind, TokenKind::Increment | TokenKind::Decrement)
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseResult<AstNode> {
        let increment = parser.current().kind == TokenKind::Increment;
        parser.advance();

        if parser.current().kind != TokenKind::Identifier {
            let operator = if increment { "++" } else { "--" };
            return Err(ParseError::ExpectedIdentifier { operator: operator.to_string(),
                                                        position: parser.current().position, });
        }

        let name = parser.current().lexeme.clone();
        parser.advance();
        Ok(AstNode::PreIncDec { name, increment })
    }
}

/// Parses parenthesized sub-expressions: `(2 + 3)`, `((x * y) + z)`.
pub struct ParenthesesRule;

impl FactorRule for ParenthesesRule {
    fn matches(&self, current: &Token, _tokens: &[Token], _index: usize) -> bool {
        current.kind == TokenKind::LParen
    }

    fn parse(&self, parser: &mut Parser<'_>) -> ParseResult<AstNode> {
        parser.advance(); // consume '('
        let node = parser.parse_expression()?;
        parser.expect(TokenKind::RParen)?;
        Ok(node)
    }
}
