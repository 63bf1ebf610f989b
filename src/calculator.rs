use crate::{
    error::{CalcError, ConfigError},
    interpreter::{
        lexer::{operators::OperatorRegistry, TokenKind, Tokenizer},
        operations::OperationRegistry,
        parser::{
            factor::{IdentifierRule, NumberRule, ParenthesesRule, PreIncDecRule},
            FactorRegistry, Parser,
        },
        store::VariableStore,
    },
};

/// One request's evaluation unit.
///
/// A calculator composes one operator registry, one factor registry, one
/// operation registry, and one variable store. The registries are configured
/// at construction and never mutated afterwards; the store accumulates side
/// effects across the statement lines of a single request and is cleared once
/// the snapshot is taken, so a calculator instance never leaks state from one
/// request into another.
pub struct Calculator {
    operators:  OperatorRegistry,
    factors:    FactorRegistry,
    operations: OperationRegistry,
    store:      VariableStore,
}

impl Calculator {
    /// Creates a calculator with the canonical operator, factor, and
    /// operation configuration.
    #[must_use]
    pub fn new() -> Self {
        let mut operators = OperatorRegistry::new();
        configure_operators(&mut operators).expect("canonical operator patterns are never empty");

        let mut factors = FactorRegistry::new();
        configure_factors(&mut factors);

        let mut operations = OperationRegistry::new();
        configure_operations(&mut operations);

        Self { operators,
               factors,
               operations,
               store: VariableStore::new() }
    }

    /// Evaluates an ordered list of statement lines and returns the final
    /// variable snapshot.
    ///
    /// Each line is trimmed and skipped if empty, then tokenized, parsed, and
    /// evaluated in order against the shared store. Side effects accumulate
    /// across lines; after the last line the snapshot is rendered and the
    /// store is cleared.
    ///
    /// # Returns
    /// The formatted snapshot, e.g. `(x=5,y=10,z=15)`.
    ///
    /// # Errors
    /// Returns the first [`CalcError`] raised by any line. The store is
    /// cleared on failure too; no partial snapshot is observable.
    ///
    /// # Example
    /// ```
    /// use batchcalc::calculator::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// let snapshot = calc.process_statements(&["x = 5", "y = x * 2"]).unwrap();
    /// assert_eq!(snapshot, "(x=5,y=10)");
    /// ```
    pub fn process_statements<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<String, CalcError> {
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if let Err(error) = self.process_statement(line) {
                self.store.clear();
                return Err(error);
            }
        }

        let snapshot = self.store.snapshot();
        self.store.clear();
        Ok(snapshot)
    }

    fn process_statement(&mut self, line: &str) -> Result<i64, CalcError> {
        let tokens = Tokenizer::new(line, &self.operators).tokenize()?;
        let ast = Parser::new(&tokens, &self.factors).parse_statement()?;
        Ok(ast.evaluate(&mut self.store, &self.operations)?)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the canonical operator patterns.
///
/// The two-character assignment and increment operators are registered
/// first, the single-character arithmetic operators after; the registry's
/// longest-first ordering makes the registration order irrelevant for
/// recognition, this merely mirrors the canonical setup.
///
/// # Errors
/// Never fails for the canonical set; the signature propagates the
/// registry's [`ConfigError`] for callers composing their own sets.
pub fn configure_operators(registry: &mut OperatorRegistry) -> Result<(), ConfigError> {
    registry.register("++", TokenKind::Increment)?;
    registry.register("--", TokenKind::Decrement)?;
    registry.register("+=", TokenKind::PlusAssign)?;
    registry.register("-=", TokenKind::MinusAssign)?;
    registry.register("*=", TokenKind::MultiplyAssign)?;
    registry.register("/=", TokenKind::DivideAssign)?;
    registry.register("==", TokenKind::Equal)?;
    registry.register("!=", TokenKind::NotEqual)?;

    registry.register("+", TokenKind::Plus)?;
    registry.register("-", TokenKind::Minus)?;
    registry.register("*", TokenKind::Multiply)?;
    registry.register("/", TokenKind::Divide)?;
    registry.register("=", TokenKind::Assign)?;
    Ok(())
}

/// Registers the canonical factor rules in their required order:
/// number literal, identifier, pre-increment/decrement, parentheses.
pub fn configure_factors(registry: &mut FactorRegistry) {
    registry.register(NumberRule);
    registry.register(IdentifierRule);
    registry.register(PreIncDecRule);
    registry.register(ParenthesesRule);
}

/// Registers the canonical binary and assignment operations.
///
/// Arithmetic wraps on overflow; both division forms fail on a zero
/// divisor.
pub fn configure_operations(registry: &mut OperationRegistry) {
    use crate::error::RuntimeError;

    registry.register_binary(TokenKind::Plus, |left, right| Ok(left.wrapping_add(right)));
    registry.register_binary(TokenKind::Minus, |left, right| Ok(left.wrapping_sub(right)));
    registry.register_binary(TokenKind::Multiply, |left, right| Ok(left.wrapping_mul(right)));
    registry.register_binary(TokenKind::Divide, |left, right| {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left.wrapping_div(right))
            });

    registry.register_assignment(TokenKind::Assign, |_current, value| Ok(value));
    registry.register_assignment(TokenKind::PlusAssign,
                                 |current, value| Ok(current.wrapping_add(value)));
    registry.register_assignment(TokenKind::MinusAssign,
                                 |current, value| Ok(current.wrapping_sub(value)));
    registry.register_assignment(TokenKind::MultiplyAssign,
                                 |current, value| Ok(current.wrapping_mul(value)));
    registry.register_assignment(TokenKind::DivideAssign, |current, value| {
                if value == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(current.wrapping_div(value))
            });
}
