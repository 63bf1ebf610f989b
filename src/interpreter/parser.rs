/// The parser driver.
///
/// Holds the token cursor and implements statement parsing and
/// precedence-climbing expression parsing, delegating atomic units to the
/// factor registry.
///
/// # Responsibilities
/// - Recognizes assignment statements by one token of lookahead.
/// - Folds binary operators left-associatively by precedence.
/// - Exposes the cursor operations factor rules build on.
pub mod core;
/// Pluggable recognition of atomic expression units.
///
/// Declares the factor rule trait, the ordered first-match registry, and the
/// canonical rules: number literals, identifiers with optional post
/// increment/decrement, pre increment/decrement, and parenthesized
/// sub-expressions.
///
/// # Responsibilities
/// - Lets new atomic forms be added without modifying the parser core.
/// - Guarantees deterministic first-match dispatch in registration order.
pub mod factor;

pub use self::core::Parser;
pub use self::factor::{FactorRegistry, FactorRule};
