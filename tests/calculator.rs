use batchcalc::{
    calculator::{configure_factors, configure_operators, Calculator},
    error::CalcError,
    evaluate_request,
    interpreter::{
        lexer::{operators::OperatorRegistry, TokenKind, Tokenizer},
        parser::{FactorRegistry, Parser},
    },
};

fn assert_snapshot(lines: &[&str], expected: &str) {
    match evaluate_request(lines) {
        Ok(snapshot) => assert_eq!(snapshot, expected, "for request {lines:?}"),
        Err(e) => panic!("Request {lines:?} failed: {e}"),
    }
}

fn assert_error_contains(lines: &[&str], fragment: &str) {
    match evaluate_request(lines) {
        Ok(snapshot) => {
            panic!("Request {lines:?} succeeded with {snapshot} but was expected to fail")
        },
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "error '{message}' does not mention '{fragment}'");
        },
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_snapshot(&["x = 2 + 3 * 4"], "(x=14)");
    assert_snapshot(&["x = 3 * 4 + 2"], "(x=14)");
    assert_snapshot(&["x = 10 - 6 / 2"], "(x=7)");
}

#[test]
fn same_precedence_associates_left() {
    assert_snapshot(&["x = 10 - 2 - 3"], "(x=5)");
    assert_snapshot(&["x = 24 / 4 / 3"], "(x=2)");
    assert_snapshot(&["x = 1 - 2 + 3"], "(x=2)");
}

#[test]
fn parentheses_override_precedence() {
    assert_snapshot(&["x = (2 + 3) * 4"], "(x=20)");
    assert_snapshot(&["x = ((1 + 2) * (3 + 4))"], "(x=21)");
}

#[test]
fn post_increment_yields_original_value() {
    assert_snapshot(&["i = 1", "x = 5 + i++", "y = 10 * i"], "(i=2,x=6,y=20)");
}

#[test]
fn pre_and_post_increment_decrement() {
    assert_snapshot(&["x = 5", "y = x++ * 2", "i = 40", "j = 1", "i = i * 2 + j++"],
                    "(i=81,j=2,x=6,y=10)");
    assert_snapshot(&["a = 10", "b = a++", "c = ++a", "a = a * 2"], "(a=24,b=10,c=12)");
    assert_snapshot(&["m = 7", "n = m-- + --m", "m = m * 2 + n - n"], "(m=10,n=12)");
    assert_snapshot(&["x = 3", "y = 4", "z = x++ + --y", "y = y + 1"], "(x=4,y=4,z=6)");
}

#[test]
fn increment_in_larger_expression() {
    assert_snapshot(&["i = 1", "j = i++", "x = 5 + i"], "(i=2,j=1,x=7)");
    assert_snapshot(&["i = 1", "x = 5 + i++", "j = i - 1"], "(i=2,j=1,x=6)");
}

#[test]
fn unassigned_variables_default_to_zero() {
    assert_snapshot(&["y = x + 1"], "(y=1)");
    assert_snapshot(&["x = y * 10", "z = x + y"], "(x=0,z=0)");
}

#[test]
fn snapshot_is_sorted_by_name() {
    assert_snapshot(&["b = 2", "a = 1"], "(a=1,b=2)");
    assert_snapshot(&["zeta = 3", "alpha = 1", "mid = 2"], "(alpha=1,mid=2,zeta=3)");
}

#[test]
fn empty_request_yields_empty_snapshot() {
    assert_snapshot(&[], "()");
    assert_snapshot(&["", "   "], "()");
}

#[test]
fn compound_assignments() {
    assert_snapshot(&["x = 10", "x += 5"], "(x=15)");
    assert_snapshot(&["x = 10", "x -= 3"], "(x=7)");
    assert_snapshot(&["x = 10", "x *= 2"], "(x=20)");
    assert_snapshot(&["x = 10", "x /= 4"], "(x=2)");
    assert_snapshot(&["x += 5"], "(x=5)");
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert_error_contains(&["x = 1 / 0"], "Division by zero");
    assert_error_contains(&["x = 5", "x /= 0"], "Division by zero");
    assert_error_contains(&["y = 0", "x = 10 / y"], "Division by zero");
}

#[test]
fn lexical_errors_carry_positions() {
    assert_error_contains(&["x = 5 @ 3"], "Unexpected character");
    assert_error_contains(&["x = #"], "position 4");
}

#[test]
fn syntax_errors() {
    assert_error_contains(&["x = (2 + 3"], "Expected");
    assert_error_contains(&["x = ++5"], "Expected identifier after ++");
    assert_error_contains(&["x = * 3"], "Unexpected token");
}

#[test]
fn failed_request_reports_first_error() {
    let result = evaluate_request(&["x = 5", "y = 1 / 0", "z = @"]);
    let Err(CalcError::Eval(e)) = result else {
        panic!("expected a runtime error");
    };
    assert!(e.to_string().contains("Division by zero"));
}

#[test]
fn store_is_cleared_between_requests() {
    let mut calc = Calculator::new();
    assert_eq!(calc.process_statements(&["x = 5"]).unwrap(), "(x=5)");
    // The second request must not see the first request's x.
    assert_eq!(calc.process_statements(&["y = x + 1"]).unwrap(), "(y=1)");
}

#[test]
fn store_is_cleared_after_a_failure() {
    let mut calc = Calculator::new();
    assert!(calc.process_statements(&["x = 5", "y = 1 / 0"]).is_err());
    assert_eq!(calc.process_statements(&["z = x"]).unwrap(), "(z=0)");
}

#[test]
fn tokenizer_prefers_longest_operator_match() {
    let mut operators = OperatorRegistry::new();
    configure_operators(&mut operators).unwrap();

    let tokens = Tokenizer::new("x += 1", &operators).tokenize().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Identifier,
                    TokenKind::PlusAssign,
                    TokenKind::Number,
                    TokenKind::Eof]);

    let tokens = Tokenizer::new("i++", &operators).tokenize().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Identifier, TokenKind::Increment, TokenKind::Eof]);
}

#[test]
fn operator_registration_order_is_irrelevant() {
    // Register shortest-first; recognition must still prefer the longest.
    let mut operators = OperatorRegistry::new();
    operators.register("+", TokenKind::Plus).unwrap();
    operators.register("+=", TokenKind::PlusAssign).unwrap();
    operators.register("++", TokenKind::Increment).unwrap();

    let tokens = Tokenizer::new("a ++ b += c", &operators).tokenize().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Identifier,
                    TokenKind::Increment,
                    TokenKind::Identifier,
                    TokenKind::PlusAssign,
                    TokenKind::Identifier,
                    TokenKind::Eof]);
}

#[test]
fn empty_operator_pattern_is_rejected() {
    let mut operators = OperatorRegistry::new();
    assert!(operators.register("", TokenKind::Plus).is_err());
    assert!(operators.is_empty());
}

#[test]
fn reconfiguring_operators_is_idempotent() {
    let mut operators = OperatorRegistry::new();
    configure_operators(&mut operators).unwrap();
    configure_operators(&mut operators).unwrap();

    let tokens = Tokenizer::new("x += 1", &operators).tokenize().unwrap();
    assert_eq!(tokens[1].kind, TokenKind::PlusAssign);
}

#[test]
fn whitespace_is_insignificant() {
    assert_snapshot(&["x=2+3*4"], "(x=14)");
    assert_snapshot(&["   x   =   2   +   3   "], "(x=5)");
}

#[test]
#[should_panic(expected = "token sequence must end with Eof")]
fn parser_rejects_an_empty_token_sequence() {
    let factors = FactorRegistry::new();
    let _ = Parser::new(&[], &factors);
}

#[test]
fn eof_only_input_is_a_parse_error_not_a_panic() {
    let mut operators = OperatorRegistry::new();
    configure_operators(&mut operators).unwrap();
    let mut factors = FactorRegistry::new();
    configure_factors(&mut factors);

    let tokens = Tokenizer::new("", &operators).tokenize().unwrap();
    assert!(Parser::new(&tokens, &factors).parse_statement().is_err());
}

#[test]
fn multi_character_identifiers() {
    assert_snapshot(&["counter = 10", "total = counter++ * 2"], "(counter=11,total=20)");
    assert_snapshot(&["value_1 = 5", "value_2 = value_1 + 1"], "(value_1=5,value_2=6)");
}
