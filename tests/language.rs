use incra::{
    ast::{Expr, Program, Stmt},
    error::{Error, RuntimeError},
    interpreter::{evaluator::Context, lexer::tokenize, parser::parse_program},
    run,
};

fn assert_outputs(src: &str, expected: &[i64]) {
    match run(src) {
        Ok(outputs) => assert_eq!(outputs, expected, "Wrong outputs for script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) -> String {
    match run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(Error::Syntax(e)) => e.to_string(),
        Err(e) => panic!("Expected a syntax error, got: {e}"),
    }
}

fn assert_semantic_error(src: &str) -> String {
    match run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(Error::Semantic(e)) => e.to_string(),
        Err(e) => panic!("Expected a semantic error, got: {e}"),
    }
}

#[test]
fn declarations_and_printing() {
    assert_outputs("print(7);", &[7]);
    assert_outputs("x=3;print(x);", &[3]);
    assert_outputs("x=10;print(inc(x));print(inc(15));", &[11, 16]);
}

#[test]
fn inc_composes_additively() {
    assert_outputs("print(inc(0));", &[1]);
    assert_outputs("print(inc(inc(inc(5))));", &[8]);
    assert_outputs("x=1;print(inc(inc(x)));", &[3]);
}

#[test]
fn redeclaration_is_legal_and_later_wins() {
    assert_outputs("x=1; x=2; print(x);", &[2]);
    assert_outputs("x=1;print(x);x=5;print(x);", &[1, 5]);
}

#[test]
fn outputs_follow_execution_order() {
    assert_outputs("a=1;\nb=2;\nprint(a);\nprint(inc(b));\nprint(a);", &[1, 3, 1]);
}

#[test]
fn empty_and_silent_programs_succeed() {
    assert_outputs("", &[]);
    assert_outputs(" \t\n  \n", &[]);
    assert_outputs("x=1;y=2;", &[]);
}

#[test]
fn undeclared_variables_are_a_semantic_error() {
    let message = assert_semantic_error("a=1;print(inc(y));");
    assert!(message.contains('y'), "Message does not name the variable: {message}");

    // Declarations are order-sensitive: a forward reference fails too.
    assert_semantic_error("print(x);x=1;");
}

#[test]
fn semantic_errors_carry_line_numbers() {
    let message = assert_semantic_error("a=1;\nprint(y);");
    assert!(message.contains("line 2"), "Wrong line in message: {message}");
}

#[test]
fn declaration_initializers_must_be_literals() {
    // The grammar forbids non-literal initializers, so these are syntax
    // errors rather than semantic ones.
    assert_syntax_error("x = inc(1);");
    assert_syntax_error("x=1;y = x;");
    assert_syntax_error("x = print;");
}

#[test]
fn malformed_inc_calls_cite_their_line() {
    let message = assert_syntax_error("print(inc());");
    assert!(message.contains("expression"), "Unexpected message: {message}");
    assert!(message.contains("line 1"), "Wrong line in message: {message}");

    let message = assert_syntax_error("x=1;\nprint(inc());");
    assert!(message.contains("line 2"), "Wrong line in message: {message}");
}

#[test]
fn incomplete_statements_are_rejected() {
    assert_syntax_error("x=1");
    assert_syntax_error("print(1)");
    assert_syntax_error("x=");
    assert_syntax_error("print(inc(1);");
    assert_syntax_error("1;");
}

#[test]
fn unknown_characters_surface_as_parse_errors() {
    let message = assert_syntax_error("x=1;\n$ print(x);");
    assert!(message.contains('$'), "Message does not name the character: {message}");
    assert!(message.contains("line 2"), "Wrong line in message: {message}");
}

#[test]
fn first_error_wins() {
    // Both lines are malformed; only the earlier one is ever reported.
    let message = assert_syntax_error("x = ;\ny = inc(1);");
    assert!(message.contains("line 1"), "Wrong line in message: {message}");
}

#[test]
fn parsing_is_deterministic() {
    let src = "x=10;print(inc(x));print(inc(15));";
    let first = parse_program(&mut tokenize(src).iter().peekable()).unwrap();
    let second = parse_program(&mut tokenize(src).iter().peekable()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unchecked_programs_fail_at_evaluation() {
    // Skipping the declaration check exposes the evaluator's own guard.
    let program = Program { statements: vec![Stmt::Print { expr: Expr::Variable { name: "ghost".to_string(),
                                                                                  line: 1, },
                                                           line: 1, }], };

    let mut context = Context::new();
    let err = context.execute(&program).unwrap_err();
    assert_eq!(err,
               RuntimeError::UnassignedVariable { name: "ghost".to_string(),
                                                  line: 1, });
}
