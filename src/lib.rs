//! # incra
//!
//! incra is a deliberately tiny interpreted language: integer variable
//! declarations, a `print` statement, and a single built-in `inc`
//! (increment-by-one) function. The crate is a complete front-to-back
//! pipeline: it lexes source text, parses it into an abstract syntax tree,
//! checks declaration-before-use, and directly executes the tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        checker::check_program, evaluator::Context, lexer::tokenize, parser::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Stmt` and `Program` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the checker and the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Keeps the node families closed so unhandled kinds are a compile error.
pub mod ast;
/// Provides unified error types for parsing, checking, and evaluation.
///
/// This module defines all errors that can be raised by a pipeline run.
/// Every stage has its own tagged error type carrying a human-readable
/// message and the offending source line, and a top-level [`error::Error`]
/// wrapper identifies which stage failed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, semantic, runtime).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, declaration checking, and
/// evaluation to provide a complete runtime for the language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a source string through the whole pipeline and returns its output.
///
/// The stages run strictly in order (lex, parse, check, execute) and the
/// first failing stage aborts the run; no stage is retried or skipped. Each
/// call owns its own token stream, AST, and variable store, so independent
/// runs never share state.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The ordered sequence of integers produced by the program's `print`
/// statements, one per executed `print`.
///
/// # Errors
/// Returns the first [`Error`] raised by any stage: a syntax error from the
/// parser, a semantic error from the declaration check, or a runtime error
/// from evaluation.
///
/// # Examples
/// ```
/// use incra::run;
///
/// let outputs = run("x=10;print(inc(x));print(inc(15));").unwrap();
/// assert_eq!(outputs, vec![11, 16]);
///
/// // 'y' is never declared, so the run fails before execution.
/// let source = "a=1;print(inc(y));";
/// assert!(run(source).is_err());
/// ```
pub fn run(source: &str) -> Result<Vec<i64>, Error> {
    let tokens = tokenize(source);

    let program = parse_program(&mut tokens.iter().peekable())?;
    check_program(&program)?;

    let mut context = Context::new();
    let outputs = context.execute(&program)?;

    Ok(outputs)
}
