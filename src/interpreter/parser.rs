use std::iter::Peekable;

use crate::{
    ast::{Expr, Program, Stmt},
    error::SyntaxError,
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program.
///
/// This is the entry point for parsing. Statements are parsed one after the
/// other until the token stream is exhausted. Parsing is fail-fast: the
/// first ill-formed construct aborts with an error and later problems in the
/// input are never reported.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }
    Ok(Program { statements })
}

/// Parses a single statement.
///
/// Dispatch is on one token of lookahead:
/// - an identifier starts a variable declaration,
/// - the `print` keyword starts a print statement,
/// - anything else is rejected.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Stmt`] node.
///
/// # Errors
/// Returns a `SyntaxError` if no statement can start at the current token.
fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Identifier(_), _)) => parse_var_decl(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((tok, line)) => Err(SyntaxError::ExpectedStatement { found: tok.to_string(),
                                                                  line:  *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a variable declaration of the form `<identifier> = <integer> ;`.
///
/// The initializer is restricted to a bare integer literal by the grammar;
/// `x = inc(1);` or `x = y;` fail here, not in the declaration check.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the declared identifier.
///
/// # Returns
/// A `Stmt::VarDecl` node.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - `=` is missing,
/// - the initializer is not an integer literal,
/// - the terminating `;` is missing,
/// - input ends unexpectedly.
fn parse_var_decl<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = if let Some((Token::Identifier(n), line)) = tokens.next() {
        (n.clone(), *line)
    } else {
        unreachable!()
    };

    expect(tokens, &Token::Equals, "'='", line)?;

    let value = match tokens.next() {
        Some((Token::Integer(v), line)) => Expr::Number { value: *v,
                                                          line:  *line, },
        Some((tok, line)) => {
            return Err(SyntaxError::ExpectedToken { expected: "an integer literal".to_string(),
                                                    found:    tok.to_string(),
                                                    line:     *line, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { line }),
    };

    expect(tokens, &Token::Semicolon, "';'", line)?;

    Ok(Stmt::VarDecl { name, value, line })
}

/// Parses a print statement of the form `print ( <expression> ) ;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `print` keyword.
///
/// # Returns
/// A `Stmt::Print` node.
///
/// # Errors
/// Returns a `SyntaxError` if the parentheses, the argument expression, or
/// the terminating `;` are malformed.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = if let Some((Token::Print, line)) = tokens.next() {
        *line
    } else {
        unreachable!()
    };

    expect(tokens, &Token::LParen, "'('", line)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'", line)?;
    expect(tokens, &Token::Semicolon, "';'", line)?;

    Ok(Stmt::Print { expr, line })
}

/// Parses a full expression.
///
/// The language has no operators, so an expression is a single integer
/// literal, a variable reference, or an `inc` call whose argument is again a
/// full expression.
///
/// Grammar: `expression := INTEGER | IDENTIFIER | "inc" "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `SyntaxError` if no expression starts at the current token, or
/// if an `inc` call is missing its parentheses or argument.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(v), line)) => Ok(Expr::Number { value: *v,
                                                             line:  *line, }),

        Some((Token::Identifier(n), line)) => Ok(Expr::Variable { name: n.clone(),
                                                                  line: *line, }),

        Some((Token::Inc, line)) => {
            let line = *line;
            expect(tokens, &Token::LParen, "'('", line)?;
            let argument = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'", line)?;
            Ok(Expr::IncCall { argument: Box::new(argument),
                               line })
        },

        Some((tok, line)) => Err(SyntaxError::ExpectedExpression { found: tok.to_string(),
                                                                   line:  *line, }),

        None => Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes one token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to consume.
/// - `expected`: The token that must appear next.
/// - `description`: Human-readable name of the expected token for errors.
/// - `line`: Line to report if the input ends here.
///
/// # Returns
/// The line number of the consumed token.
///
/// # Errors
/// Returns a `SyntaxError` naming the expected token and the text found.
fn expect<'a, I>(tokens: &mut Peekable<I>,
                 expected: &Token,
                 description: &str,
                 line: usize)
                 -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(SyntaxError::ExpectedToken { expected: description.to_string(),
                                                              found:    tok.to_string(),
                                                              line:     *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}
