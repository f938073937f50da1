use logos::{Logos, Skip};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `inc`
    #[token("inc")]
    Inc,
    /// `print`
    #[token("print")]
    Print,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Integer literal tokens, such as `42`. No sign, no fraction.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Newlines advance the line counter and are otherwise insignificant.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    Newline,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Any character that starts no other token.
    ///
    /// Not a lexical error: the token flows into the stream and the parser
    /// rejects it when it is consumed in place of something expected.
    #[regex(r".", unknown_char, priority = 0)]
    Unknown(char),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inc => write!(f, "inc"),
            Self::Print => write!(f, "print"),
            Self::Equals => write!(f, "="),
            Self::Semicolon => write!(f, ";"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Newline => writeln!(f),
            Self::Ignored => write!(f, " "),
            Self::Unknown(c) => write!(f, "{c}"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are skipped.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes an entire source string into `(Token, line)` pairs.
///
/// Lines are 1-based. The lexer never fails: characters outside the language
/// become [`Token::Unknown`] entries in the stream and are only rejected by
/// the parser. An empty or whitespace-only source yields an empty stream.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The full token stream in source order.
///
/// # Examples
/// ```
/// use incra::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x=1;");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            // The catch-all rule makes the lexer total, so this arm only
            // guards against literals that overflow `i64`.
            Err(()) => {
                let c = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                tokens.push((Token::Unknown(c), lexer.extras.line));
            },
        }
    }

    tokens
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits the host width.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the single character behind an unrecognized token slice.
fn unknown_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
