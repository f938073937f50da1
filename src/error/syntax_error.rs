#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum SyntaxError {
    /// The parser expected the start of a statement but found something else.
    ExpectedStatement {
        /// The literal text of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The parser expected an expression but found something else.
    ExpectedExpression {
        /// The literal text of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but a different one was found.
    ExpectedToken {
        /// The construct the parser required, e.g. `';'`.
        expected: String,
        /// The literal text of the token found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedStatement { found, line } => {
                write!(f, "Error on line {line}: Expected a statement, found '{found}'.")
            },

            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected an expression, found '{found}'.")
            },

            Self::ExpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found '{found}'.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
