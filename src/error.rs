/// Syntax errors.
///
/// Defines all error types that can occur while parsing source code. Syntax
/// errors include unexpected tokens, malformed statements and expressions,
/// and input that ends in the middle of a construct.
pub mod syntax_error;
/// Semantic errors.
///
/// Contains the error types raised by the declaration-checking pass that runs
/// between parsing and execution. Currently the only semantic rule is
/// declare-before-use.
pub mod semantic_error;
/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation. With the
/// current grammar these are reachable only when the checking pass is
/// skipped; they exist as a defensive invariant of the evaluator.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Any failure a pipeline run can end with.
///
/// Each stage of the pipeline has its own error type; this enum tags which
/// stage failed so callers can tell a grammar violation apart from an
/// undeclared variable without parsing the message text.
pub enum Error {
    /// The parser rejected the source.
    Syntax(SyntaxError),
    /// The declaration check rejected the program.
    Semantic(SemanticError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
