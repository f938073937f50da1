#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during the declaration check.
pub enum SemanticError {
    /// A variable was referenced before any declaration of it.
    ///
    /// Declarations are order-sensitive: the declaring statement must
    /// textually precede the use.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is undeclared.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
