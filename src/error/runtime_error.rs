#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A variable was read before any value was stored under its name.
    ///
    /// The declaration check prevents this for every program the grammar can
    /// express, so the evaluator can only hit it when run on an unchecked
    /// program.
    UnassignedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnassignedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' used before assignment.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
