use std::collections::HashMap;

use crate::{
    ast::{Expr, Program, Stmt},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the mapping from variable names
/// to their current integer values. It is the only mutable state in the
/// pipeline and is independent of the checker's declared-name set.
///
/// ## Usage
///
/// A `Context` is created per run and is not designed for concurrent access;
/// concurrent runs must each construct their own.
pub struct Context {
    memory: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variables assigned.
    #[must_use]
    pub fn new() -> Self {
        Self { memory: HashMap::new() }
    }

    /// Executes a program, statement by statement, in source order.
    ///
    /// Declarations evaluate their (literal) initializer and insert or
    /// overwrite the variable's value. Print statements evaluate their
    /// expression and append the result to the output. There are no jumps,
    /// loops, or early exits other than error propagation.
    ///
    /// # Parameters
    /// - `program`: The checked program to execute.
    ///
    /// # Returns
    /// One output value per executed `print`, in execution order.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an expression fails to evaluate. For
    /// programs that passed the declaration check this cannot happen.
    pub fn execute(&mut self, program: &Program) -> EvalResult<Vec<i64>> {
        let mut outputs = Vec::new();

        for statement in &program.statements {
            match statement {
                Stmt::VarDecl { name, value, .. } => {
                    let value = self.eval(value)?;
                    self.memory.insert(name.clone(), value);
                },
                Stmt::Print { expr, .. } => outputs.push(self.eval(expr)?),
            }
        }

        Ok(outputs)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Dispatches on the expression variant: literals yield their value,
    /// variable references look up the store, and `inc` calls evaluate their
    /// argument and add one. Overflow follows host `i64` semantics.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnassignedVariable`] when a referenced name
    /// has no stored value.
    fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),

            Expr::Variable { name, line } => {
                self.memory
                    .get(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UnassignedVariable { name: name.clone(),
                                                                      line: *line, })
            },

            Expr::IncCall { argument, .. } => Ok(self.eval(argument)? + 1),
        }
    }
}
