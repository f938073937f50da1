use std::collections::HashSet;

use crate::{
    ast::{Expr, Program, Stmt},
    error::SemanticError,
};

/// Result type used by the declaration check.
pub type CheckResult<T> = Result<T, SemanticError>;

/// Checks that every variable reference is preceded by a declaration.
///
/// A single forward pass over the program. The set of declared names starts
/// empty and grows as declarations are visited, so the check is
/// order-sensitive: forward references fail. Re-declaring a name is legal
/// and silently refreshes the entry.
///
/// The pass only reads the program; it shares no state with the evaluator.
///
/// # Parameters
/// - `program`: The parsed program to check.
///
/// # Errors
/// Returns [`SemanticError::UndeclaredVariable`] for the first reference to
/// a name with no preceding declaration.
pub fn check_program(program: &Program) -> CheckResult<()> {
    let mut declared: HashSet<String> = HashSet::new();

    for statement in &program.statements {
        match statement {
            Stmt::VarDecl { name, .. } => {
                declared.insert(name.clone());
            },
            Stmt::Print { expr, .. } => check_expression(expr, &declared)?,
        }
    }

    Ok(())
}

/// Checks one expression against the set of names declared so far.
///
/// Literals are always valid; `inc` calls recurse into their argument and
/// need no check of their own.
fn check_expression(expr: &Expr, declared: &HashSet<String>) -> CheckResult<()> {
    match expr {
        Expr::Number { .. } => Ok(()),

        Expr::Variable { name, line } => {
            if declared.contains(name) {
                Ok(())
            } else {
                Err(SemanticError::UndeclaredVariable { name: name.clone(),
                                                        line: *line, })
            }
        },

        Expr::IncCall { argument, .. } => check_expression(argument, declared),
    }
}
