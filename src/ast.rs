/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers the three expression forms the language knows: integer
/// literals, variable references, and calls to the built-in `inc` function.
/// Each variant carries the source line it was parsed from, which the checker
/// and the evaluator use for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Number {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A call to the built-in `inc` function, e.g. `inc(x)`.
    ///
    /// The single argument is a full expression, so calls nest arbitrarily:
    /// `inc(inc(x))` is valid.
    IncCall {
        /// The argument expression.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use incra::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Variable { line, .. }
            | Self::IncCall { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// A program is a flat sequence of statements; there is no control flow and
/// no nesting beyond the expressions inside a `print`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A variable declaration binding a name to an integer value.
    ///
    /// The grammar restricts the initializer to a bare integer literal, so
    /// the parser only ever constructs this variant with an `Expr::Number`
    /// as `value`. Declaring `x = inc(1);` is a syntax error.
    VarDecl {
        /// The name of the variable.
        name:  String,
        /// The initializer expression (always a literal).
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `print(expr);` statement evaluated for its output.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A parsed program: an ordered sequence of statements.
///
/// Immutable once constructed; the checker and the evaluator only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Stmt>,
}
