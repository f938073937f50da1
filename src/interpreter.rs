/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, keywords, and punctuation. This is the first stage
/// of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Recognizes the `inc` and `print` keywords.
/// - Raises no errors of its own: unrecognized characters become `Unknown`
///   tokens and are rejected by the parser when consumed.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with one
/// token of lookahead and constructs an AST representing the program. It
/// stops at the first ill-formed construct; there is no error recovery.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the grammar, reporting errors with the expected construct,
///   the text found, and the source line.
/// - Restricts declaration initializers to bare integer literals.
pub mod parser;
/// The checker module enforces declare-before-use.
///
/// A single forward pass over the AST, run once between parsing and
/// execution. It tracks the set of declared names and rejects any variable
/// reference that precedes its declaration. The pass is purely advisory: it
/// never touches the evaluator's state.
pub mod checker;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the checked AST in statement order, maintains the
/// variable store, and collects one output value per executed `print`. It is
/// the only mutable state in the whole pipeline.
pub mod evaluator;
