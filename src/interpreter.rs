/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates both operands of each
/// expression, applies the operator, and produces the final number. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Recurses through nested operands in source order.
/// - Reports runtime errors for operators without a defined meaning.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element: parentheses,
/// operators, and single-digit numbers. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Silently discards characters that carry no meaning, including
///   whitespace.
/// - Never fails; validation is deferred entirely to the parser.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of one
/// expression. This enables the evaluator to compute its value.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes by recursive descent.
/// - Validates correct grammar and syntax, reporting errors with position
///   info.
/// - Accepts any operator token syntactically; operator semantics are the
///   evaluator's concern.
pub mod parser;
