/// Parsing errors.
///
/// Defines all error types that can occur while parsing the token stream.
/// Parse errors cover unexpected tokens, missing grammar pieces, and input
/// that ends before an expression is complete.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors cover operator codes that carry no defined meaning.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
