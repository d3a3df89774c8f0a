use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
    /// Operator tokens; single-character operator codes such as `s`.
    #[token("s", |lex| lex.slice().to_string())]
    Operator(String),
    /// Number literal tokens; a single decimal digit such as `4`.
    #[regex(r"[0-9]", parse_digit)]
    Number(i64),

    /// Everything else, whitespace included, carries no meaning and is
    /// skipped.
    #[regex(r"[^()s0-9]+", logos::skip)]
    Ignored,
}

/// Converts a source string into its token sequence.
///
/// Each character maps to at most one token; characters outside the grammar
/// alphabet are silently dropped, which makes whitespace between tokens
/// optional. Tokenization never fails: malformed input simply yields a token
/// sequence that the parser will later reject.
///
/// # Parameters
/// - `source`: The raw source text to tokenize.
///
/// # Returns
/// The tokens of `source`, in input order.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).filter_map(Result::ok).collect()
}

/// Parses a single-digit literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The digit value in `0..=9` if successful.
/// - `None`: If the token slice is not a valid digit.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
