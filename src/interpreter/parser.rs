use std::iter::Peekable;

use crate::{
    ast::{Expression, PrimaryExpression},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one full expression from the token stream.
///
/// This is the entry point for parsing. It consumes exactly one expression
/// starting at the current position; tokens remaining after the expression is
/// complete are left unconsumed and ignored.
///
/// Grammar: `expression := "(" operator primary primary ")"`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(position, token)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if the token stream does not match the grammar or
/// ends before the expression is complete.
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = (usize, &'a Token)>
{
    parse_expression(tokens)
}

/// Parses a parenthesized binary expression.
///
/// Expected form: `( operator primary primary )`
///
/// The function consumes the opening parenthesis, an operator token (any
/// single-character code is accepted syntactically; its meaning is checked
/// during evaluation), both operands in source order, and the closing
/// parenthesis.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The assembled [`Expression`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the opening parenthesis is missing,
/// - no operator token follows it,
/// - an operand fails to parse,
/// - the closing parenthesis is missing,
/// - the stream ends before the expression is complete.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let open_position = match tokens.next() {
        Some((position, Token::ParenOpen)) => position,
        Some((position, token)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(', found {token:?}"),
                                                     position });
        },
        None => {
            return Err(ParseError::UnexpectedToken { token: "end of input".to_string(),
                                                     position: 0 });
        },
    };

    let operator = match tokens.next() {
        Some((_, Token::Operator(code))) => code.clone(),
        Some((position, token)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected operator, found {token:?}"),
                                                     position });
        },
        None => {
            return Err(ParseError::UnexpectedToken { token: "end of input".to_string(),
                                                     position: open_position });
        },
    };

    let first = parse_primary(tokens)?;
    let second = parse_primary(tokens)?;

    match tokens.next() {
        Some((_, Token::ParenClose)) => {},
        Some((position, token)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected ')', found {token:?}"),
                                                     position });
        },
        None => {
            return Err(ParseError::UnexpectedToken { token: "end of input".to_string(),
                                                     position: open_position });
        },
    }

    Ok(Expression { operator,
                    first,
                    second })
}

/// Parses a primary (atomic) operand.
///
/// An operand is either a single-digit number literal or a nested
/// parenthesized expression. For a nested expression, the opening
/// parenthesis is left for [`parse_expression`] to consume.
///
/// Grammar: `primary := NUMBER | expression`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an operand.
///
/// # Returns
/// The parsed [`PrimaryExpression`].
///
/// # Errors
/// Returns a `ParseError` if the lookahead token starts neither a number nor
/// an expression, or if the stream has ended.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<PrimaryExpression>
    where I: Iterator<Item = (usize, &'a Token)>
{
    match tokens.peek() {
        Some((_, Token::Number(n))) => {
            let value = *n;
            tokens.next();
            Ok(PrimaryExpression::NumberLiteral(value))
        },
        Some((_, Token::ParenOpen)) => {
            let expression = parse_expression(tokens)?;
            Ok(PrimaryExpression::Nested(Box::new(expression)))
        },
        Some((position, token)) => {
            Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                              position: *position, })
        },
        None => {
            Err(ParseError::UnexpectedToken { token:    "end of input".to_string(),
                                              position: 0, })
        },
    }
}
