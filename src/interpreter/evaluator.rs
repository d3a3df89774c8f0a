use crate::{
    ast::{Expression, PrimaryExpression},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting number.
///
/// This is the main entry point for evaluation. Both operands are evaluated
/// first, in source order, and the operator is then applied to their values.
/// The parser accepts any operator code syntactically; this function is the
/// sole authority on which codes carry a meaning.
///
/// Addition uses native `i64` semantics.
///
/// # Parameters
/// - `expression`: Expression to evaluate.
///
/// # Returns
/// The computed value of the expression.
///
/// # Errors
/// Returns `RuntimeError::UnknownOperator` if the expression's operator code
/// is not recognized.
pub fn eval(expression: &Expression) -> EvalResult<i64> {
    let first = eval_primary(&expression.first)?;
    let second = eval_primary(&expression.second)?;

    match expression.operator.as_str() {
        "s" => Ok(first + second),
        operator => Err(RuntimeError::UnknownOperator { operator: operator.to_string() }),
    }
}

/// Evaluates a single operand.
///
/// Number literals evaluate to their own value; nested operands unwind into
/// [`eval`] recursively.
///
/// # Parameters
/// - `primary`: Operand to evaluate.
///
/// # Returns
/// The computed value of the operand.
pub fn eval_primary(primary: &PrimaryExpression) -> EvalResult<i64> {
    match primary {
        PrimaryExpression::NumberLiteral(value) => Ok(*value),
        PrimaryExpression::Nested(expression) => eval(expression),
    }
}
