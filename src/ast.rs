/// An abstract syntax tree (AST) node representing one operand of an
/// expression.
///
/// `PrimaryExpression` covers the two atomic positions the grammar allows an
/// operand to take: a single-digit number literal, or a nested parenthesized
/// expression. The nested variant boxes its expression so that operands can
/// recurse arbitrarily deep without making the type infinitely sized.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryExpression {
    /// A single-digit number literal in `0..=9`.
    NumberLiteral(i64),
    /// A nested sub-expression, owned exclusively by its parent node.
    Nested(Box<Expression>),
}

impl From<i64> for PrimaryExpression {
    fn from(value: i64) -> Self {
        Self::NumberLiteral(value)
    }
}

impl From<Expression> for PrimaryExpression {
    fn from(expression: Expression) -> Self {
        Self::Nested(Box::new(expression))
    }
}

/// An abstract syntax tree (AST) node representing a binary operation.
///
/// `Expression` is the only compound construct in the language: an operator
/// code applied to exactly two operands, in source order. The node owns both
/// children, so the parsed tree is always finite and acyclic. Expressions are
/// created during parsing, read recursively during evaluation, and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The operator code as it appeared in the source (currently only `"s"`
    /// carries a meaning).
    pub operator: String,
    /// First operand.
    pub first:    PrimaryExpression,
    /// Second operand.
    pub second:   PrimaryExpression,
}
