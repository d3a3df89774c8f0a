#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Applied an operator that has no defined meaning.
    UnknownOperator {
        /// The operator code that was applied.
        operator: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { operator } => {
                write!(f, "Unknown operator '{operator}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
