use thiserror::Error;

/// Everything that can abort a program run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Read of a name that was never declared.
    #[error("[ERR-RUN-001] Undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// Assignment to a name that was never declared.
    #[error("[ERR-RUN-002] Cannot assign to undefined variable: {name}")]
    AssignToUndefined { name: String },

    /// `lire` into a name that was never declared.
    #[error("[ERR-RUN-003] Cannot read into undefined variable: {name}")]
    ReadIntoUndefined { name: String },

    #[error("[ERR-RUN-004] Division by zero")]
    DivisionByZero,

    /// Operator applied to value kinds it has no rule for.
    #[error("[ERR-RUN-005] Unsupported operand types for {operator}: {left} and {right}")]
    UnsupportedOperands {
        operator: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// The input source ran dry while a `lire` was waiting.
    #[error("[ERR-RUN-006] No input available for variable: {name}")]
    InputExhausted { name: String },

    #[error("[ERR-RUN-007] Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
