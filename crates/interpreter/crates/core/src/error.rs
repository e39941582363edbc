//! The evaluator's closed error taxonomy.

use crate::types::Type;
use thiserror::Error;

/// Every way evaluation can fail.
///
/// Each variant is fatal to the `evaluate` call that raised it; the
/// evaluator never catches or retries one of its own errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Cannot read from `{0}` before assignment.")]
    UnboundVariable(String),

    #[error("Mismatched types for Assignment: Cannot assign `{new_type}` to `{existing_type}`")]
    AssignmentTypeMismatch {
        existing_type: Type,
        new_type: Type,
    },

    #[error("Mismatched types for {op}: `{left_type}` and `{right_type}`")]
    OperandTypeMismatch {
        op: &'static str,
        left_type: Type,
        right_type: Type,
    },

    #[error("Cannot {op} on type `{ty}`")]
    UnsupportedOperandType { op: &'static str, ty: Type },

    #[error("Expected Boolean for {context}, got `{ty}`")]
    NonBooleanCondition { context: &'static str, ty: Type },

    #[error("Cannot Divide by 0")]
    DivisionByZero,
}
