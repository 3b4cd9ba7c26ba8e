//! Arithmetic evaluation of a decoded [`Evaluation`].
//!
//! Every exit path leaves `result` at a defined value: the computed number on
//! success, [`SENTINEL_RESULT`] on failure. Failures are returned as values and
//! logged; nothing here panics. Arithmetic follows fixed-width two's-complement
//! wraparound, so overflow is never a fault.

use tracing::{debug, warn};

use crate::models::{Evaluation, Operation, SENTINEL_RESULT};

/// Outcome of an evaluation.
pub type EvaluationResult = Result<i32, EvaluationError>;

/// Domain failures of the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// The operation symbol is not one of `+ - * /`.
    #[error("Operation {operation} not supported")]
    UnsupportedOperation { operation: String },

    /// Division with a zero divisor.
    #[error("Division by zero: {dividend} / 0")]
    DivideByZero { dividend: i32 },
}

/// Stateless evaluator service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// See [`evaluate`].
    pub fn evaluate(&self, evaluation: &mut Evaluation) -> EvaluationResult {
        evaluate(evaluation)
    }
}

/// Compute `evaluation.result` from its operands and operation symbol.
///
/// The result is reset to [`SENTINEL_RESULT`] before dispatch and only
/// overwritten on success.
pub fn evaluate(evaluation: &mut Evaluation) -> EvaluationResult {
    evaluation.result = SENTINEL_RESULT;

    let outcome = evaluation
        .operation
        .parse::<Operation>()
        .map_err(|e| EvaluationError::UnsupportedOperation { operation: e.0 })
        .and_then(|op| apply(op, evaluation.value1, evaluation.value2));

    match &outcome {
        Ok(result) => {
            evaluation.result = *result;
            debug!(
                value1 = evaluation.value1,
                value2 = evaluation.value2,
                operation = %evaluation.operation,
                result = *result,
                "evaluation computed"
            );
        }
        Err(err) => {
            warn!(
                value1 = evaluation.value1,
                value2 = evaluation.value2,
                operation = %evaluation.operation,
                "{}",
                err
            );
        }
    }

    outcome
}

/// Apply a validated operation to two operands.
pub fn apply(op: Operation, lhs: i32, rhs: i32) -> EvaluationResult {
    match op {
        Operation::Add => Ok(lhs.wrapping_add(rhs)),
        Operation::Subtract => Ok(lhs.wrapping_sub(rhs)),
        Operation::Multiply => Ok(lhs.wrapping_mul(rhs)),
        Operation::Divide => {
            if rhs == 0 {
                return Err(EvaluationError::DivideByZero { dividend: lhs });
            }
            // Truncates toward zero; i32::MIN / -1 wraps to i32::MIN.
            Ok(lhs.wrapping_div(rhs))
        }
    }
}
