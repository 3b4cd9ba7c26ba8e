//! Service layer for business logic.
//!
//! Services are stateless and know nothing about HTTP; the handlers in
//! [`crate::http`] decode requests and delegate here.

pub mod evaluator;


pub use evaluator::{evaluate, EvaluationError, EvaluationResult, Evaluator};
