//! HTTP handler for the calculator endpoint.
//!
//! There is a single request type, so every method and path lands here.

use axum::{body::Bytes, http::StatusCode, Json};
use tracing::{debug, warn};

use super::dto::{decode_evaluation, encode_evaluation, EvaluationResponse};
use super::error::AppError;
use crate::services::evaluator;

/// Result type for handlers.
pub type HandlerResult<T> = Result<(StatusCode, Json<T>), AppError>;

/// ANY /*
///
/// Decode the body, evaluate it and return `{"result": <int>}`.
///
/// Unsupported operations and division by zero still answer 200 with the
/// sentinel result; only an undecodable body is rejected (400).
pub async fn evaluate(body: Bytes) -> HandlerResult<EvaluationResponse> {
    debug!(body = %String::from_utf8_lossy(&body), "request received");

    let mut evaluation = decode_evaluation(&body).map_err(|err| {
        warn!(error = %err, "rejecting request body");
        err
    })?;
    if let Err(err) = evaluator::evaluate(&mut evaluation) {
        debug!(error = %err, result = evaluation.result, "answering with sentinel result");
    }

    let response = encode_evaluation(&evaluation);
    debug!(result = response.result, "response prepared");

    Ok((StatusCode::OK, Json(response)))
}
