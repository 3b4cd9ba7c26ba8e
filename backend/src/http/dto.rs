//! Data Transfer Objects for the HTTP API.
//!
//! The request body decodes into an [`Evaluation`] and a finished evaluation
//! encodes into `{"result": <int>}`.

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::models::Evaluation;

/// Request body: two operands and an operation symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub value1: i32,
    pub value2: i32,
    pub operation: String,
}

impl From<EvaluationRequest> for Evaluation {
    fn from(request: EvaluationRequest) -> Self {
        Evaluation::new(request.value1, request.value2, request.operation)
    }
}

/// Response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub result: i32,
}

impl From<&Evaluation> for EvaluationResponse {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            result: evaluation.result,
        }
    }
}

/// Kind of decode failure, mirroring `serde_json`'s error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Not syntactically valid JSON.
    Syntax,
    /// Valid JSON of the wrong shape: missing field, wrong type, out of range.
    Data,
    /// Input ended before the JSON value was complete.
    Eof,
    Io,
}

impl From<Category> for DecodeErrorKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax => DecodeErrorKind::Syntax,
            Category::Data => DecodeErrorKind::Data,
            Category::Eof => DecodeErrorKind::Eof,
            Category::Io => DecodeErrorKind::Io,
        }
    }
}

/// The request body could not be turned into an [`Evaluation`].
#[derive(Debug, thiserror::Error)]
#[error("Invalid evaluation request at '{path}': {source}")]
pub struct DecodeError {
    /// JSON path of the offending value (`.` for the document root).
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        self.source.classify().into()
    }
}

/// Decode a request body into a fresh [`Evaluation`] with the sentinel result.
pub fn decode_evaluation(body: &[u8]) -> Result<Evaluation, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let request: EvaluationRequest = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| DecodeError {
            path: e.path().to_string(),
            source: e.into_inner(),
        })?;
    deserializer.end().map_err(|source| DecodeError {
        path: ".".to_string(),
        source,
    })?;

    Ok(request.into())
}

/// Encode a finished evaluation as the response body.
pub fn encode_evaluation(evaluation: &Evaluation) -> EvaluationResponse {
    EvaluationResponse::from(evaluation)
}
