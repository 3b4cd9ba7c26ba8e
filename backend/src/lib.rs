//! # DreamBerd Mathematics
//!
//! A small HTTP calculator service.
//!
//! A client posts `{"value1": <int>, "value2": <int>, "operation": "+"}` and
//! receives `{"result": <int>}`. Connections are handled strictly one at a
//! time: each is accepted, answered and closed before the next is taken.
//!
//! ## Architecture
//!
//! - [`models`]: the request-scoped [`models::Evaluation`] record and [`models::Operation`]
//! - [`services`]: the evaluator and its failure policy
//! - [`config`]: listener address and `Server` header identity
//! - [`http`]: JSON codec, axum handler and router, sequential accept loop
//!
//! ## Failure policy
//!
//! An unsupported operation or a zero divisor is logged and answered with
//! [`models::SENTINEL_RESULT`] and status 200. A body that is not a valid
//! evaluation is answered with 400.

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
