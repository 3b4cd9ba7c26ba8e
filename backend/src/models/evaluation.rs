//! Request-scoped evaluation record and the closed set of operations.

use std::fmt;
use std::str::FromStr;

/// Placeholder result for any evaluation that could not be computed.
pub const SENTINEL_RESULT: i32 = 0;

/// Two operands, an operation symbol and the computed result.
///
/// `operation` keeps the raw symbol from the request so that an unknown
/// symbol still decodes and is rejected by the evaluator instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value1: i32,
    pub value2: i32,
    pub operation: String,
    /// Holds [`SENTINEL_RESULT`] until an evaluation succeeds.
    pub result: i32,
}

impl Evaluation {
    pub fn new(value1: i32, value2: i32, operation: impl Into<String>) -> Self {
        Self {
            value1,
            value2,
            operation: operation.into(),
            result: SENTINEL_RESULT,
        }
    }
}

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Wire symbol for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a symbol is not one of `+ - * /`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation symbol '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}
