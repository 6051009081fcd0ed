//! Errors surfaced at the boundaries of the pipeline.
//!
//! The transformation itself never fails; only decoding inputs and reading
//! plugin parameters can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to decode protobuf message: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to parse descriptor set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid plugin parameter `{parameter}`: {message}")]
    InvalidParameter { parameter: String, message: String },
}
