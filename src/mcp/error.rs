//! Error types for the MCP transport
//!
//! Two layers: `McpError` becomes a JSON-RPC error object, `ToolError`
//! becomes a successful response whose tool result is flagged `isError`.

use thiserror::Error;

use crate::color::ColorError;

pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Protocol level failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum McpError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Method not found")]
    MethodNotFound,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// JSON-RPC error code for this error
    pub fn code(&self) -> i64 {
        match self {
            McpError::Parse(_) => PARSE_ERROR,
            McpError::MethodNotFound | McpError::UnknownTool(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::Internal(_) => INTERNAL_ERROR,
        }
    }

    pub(crate) fn internal(err: serde_json::Error) -> Self {
        McpError::Internal(err.to_string())
    }
}

pub type McpResult<T> = Result<T, McpError>;

/// Deserialization failures are always about request params
impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        McpError::InvalidParams(err.to_string())
    }
}

/// Failures of a single tool invocation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    #[error("{0} parameter is required and must be a string")]
    MissingString(&'static str),

    #[error("{0} parameter is required and must be an array")]
    MissingArray(&'static str),

    #[error("colors array cannot be empty")]
    EmptyBatch,

    #[error("color at index {0} is not a string")]
    NotAString(usize),

    #[error("color at index {0} is empty")]
    EmptyColor(usize),

    #[error("failed to detect input format: {0}")]
    Detection(#[source] ColorError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

pub type ToolResult<T> = Result<T, ToolError>;
