//! Model Context Protocol server over stdio
//!
//! One JSON-RPC request per input line, one response per output line.

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{McpError, ToolError};
pub use server::{start_mcp_server, McpServer};
