//! Color MCP Library
//!
//! Detects, converts and compares web color notations, and serves those
//! operations as tools over the Model Context Protocol on stdio.

pub mod color;
pub mod config;
pub mod logging;
pub mod mcp;
