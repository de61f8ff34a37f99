use std::io;

use serde_json::{Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::ServerConfig;
use super::error::{McpError, McpResult};
use super::protocol::{
    CallToolParams, Capabilities, InitializeResult, Request, Response, ServerInfo,
};
use super::tools;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
    /// Client notifications that never get a reply
    Notification,
    Unknown,
}

impl From<&str> for Method {
    fn from(value: &str) -> Self {
        match value {
            "initialize" => Method::Initialize,
            "tools/list" => Method::ToolsList,
            "tools/call" => Method::ToolsCall,
            "notifications/initialized" | "notifications/cancelled" | "notifications/progress" => {
                Method::Notification
            }
            _ => Method::Unknown,
        }
    }
}

/// Line oriented MCP server. Holds no state between requests.
pub struct McpServer {
    config: ServerConfig,
}

impl McpServer {
    pub fn new(config: ServerConfig) -> Self {
        McpServer { config }
    }

    /// Handle one raw input line, `None` when nothing should be written
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        if line.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle_request(request),
            Err(e) => {
                log::warn!("Failed to parse request: {}", e);
                Some(Response::failure(None, &McpError::Parse(e.to_string())))
            }
        }
    }

    pub fn handle_request(&self, request: Request) -> Option<Response> {
        let method = Method::from(request.method.as_str());
        log::debug!("Received {} ({:?})", request.method, request.id);

        let outcome = match method {
            Method::Initialize => self.initialize(),
            Method::ToolsList => self.tools_list(),
            Method::ToolsCall => self.tools_call(request.params.clone()),
            Method::Notification => return None,
            Method::Unknown => {
                if request.is_notification() {
                    log::debug!("Ignoring unknown notification {}", request.method);
                    return None;
                }
                Err(McpError::MethodNotFound)
            }
        };

        Some(match outcome {
            Ok(result) => Response::success(request.id, result),
            Err(e) => {
                log::warn!("Request {} failed: {}", request.method, e);
                Response::failure(request.id, &e)
            }
        })
    }

    fn initialize(&self) -> McpResult<Value> {
        let result = InitializeResult {
            protocol_version: self.config.protocol_version.clone(),
            server_info: ServerInfo {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
            capabilities: Capabilities::default(),
        };
        log::info!("Client initialized, protocol {}", result.protocol_version);
        serde_json::to_value(result).map_err(McpError::internal)
    }

    fn tools_list(&self) -> McpResult<Value> {
        let tools = serde_json::to_value(tools::tool_definitions()).map_err(McpError::internal)?;
        let mut result = Map::new();
        result.insert("tools".to_string(), tools);
        Ok(Value::Object(result))
    }

    fn tools_call(&self, params: Option<Value>) -> McpResult<Value> {
        let params = params.ok_or_else(|| McpError::InvalidParams("missing params".to_string()))?;
        let params: CallToolParams = serde_json::from_value(params)?;
        let arguments = params.arguments.unwrap_or_else(Map::new);

        let result = tools::call_tool(&params.name, &arguments)?;
        serde_json::to_value(result).map_err(McpError::internal)
    }

    /// Serve requests until the reader reaches EOF
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(response) = self.handle_line(&line) else {
                continue;
            };

            match serde_json::to_string(&response) {
                Ok(json) => {
                    writer.write_all(json.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                }
                Err(e) => log::error!("Failed to serialize response: {}", e),
            }
        }

        log::info!("Input closed, stopping server");
        Ok(())
    }
}

/// Run the MCP server over the process stdin and stdout
pub async fn start_mcp_server(config: ServerConfig) -> io::Result<()> {
    log::info!("Starting {} {} on stdio", config.name, config.version);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    McpServer::new(config).run(stdin, stdout).await
}
