mod cli;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::prelude::*;
use serde::{Deserialize, Serialize};

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// State shared by every request a transport serves
///
/// The Reddit handle is created once per server so its connection pool
/// survives across tool calls.
pub struct ServerState {
    pub global: crate::Global,
    pub reddit: crate::reddit::Reddit,
}

impl ServerState {
    pub fn new(global: crate::Global) -> Result<Self> {
        let reddit = crate::reddit::Reddit::new()?;
        Ok(Self { global, reddit })
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(global).await,
        cli::Commands::Sse(options) => sse::run_sse(options, global).await,
    }
}

pub async fn handle_request(request_str: &str, state: &ServerState) -> JsonRpcResponse {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: -32700,
                    message: format!("Parse error: {e}"),
                    data: None,
                }),
            };
        }
    };

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, state).await,
        method => Err(JsonRpcError {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }),
    };

    match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> ServerState {
        ServerState::new(crate::Global { verbose: false }).unwrap()
    }

    #[tokio::test]
    async fn test_handle_request_parse_error() {
        let state = test_state();
        let response = handle_request("this is not json", &state).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32700);
        assert!(response.id.is_none());
        assert!(response.result.is_none());
    }

    #[tokio::test]
    async fn test_handle_request_unknown_method() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 7, "method": "resources/list"}"#;
        let response = handle_request(request, &state).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert!(error.message.contains("resources/list"));
        assert_eq!(response.id, Some(serde_json::json!(7)));
    }

    #[tokio::test]
    async fn test_handle_request_initialize() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 1, "method": "initialize"}"#;
        let response = handle_request(request, &state).await;

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "redditools");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_handle_request_tools_list() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#;
        let response = handle_request(request, &state).await;

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "get_frontpage_posts",
                "get_subreddit_info",
                "get_subreddit_hot_posts",
                "get_subreddit_new_posts",
                "get_subreddit_top_posts",
                "get_subreddit_rising_posts",
                "get_post_content",
                "get_post_comments",
            ]
        );
    }

    #[tokio::test]
    async fn test_handle_request_tools_list_schemas() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 3, "method": "tools/list"}"#;
        let response = handle_request(request, &state).await;

        let result = response.result.unwrap();
        for tool in result["tools"].as_array().unwrap() {
            assert_eq!(tool["inputSchema"]["type"], "object");
            assert!(tool["inputSchema"]["properties"].is_object());
            assert!(tool["description"].as_str().unwrap().len() > 10);
        }
    }

    #[tokio::test]
    async fn test_handle_request_tools_call_unknown_tool() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 4, "method": "tools/call", "params": {"name": "get_upvotes"}}"#;
        let response = handle_request(request, &state).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("get_upvotes"));
    }

    #[tokio::test]
    async fn test_handle_request_tools_call_missing_params() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 5, "method": "tools/call"}"#;
        let response = handle_request(request, &state).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
    }

    #[tokio::test]
    async fn test_response_serialization_omits_empty_fields() {
        let state = test_state();
        let request = r#"{"jsonrpc": "2.0", "id": 6, "method": "initialize"}"#;
        let response = handle_request(request, &state).await;

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));

        let response = handle_request("broken", &state).await;
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\""));
        assert!(!json.contains("\"result\""));
    }
}
