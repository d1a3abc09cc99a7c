mod reddit;

use serde::{Deserialize, Serialize};

use crate::reddit::ListingSort;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, ServerState, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "redditools".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "get_frontpage_posts".to_string(),
            description: "Get hot posts from the Reddit frontpage. Returns posts with id, title, author, score, subreddit, comment count, creation time, post type (link, text, gallery, unknown), and type-specific content.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "number",
                        "description": "Number of posts to return (default: 10)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "get_subreddit_info".to_string(),
            description: "Get display information for a subreddit: name, subscriber count, and public description.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit_name": {
                        "type": "string",
                        "description": "Name of the subreddit, without the r/ prefix"
                    }
                },
                "required": ["subreddit_name"]
            }),
        },
        Tool {
            name: "get_subreddit_hot_posts".to_string(),
            description: "Get hot posts from a specific subreddit. Returns the same normalized post records as get_frontpage_posts.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit_name": {
                        "type": "string",
                        "description": "Name of the subreddit, without the r/ prefix"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of posts to return (default: 10)"
                    }
                },
                "required": ["subreddit_name"]
            }),
        },
        Tool {
            name: "get_subreddit_new_posts".to_string(),
            description: "Get the newest posts from a specific subreddit, most recent first.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit_name": {
                        "type": "string",
                        "description": "Name of the subreddit, without the r/ prefix"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of posts to return (default: 10)"
                    }
                },
                "required": ["subreddit_name"]
            }),
        },
        Tool {
            name: "get_subreddit_top_posts".to_string(),
            description: "Get top posts from a specific subreddit, optionally restricted to a time window.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit_name": {
                        "type": "string",
                        "description": "Name of the subreddit, without the r/ prefix"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of posts to return (default: 10)"
                    },
                    "time": {
                        "type": "string",
                        "description": "Time window for the top listing (default: all)",
                        "enum": ["hour", "day", "week", "month", "year", "all"]
                    }
                },
                "required": ["subreddit_name"]
            }),
        },
        Tool {
            name: "get_subreddit_rising_posts".to_string(),
            description: "Get rising posts from a specific subreddit.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "subreddit_name": {
                        "type": "string",
                        "description": "Name of the subreddit, without the r/ prefix"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of posts to return (default: 10)"
                    }
                },
                "required": ["subreddit_name"]
            }),
        },
        Tool {
            name: "get_post_content".to_string(),
            description: "Get the full content of a post, including its top comments as nested reply trees.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "post_id": {
                        "type": "string",
                        "description": "Post id (e.g. '1abc23'), t3_ fullname, or full post URL"
                    },
                    "comment_limit": {
                        "type": "number",
                        "description": "Number of top-level comments to include (default: 10)"
                    },
                    "comment_depth": {
                        "type": "number",
                        "description": "Maximum depth of nested replies (default: 3)"
                    }
                },
                "required": ["post_id"]
            }),
        },
        Tool {
            name: "get_post_comments".to_string(),
            description: "Get the comment trees of a post without the post body itself.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "post_id": {
                        "type": "string",
                        "description": "Post id (e.g. '1abc23'), t3_ fullname, or full post URL"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of top-level comments to return (default: 10)"
                    },
                    "depth": {
                        "type": "number",
                        "description": "Maximum depth of nested replies (default: 3)"
                    }
                },
                "required": ["post_id"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "get_frontpage_posts" => reddit::handle_frontpage_posts(params.arguments, state).await,
        "get_subreddit_info" => reddit::handle_subreddit_info(params.arguments, state).await,
        "get_subreddit_hot_posts" => {
            reddit::handle_subreddit_posts(params.arguments, state, ListingSort::Hot).await
        }
        "get_subreddit_new_posts" => {
            reddit::handle_subreddit_posts(params.arguments, state, ListingSort::New).await
        }
        "get_subreddit_top_posts" => {
            reddit::handle_subreddit_posts(params.arguments, state, ListingSort::Top).await
        }
        "get_subreddit_rising_posts" => {
            reddit::handle_subreddit_posts(params.arguments, state, ListingSort::Rising).await
        }
        "get_post_content" => reddit::handle_post_content(params.arguments, state).await,
        "get_post_comments" => reddit::handle_post_comments(params.arguments, state).await,
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}
