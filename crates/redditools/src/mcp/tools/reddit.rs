use crate::prelude::{eprintln, *};
use serde::Deserialize;

use crate::reddit::ListingSort;

use super::{CallToolResult, Content, JsonRpcError, ServerState};

/// Serialize a tool result the way MCP expects: pretty JSON inside a single
/// text content block
fn wrap_result<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(data).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_frontpage_posts(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct FrontpagePostsArgs {
        limit: Option<usize>,
    }

    let args: FrontpagePostsArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({}))).map_err(
            |e| JsonRpcError {
                code: -32602,
                message: format!("Invalid arguments: {e}"),
                data: None,
            },
        )?;

    if state.global.verbose {
        eprintln!("Calling get_frontpage_posts: limit={:?}", args.limit);
    }

    let posts = crate::reddit::frontpage_posts_data(&state.reddit, args.limit.unwrap_or(10))
        .await
        .map_err(|e| JsonRpcError {
            code: -32603,
            message: format!("Tool execution error: {e}"),
            data: None,
        })?;

    wrap_result(&posts)
}

pub async fn handle_subreddit_info(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SubredditInfoArgs {
        subreddit_name: String,
    }

    let args: SubredditInfoArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({}))).map_err(
            |e| JsonRpcError {
                code: -32602,
                message: format!("Invalid arguments: {e}"),
                data: None,
            },
        )?;

    if state.global.verbose {
        eprintln!(
            "Calling get_subreddit_info: subreddit={}",
            args.subreddit_name
        );
    }

    let info = crate::reddit::subreddit_info_data(&state.reddit, &args.subreddit_name)
        .await
        .map_err(|e| JsonRpcError {
            code: -32603,
            message: format!("Tool execution error: {e}"),
            data: None,
        })?;

    wrap_result(&info)
}

pub async fn handle_subreddit_posts(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
    sort: ListingSort,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SubredditPostsArgs {
        subreddit_name: String,
        limit: Option<usize>,
        time: Option<String>,
    }

    let args: SubredditPostsArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({}))).map_err(
            |e| JsonRpcError {
                code: -32602,
                message: format!("Invalid arguments: {e}"),
                data: None,
            },
        )?;

    if state.global.verbose {
        eprintln!(
            "Calling get_subreddit_{}_posts: subreddit={}, limit={:?}, time={:?}",
            sort.as_path(),
            args.subreddit_name,
            args.limit,
            args.time
        );
    }

    let posts = crate::reddit::subreddit_posts_data(
        &state.reddit,
        &args.subreddit_name,
        sort,
        args.limit.unwrap_or(10),
        args.time.as_deref(),
    )
    .await
    .map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Tool execution error: {e}"),
        data: None,
    })?;

    wrap_result(&posts)
}

pub async fn handle_post_content(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PostContentArgs {
        post_id: String,
        comment_limit: Option<usize>,
        comment_depth: Option<usize>,
    }

    let args: PostContentArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({}))).map_err(
            |e| JsonRpcError {
                code: -32602,
                message: format!("Invalid arguments: {e}"),
                data: None,
            },
        )?;

    if state.global.verbose {
        eprintln!(
            "Calling get_post_content: post_id={}, comment_limit={:?}, comment_depth={:?}",
            args.post_id, args.comment_limit, args.comment_depth
        );
    }

    let detail = crate::reddit::post_content_data(
        &state.reddit,
        &args.post_id,
        args.comment_limit.unwrap_or(10),
        args.comment_depth.unwrap_or(3),
    )
    .await
    .map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Tool execution error: {e}"),
        data: None,
    })?;

    wrap_result(&detail)
}

pub async fn handle_post_comments(
    arguments: Option<serde_json::Value>,
    state: &ServerState,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PostCommentsArgs {
        post_id: String,
        limit: Option<usize>,
        depth: Option<usize>,
    }

    let args: PostCommentsArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({}))).map_err(
            |e| JsonRpcError {
                code: -32602,
                message: format!("Invalid arguments: {e}"),
                data: None,
            },
        )?;

    if state.global.verbose {
        eprintln!(
            "Calling get_post_comments: post_id={}, limit={:?}, depth={:?}",
            args.post_id, args.limit, args.depth
        );
    }

    let comments = crate::reddit::post_comments_data(
        &state.reddit,
        &args.post_id,
        args.limit.unwrap_or(10),
        args.depth.unwrap_or(3),
    )
    .await
    .map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Tool execution error: {e}"),
        data: None,
    })?;

    wrap_result(&comments)
}
