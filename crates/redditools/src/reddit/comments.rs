use crate::prelude::{println, *};
use colored::Colorize;
use redditools_core::reddit::{build_comment_forest, Comment};

use super::{extract_post_id, push_comment_text, Reddit};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CommentsOptions {
    /// Post id, fullname, or full URL
    #[clap(env = "REDDIT_POST")]
    pub post: String,

    /// Number of top-level comments to return
    #[arg(short, long, env = "REDDIT_COMMENT_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Maximum comment nesting depth
    #[arg(short, long, env = "REDDIT_COMMENT_DEPTH", default_value = "3")]
    pub depth: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: CommentsOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching comments for post: {}", options.post);
    }

    let reddit = Reddit::new()?;
    let post_id = extract_post_id(&options.post)?;
    let comments = post_comments_data(&reddit, &options.post, options.limit, options.depth).await?;

    if options.json {
        output_json(&comments)?;
    } else {
        output_formatted(&comments, &post_id)?;
    }

    Ok(())
}

/// Fetches the comment tree of a post as normalized comments
pub async fn post_comments_data(
    reddit: &Reddit,
    post: &str,
    limit: usize,
    depth: usize,
) -> Result<Vec<Comment>> {
    let post_id = extract_post_id(post)?;
    let listing = reddit.fetch_comment_tree(&post_id, limit).await?;

    Ok(build_comment_forest(&listing, depth)
        .into_iter()
        .take(limit)
        .collect())
}

/// Convert a comment listing to a JSON string
fn format_comments_json(comments: &[Comment]) -> Result<String> {
    serde_json::to_string_pretty(comments).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a comment listing to formatted text with colors
fn format_comments_text(comments: &[Comment], post_id: &str) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_magenta()));
    result.push_str(&format!(
        "{} ({} {})\n",
        "POST COMMENTS".bright_magenta().bold(),
        comments.len().to_string().bright_cyan().bold(),
        "top-level".bright_white()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));

    if comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments.".yellow()));
    } else {
        for (idx, comment) in comments.iter().enumerate() {
            push_comment_text(&mut result, comment, &format!("[Comment #{}]", idx + 1), 0);
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{}:\n",
        "To read the post itself".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit read {post_id}").cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To fetch more comments".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit comments {post_id} --limit <number>").cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To go deeper into threads".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit comments {post_id} --depth <number>").cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit comments {post_id} --json").cyan()
    ));

    result.push('\n');
    result
}

fn output_json(comments: &[Comment]) -> Result<()> {
    let json = format_comments_json(comments)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(comments: &[Comment], post_id: &str) -> Result<()> {
    let formatted = format_comments_text(comments, post_id);
    print!("{}", formatted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment(id: &str, author: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            id: id.to_string(),
            author: author.to_string(),
            body: format!("Comment body of {}", id),
            score: 5,
            replies,
        }
    }

    #[test]
    fn test_format_comments_json_basic() {
        let comments = vec![create_test_comment("c1", "alice", vec![])];

        let json = format_comments_json(&comments).unwrap();

        assert!(json.contains("\"id\": \"c1\""));
        assert!(json.contains("\"author\": \"alice\""));
        assert!(json.contains("\"replies\": []"));
    }

    #[test]
    fn test_format_comments_json_nested() {
        let child = create_test_comment("c2", "bob", vec![]);
        let comments = vec![create_test_comment("c1", "alice", vec![child])];

        let json = format_comments_json(&comments).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["replies"][0]["id"], "c2");
        assert_eq!(parsed[0]["replies"][0]["author"], "bob");
    }

    #[test]
    fn test_format_comments_json_empty() {
        let json = format_comments_json(&[]).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_format_comments_json_preserves_order() {
        let comments = vec![
            create_test_comment("first", "u1", vec![]),
            create_test_comment("second", "u2", vec![]),
            create_test_comment("third", "u3", vec![]),
        ];

        let json = format_comments_json(&comments).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let ids: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_format_comments_text_basic() {
        let comments = vec![
            create_test_comment("c1", "alice", vec![]),
            create_test_comment("c2", "bob", vec![]),
        ];

        let formatted = format_comments_text(&comments, "1abc23");

        assert!(formatted.contains("POST COMMENTS"));
        assert!(formatted.contains("[Comment #1]"));
        assert!(formatted.contains("[Comment #2]"));
        assert!(formatted.contains("alice"));
        assert!(formatted.contains("bob"));
    }

    #[test]
    fn test_format_comments_text_nested() {
        let child = create_test_comment("c2", "bob", vec![]);
        let comments = vec![create_test_comment("c1", "alice", vec![child])];

        let formatted = format_comments_text(&comments, "1abc23");

        assert!(formatted.contains("└─"));
        assert!(formatted.contains("Comment body of c2"));
    }

    #[test]
    fn test_format_comments_text_empty() {
        let formatted = format_comments_text(&[], "1abc23");

        assert!(formatted.contains("No comments."));
    }

    #[test]
    fn test_format_comments_text_navigation() {
        let formatted = format_comments_text(&[], "1abc23");

        assert!(formatted.contains("NAVIGATION"));
        assert!(formatted.contains("To read the post itself"));
        assert!(formatted.contains("redditools reddit read 1abc23"));
        assert!(formatted.contains("redditools reddit comments 1abc23 --limit <number>"));
        assert!(formatted.contains("redditools reddit comments 1abc23 --depth <number>"));
        assert!(formatted.contains("redditools reddit comments 1abc23 --json"));
    }
}
