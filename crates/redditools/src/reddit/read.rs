use crate::prelude::{println, *};
use colored::Colorize;
use redditools_core::reddit::{build_comment_forest, build_post, Comment, PostDetail};

use super::{extract_post_id, push_comment_text, Reddit};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReadOptions {
    /// Post id, fullname, or full URL (e.g. "1abc23", "t3_1abc23" or "https://www.reddit.com/r/rust/comments/1abc23/title/")
    #[clap(env = "REDDIT_POST")]
    pub post: String,

    /// Number of top-level comments to include
    #[arg(short = 'l', long, env = "REDDIT_COMMENT_LIMIT", default_value = "10")]
    pub comment_limit: usize,

    /// Maximum comment nesting depth
    #[arg(short = 'd', long, env = "REDDIT_COMMENT_DEPTH", default_value = "3")]
    pub comment_depth: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching post: {}", options.post);
    }

    let reddit = Reddit::new()?;
    let detail = post_content_data(
        &reddit,
        &options.post,
        options.comment_limit,
        options.comment_depth,
    )
    .await?;

    if options.json {
        output_json(&detail)?;
    } else {
        output_formatted(&detail)?;
    }

    Ok(())
}

/// Fetches a post and its top comments as one detail record
pub async fn post_content_data(
    reddit: &Reddit,
    post: &str,
    comment_limit: usize,
    comment_depth: usize,
) -> Result<PostDetail> {
    let post_id = extract_post_id(post)?;

    let submission = reddit.fetch_submission(&post_id).await?;
    let listing = reddit.fetch_comment_tree(&post_id, comment_limit).await?;

    let comments: Vec<Comment> = build_comment_forest(&listing, comment_depth)
        .into_iter()
        .take(comment_limit)
        .collect();

    Ok(PostDetail {
        post: build_post(&submission),
        comments,
    })
}

/// Convert a post detail to a JSON string
fn format_detail_json(detail: &PostDetail) -> Result<String> {
    serde_json::to_string_pretty(detail).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a post detail to formatted text with colors
fn format_detail_text(detail: &PostDetail) -> String {
    let post = &detail.post;
    let mut result = String::new();

    // Post header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}: {}\n",
        "POST".bright_cyan().bold(),
        post.title.white().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "{}: {}\n",
        "URL".green(),
        post.url.cyan().underline()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Author".green(),
        post.author.bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Score".green(),
        post.score.to_string().bright_yellow()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Posted".green(),
        post.created_at.bright_black()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Comments".green(),
        post.comment_count.to_string().bright_magenta()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Subreddit".green(),
        format!("r/{}", post.subreddit).bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Type".green(),
        post.post_type.as_str().bright_cyan()
    ));
    result.push_str(&format!("{}: {}\n", "ID".green(), post.id.bright_white()));

    // Link posts repeat the permalink as their content
    if let Some(content) = &post.content {
        if !content.is_empty() && *content != post.url {
            result.push_str(&format!("\n{}\n", content.bright_white()));
        }
    }

    // Comments section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_magenta()));
    result.push_str(&format!(
        "{} ({} {})\n",
        "COMMENTS".bright_magenta().bold(),
        detail.comments.len().to_string().bright_cyan().bold(),
        "top-level".bright_white()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));

    if detail.comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments.".yellow()));
    } else {
        for (idx, comment) in detail.comments.iter().enumerate() {
            push_comment_text(&mut result, comment, &format!("[Comment #{}]", idx + 1), 0);
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{}:\n",
        "To list only the comments".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit comments {}", post.id).cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To fetch more comments".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit read {} --comment-limit <number>", post.id).cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To go deeper into threads".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit read {} --comment-depth <number>", post.id).cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit read {} --json", post.id).cyan()
    ));

    result.push('\n');
    result
}

fn output_json(detail: &PostDetail) -> Result<()> {
    let json = format_detail_json(detail)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(detail: &PostDetail) -> Result<()> {
    let formatted = format_detail_text(detail);
    print!("{}", formatted);
    Ok(())
}
