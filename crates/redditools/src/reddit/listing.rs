use crate::prelude::{println, *};
use colored::Colorize;
use redditools_core::reddit::{collect_posts, Post};

use super::{ListingSort, Reddit};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FrontpageOptions {
    /// Number of posts to return
    #[arg(short, long, env = "REDDIT_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PostsOptions {
    /// Subreddit name, without the r/ prefix
    #[arg(value_name = "SUBREDDIT")]
    pub subreddit: String,

    /// Listing sort order
    #[arg(short, long, value_enum, default_value = "hot")]
    pub sort: ListingSort,

    /// Number of posts to return
    #[arg(short, long, env = "REDDIT_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Time window for top listings (hour, day, week, month, year, all)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_frontpage(options: FrontpageOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching frontpage posts...");
    }

    let reddit = Reddit::new()?;
    let posts = frontpage_posts_data(&reddit, options.limit).await?;

    if options.json {
        output_json(&posts)?;
    } else {
        output_formatted(&posts, "REDDIT FRONTPAGE HOT POSTS", "redditools reddit frontpage")?;
    }

    Ok(())
}

pub async fn run_posts(options: PostsOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Fetching r/{} {} posts...",
            options.subreddit,
            options.sort.as_path()
        );
    }

    let reddit = Reddit::new()?;
    let posts = subreddit_posts_data(
        &reddit,
        &options.subreddit,
        options.sort,
        options.limit,
        options.time.as_deref(),
    )
    .await?;

    if options.json {
        output_json(&posts)?;
    } else {
        let heading = f!(
            "r/{} {} POSTS",
            options.subreddit,
            options.sort.as_path().to_uppercase()
        );
        let base_command = f!("redditools reddit posts {}", options.subreddit);
        output_formatted(&posts, &heading, &base_command)?;
    }

    Ok(())
}

/// Fetches the frontpage hot listing and returns it as normalized posts
pub async fn frontpage_posts_data(reddit: &Reddit, limit: usize) -> Result<Vec<Post>> {
    let listing = reddit.fetch_frontpage(limit).await?;
    Ok(collect_posts(&listing, limit))
}

/// Fetches a subreddit listing under the given sort order and returns it as
/// normalized posts
pub async fn subreddit_posts_data(
    reddit: &Reddit,
    subreddit: &str,
    sort: ListingSort,
    limit: usize,
    time: Option<&str>,
) -> Result<Vec<Post>> {
    let listing = reddit
        .fetch_subreddit_listing(subreddit, sort, limit, time)
        .await?;
    Ok(collect_posts(&listing, limit))
}

/// Convert a post listing to a JSON string
fn format_posts_json(posts: &[Post]) -> Result<String> {
    serde_json::to_string_pretty(posts).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a post listing to formatted text with colors
fn format_posts_text(posts: &[Post], heading: &str, base_command: &str) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", heading.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if posts.is_empty() {
        result.push_str(&format!("\n{}\n", "No posts in this listing.".yellow()));
    } else {
        for (idx, post) in posts.iter().enumerate() {
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                post.title.white().bold()
            ));

            result.push_str(&format!(
                "    {}: {}\n",
                "URL".green(),
                post.url.cyan().underline()
            ));

            result.push_str(&format!(
                "    {}: {} | {}: {} | {}: {} | {}: {}\n",
                "By".green(),
                post.author.bright_white(),
                "Score".green(),
                post.score.to_string().bright_yellow(),
                "Comments".green(),
                post.comment_count.to_string().bright_magenta(),
                "Posted".green(),
                post.created_at.bright_black()
            ));

            result.push_str(&format!(
                "    {}: {} | {}: {}\n",
                "Subreddit".green(),
                format!("r/{}", post.subreddit).bright_white(),
                "Type".green(),
                post.post_type.as_str().bright_cyan()
            ));

            result.push_str(&format!(
                "    {}: {} | {}: {}\n",
                "ID".green(),
                post.id.bright_white(),
                "Read".green(),
                format!("redditools reddit read {}", post.id).cyan()
            ));
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{}:\n",
        "To read a post with its comments".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "redditools reddit read <id>".cyan()));
    if !posts.is_empty() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("redditools reddit read {}", posts[0].id).cyan()
        ));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To change the listing size".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("{base_command} --limit <number>").cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To list a subreddit under another sort".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        "redditools reddit posts <subreddit> --sort <hot|new|top|rising>".cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", format!("{base_command} --json").cyan()));

    result.push('\n');
    result
}

fn output_json(posts: &[Post]) -> Result<()> {
    let json = format_posts_json(posts)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(posts: &[Post], heading: &str, base_command: &str) -> Result<()> {
    let formatted = format_posts_text(posts, heading, base_command);
    print!("{}", formatted);
    Ok(())
}
