use crate::prelude::{println, *};
use colored::Colorize;
use redditools_core::reddit::{build_subreddit_info, SubredditInfo};

use super::Reddit;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct InfoOptions {
    /// Subreddit name, without the r/ prefix
    #[arg(value_name = "SUBREDDIT")]
    pub subreddit: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: InfoOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching r/{} info...", options.subreddit);
    }

    let reddit = Reddit::new()?;
    let info = subreddit_info_data(&reddit, &options.subreddit).await?;

    if options.json {
        output_json(&info)?;
    } else {
        output_formatted(&info)?;
    }

    Ok(())
}

/// Fetches display information for a subreddit
pub async fn subreddit_info_data(reddit: &Reddit, subreddit: &str) -> Result<SubredditInfo> {
    let raw = reddit.fetch_subreddit_about(subreddit).await?;
    Ok(build_subreddit_info(&raw))
}

/// Convert subreddit info to a JSON string
fn format_info_json(info: &SubredditInfo) -> Result<String> {
    serde_json::to_string_pretty(info).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert subreddit info to formatted text with colors
fn format_info_text(info: &SubredditInfo) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}: {}\n",
        "SUBREDDIT".bright_cyan().bold(),
        format!("r/{}", info.name).white().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "{}: {}\n",
        "Subscribers".green(),
        info.subscriber_count.to_string().bright_yellow()
    ));

    match &info.description {
        Some(description) if !description.is_empty() => {
            result.push_str(&format!("\n{}\n", description.bright_white()));
        }
        _ => {
            result.push_str(&format!("\n{}\n", "(no public description)".yellow()));
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{}:\n",
        "To list posts from this subreddit".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit posts {}", info.name).cyan()
    ));
    result.push_str(&format!(
        "  {}: {}\n",
        "Sorts".green(),
        "--sort <hot|new|top|rising>".cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("redditools reddit info {} --json", info.name).cyan()
    ));

    result.push('\n');
    result
}

fn output_json(info: &SubredditInfo) -> Result<()> {
    let json = format_info_json(info)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(info: &SubredditInfo) -> Result<()> {
    let formatted = format_info_text(info);
    print!("{}", formatted);
    Ok(())
}
