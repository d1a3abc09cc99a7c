use crate::prelude::{println, *};
use colored::Colorize;
use redditools_core::reddit::{Listing, RawSubmission, RawSubreddit, Thing};
use regex::Regex;

pub mod comments;
pub mod info;
pub mod listing;
pub mod read;

// Re-export public data functions
pub use comments::post_comments_data;
pub use info::subreddit_info_data;
pub use listing::{frontpage_posts_data, subreddit_posts_data};
pub use read::post_content_data;

// Re-export domain types from core
pub use redditools_core::reddit::{Comment, Post, PostDetail, PostKind, SubredditInfo};

const REDDIT_API_BASE: &str = "https://www.reddit.com";
const USER_AGENT: &str = concat!("redditools/", env!("CARGO_PKG_VERSION"));

/// Comment listings are always requested in this order; the API default
/// varies per subreddit.
const COMMENT_SORT: &str = "top";

#[derive(Debug, clap::Parser)]
#[command(name = "reddit")]
#[command(about = "Reddit (www.reddit.com) operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the hot posts of the Reddit frontpage
    #[clap(name = "frontpage")]
    Frontpage(listing::FrontpageOptions),

    /// Show display information for a subreddit
    #[clap(name = "info")]
    Info(info::InfoOptions),

    /// List posts from a subreddit (hot, new, top, rising)
    #[clap(name = "posts")]
    Posts(listing::PostsOptions),

    /// Read a Reddit post together with its top comments
    #[clap(name = "read")]
    Read(read::ReadOptions),

    /// List the comment tree of a post
    #[clap(name = "comments")]
    Comments(comments::CommentsOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Reddit API Base: {}", REDDIT_API_BASE);
        println!();
    }

    match app.command {
        Commands::Frontpage(options) => listing::run_frontpage(options, global).await,
        Commands::Info(options) => info::run(options, global).await,
        Commands::Posts(options) => listing::run_posts(options, global).await,
        Commands::Read(options) => read::run(options, global).await,
        Commands::Comments(options) => comments::run(options, global).await,
    }
}

/// Sort orders a subreddit listing can be requested under
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSort {
    Hot,
    New,
    Top,
    Rising,
}

impl ListingSort {
    pub fn as_path(&self) -> &'static str {
        match self {
            ListingSort::Hot => "hot",
            ListingSort::New => "new",
            ListingSort::Top => "top",
            ListingSort::Rising => "rising",
        }
    }
}

pub fn extract_post_id(input: &str) -> Result<String> {
    // Bare id36, optionally carrying the t3_ fullname prefix
    let re = Regex::new(r"^(?:t3_)?([0-9a-z]+)$").unwrap();
    if let Some(caps) = re.captures(input) {
        if let Some(id) = caps.get(1) {
            return Ok(id.as_str().to_string());
        }
    }

    // Try to extract from a permalink URL
    let re = Regex::new(r"/comments/([0-9a-z]+)").unwrap();
    if let Some(caps) = re.captures(input) {
        if let Some(id) = caps.get(1) {
            return Ok(id.as_str().to_string());
        }
    }

    Err(Error::InvalidPostId(input.to_string()).into())
}

/// Read-only handle onto the public Reddit JSON API
///
/// Holds one HTTP client so keep-alive connections survive across calls;
/// the MCP server reuses a single instance for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Reddit {
    client: reqwest::Client,
}

impl Reddit {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        // raw_json stops the API from HTML-escaping body text
        let sep = if path.contains('?') { '&' } else { '?' };
        let url = f!("{REDDIT_API_BASE}{path}{sep}raw_json=1");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| eyre!("Failed to fetch {}: {}", path, e))?;

        if !response.status().is_success() {
            return Err(Error::Network(f!("GET {path} returned HTTP {}", response.status())).into());
        }

        response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse {}: {}", path, e))
    }

    pub async fn fetch_frontpage(&self, limit: usize) -> Result<Listing> {
        self.get_json(&f!("/hot.json?limit={limit}")).await
    }

    pub async fn fetch_subreddit_about(&self, subreddit: &str) -> Result<RawSubreddit> {
        let path = f!("/r/{}/about.json", urlencoding::encode(subreddit));
        let thing: Thing = self.get_json(&path).await?;

        match thing {
            Thing::Subreddit(raw) => Ok(raw),
            _ => Err(eyre!("r/{} did not return subreddit info", subreddit)),
        }
    }

    pub async fn fetch_subreddit_listing(
        &self,
        subreddit: &str,
        sort: ListingSort,
        limit: usize,
        time: Option<&str>,
    ) -> Result<Listing> {
        let mut path = f!(
            "/r/{}/{}.json?limit={limit}",
            urlencoding::encode(subreddit),
            sort.as_path()
        );
        if let Some(time) = time {
            path.push_str(&f!("&t={}", urlencoding::encode(time)));
        }

        self.get_json(&path).await
    }

    pub async fn fetch_submission(&self, id: &str) -> Result<RawSubmission> {
        let path = f!("/by_id/t3_{}.json", urlencoding::encode(id));
        let listing: Listing = self.get_json(&path).await?;

        match listing.data.children.into_iter().next() {
            Some(Thing::Submission(raw)) => Ok(*raw),
            _ => Err(eyre!("Post {} not found", id)),
        }
    }

    /// Fetch the comment listing of a post; the endpoint returns the post
    /// listing and the comment listing as a two-element array
    pub async fn fetch_comment_tree(&self, id: &str, limit: usize) -> Result<Listing> {
        let path = f!(
            "/comments/{}.json?sort={COMMENT_SORT}&limit={limit}",
            urlencoding::encode(id)
        );
        let (_post, comments): (Listing, Listing) = self.get_json(&path).await?;

        Ok(comments)
    }
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len).collect();
        format!("{truncated}...")
    }
}

/// Render one comment and its replies, indenting two spaces per level
pub fn push_comment_text(result: &mut String, comment: &Comment, label: &str, indent: usize) {
    let pad = "  ".repeat(indent);

    result.push_str(&format!(
        "\n{pad}{} {} {} ({}: {} | {}: {})\n",
        label.yellow().bold(),
        "by".bright_black(),
        comment.author.bright_white(),
        "Score".bright_black(),
        comment.score.to_string().bright_yellow(),
        "ID".bright_black(),
        comment.id.bright_white()
    ));

    let truncated = truncate_text(&comment.body, 500);
    for line in truncated.lines() {
        result.push_str(&format!("{pad}{}\n", line.white()));
    }

    for reply in &comment.replies {
        push_comment_text(result, reply, "└─", indent + 1);
    }
}
