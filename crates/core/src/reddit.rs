//! Wire types for the Reddit JSON API and the pure transformations that turn
//! raw listings into normalized posts, subreddit summaries, and depth-bounded
//! comment trees.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder Reddit shows in place of removed or missing account names
pub const DELETED_AUTHOR: &str = "[deleted]";

/// Authority under which the API's relative permalinks live
pub const REDDIT_URL_BASE: &str = "https://www.reddit.com";

/// Listing envelope (`{"kind": "Listing", "data": {...}}`) from the Reddit API
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
    pub after: Option<String>,
    pub before: Option<String>,
}

/// A kind-tagged record (`{"kind": "t1", "data": {...}}`) from the Reddit API
///
/// Reddit keeps introducing record kinds, so anything not recognized here
/// must still parse. `Other` absorbs `more` comment stubs, award records,
/// and whatever the API grows next; it is never an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum Thing {
    #[serde(rename = "t1")]
    Comment(RawComment),
    #[serde(rename = "t3")]
    Submission(Box<RawSubmission>),
    #[serde(rename = "t5")]
    Subreddit(RawSubreddit),
    #[serde(other, deserialize_with = "ignore_contents")]
    Other,
}

/// Raw comment record (`t1`) as returned by the Reddit API
#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub id: String,
    pub author: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default, deserialize_with = "replies_or_none")]
    pub replies: Option<Listing>,
}

/// Raw submission record (`t3`) as returned by the Reddit API
///
/// `id` and `title` are deliberately non-optional: a payload without them is
/// malformed and must fail at the deserialization boundary instead of being
/// silently defaulted downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    #[serde(default)]
    pub score: i64,
    pub subreddit: String,
    pub permalink: String,
    #[serde(default)]
    pub url: String,
    pub created_utc: f64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub selftext: String,
    pub is_gallery: Option<bool>,
    pub poll_data: Option<serde_json::Value>,
}

/// Raw subreddit about record (`t5`) as returned by the Reddit API
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubreddit {
    pub display_name: String,
    #[serde(default)]
    pub subscribers: u64,
    pub public_description: Option<String>,
}

/// Unrecognized kinds still arrive with a `data` payload of their own;
/// discard it so the unit `Other` variant accepts the record instead of
/// rejecting it.
fn ignore_contents<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::de::IgnoredAny::deserialize(deserializer)?;
    Ok(())
}

/// Reddit sends the literal empty string (or nothing at all) in a comment's
/// `replies` field when there are no replies; only an actual listing counts.
fn replies_or_none<'de, D>(deserializer: D) -> Result<Option<Listing>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawReplies {
        Listing(Listing),
        Empty(serde::de::IgnoredAny),
    }

    Ok(match RawReplies::deserialize(deserializer)? {
        RawReplies::Listing(listing) => Some(listing),
        RawReplies::Empty(_) => None,
    })
}

/// Content kind of a normalized post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Link,
    Text,
    Gallery,
    Unknown,
}

impl PostKind {
    /// Same spelling the serialized form uses
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Link => "link",
            PostKind::Text => "text",
            PostKind::Gallery => "gallery",
            PostKind::Unknown => "unknown",
        }
    }
}

/// Normalized post output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub score: i64,
    pub subreddit: String,
    pub url: String,
    pub created_at: String,
    pub comment_count: u64,
    pub post_type: PostKind,
    pub content: Option<String>,
}

/// Normalized comment output with its materialized replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub score: i64,
    pub replies: Vec<Comment>,
}

/// Immutable subreddit summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubredditInfo {
    pub name: String,
    pub subscriber_count: u64,
    pub description: Option<String>,
}

/// A post together with its materialized comment forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Substitute the deleted-account placeholder for missing or empty authors
pub fn author_or_deleted(author: Option<&str>) -> String {
    match author {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DELETED_AUTHOR.to_string(),
    }
}

/// Classify a raw submission into one of the content kinds
///
/// The chain ends in a catch-all: the set of submission shapes on the
/// remote side is open-ended and an unrecognized one maps to `Unknown`
/// rather than failing normalization.
pub fn classify_submission(raw: &RawSubmission) -> PostKind {
    if raw.is_gallery.unwrap_or(false) {
        PostKind::Gallery
    } else if raw.poll_data.is_some() {
        // Polls carry selftext but are not plain text posts
        PostKind::Unknown
    } else if raw.is_self {
        PostKind::Text
    } else if !raw.url.is_empty() {
        PostKind::Link
    } else {
        PostKind::Unknown
    }
}

/// Canonical absolute URL of a submission
///
/// The API sends permalinks as paths; readers get full URLs.
pub fn permalink_url(raw: &RawSubmission) -> String {
    format!("{REDDIT_URL_BASE}{}", raw.permalink)
}

/// Kind-specific content payload for a submission
///
/// Link posts yield their canonical permalink, text posts their body (an
/// empty body is a valid result), gallery posts the gallery URL. Unknown
/// kinds have no content.
pub fn submission_content(raw: &RawSubmission) -> Option<String> {
    match classify_submission(raw) {
        PostKind::Link => Some(permalink_url(raw)),
        PostKind::Text => Some(raw.selftext.clone()),
        PostKind::Gallery => Some(raw.url.clone()),
        PostKind::Unknown => None,
    }
}

/// Convert epoch seconds from the API into a local-offset RFC 3339 string
pub fn format_created_at(created_utc: f64) -> String {
    let created = DateTime::<Utc>::from_timestamp(created_utc as i64, 0).unwrap_or_default();
    created
        .with_timezone(&Local)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Normalize one raw submission into a `Post`
pub fn build_post(raw: &RawSubmission) -> Post {
    Post {
        id: raw.id.clone(),
        title: raw.title.clone(),
        author: author_or_deleted(raw.author.as_deref()),
        score: raw.score,
        subreddit: raw.subreddit.clone(),
        url: permalink_url(raw),
        created_at: format_created_at(raw.created_utc),
        comment_count: raw.num_comments,
        post_type: classify_submission(raw),
        content: submission_content(raw),
    }
}

/// Map a subreddit about record to its immutable summary
pub fn build_subreddit_info(raw: &RawSubreddit) -> SubredditInfo {
    SubredditInfo {
        name: raw.display_name.clone(),
        subscriber_count: raw.subscribers,
        description: raw.public_description.clone(),
    }
}

/// Normalize the submissions of a listing into posts
///
/// Non-submission records (pinned notices, ads, future kinds) are skipped
/// before the cap is applied, so the result holds up to `limit` posts in
/// listing order.
pub fn collect_posts(listing: &Listing, limit: usize) -> Vec<Post> {
    listing
        .data
        .children
        .iter()
        .filter_map(|thing| match thing {
            Thing::Submission(raw) => Some(build_post(raw)),
            _ => None,
        })
        .take(limit)
        .collect()
}

/// Materialize a bounded-depth comment tree rooted at `node`
///
/// Returns `None` when the depth budget is exhausted or the node carries no
/// comment payload (`more` stubs, unknown kinds). Children that come back
/// absent are dropped from `replies` rather than kept as placeholders, so a
/// comment whose whole subtree lies past the bound ends up with empty
/// replies instead of an error.
pub fn build_comment_tree(node: &Thing, depth: usize) -> Option<Comment> {
    // The depth counter is the sole termination guarantee; check it before
    // looking at the node at all.
    if depth == 0 {
        return None;
    }

    let raw = match node {
        Thing::Comment(raw) => raw,
        _ => return None,
    };

    let replies = match &raw.replies {
        Some(listing) => listing
            .data
            .children
            .iter()
            .filter_map(|child| build_comment_tree(child, depth - 1))
            .collect(),
        None => Vec::new(),
    };

    Some(Comment {
        id: raw.id.clone(),
        author: author_or_deleted(raw.author.as_deref()),
        body: raw.body.clone(),
        score: raw.score,
        replies,
    })
}

/// Build every top-level comment of a fetched listing, preserving order and
/// dropping nodes the tree builder declined to produce
pub fn build_comment_forest(listing: &Listing, depth: usize) -> Vec<Comment> {
    listing
        .data
        .children
        .iter()
        .filter_map(|node| build_comment_tree(node, depth))
        .collect()
}
