#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid post id or URL: {0}")]
    InvalidPostId(String),

    #[error("Network error: {0}")]
    Network(String),
}
