use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid token document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token `{from}` references `{reference}`, which does not exist")]
    UnresolvedReference { from: String, reference: String },

    #[error("circular reference: {}", chain.join(" -> "))]
    CircularReference { chain: Vec<String> },

    #[error("token `{token}` has an invalid `studio.tokens` modifier: {reason}")]
    InvalidModifier { token: String, reason: String },

    #[error("token `{token}` cannot be modified, `{value}` is not a color")]
    InvalidColor { token: String, value: String },
}
