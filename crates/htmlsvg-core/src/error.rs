use crate::dom::selector::SelectorError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed document markup: {message}")]
    Markup { message: String },

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("Invalid render options: {0}")]
    Options(#[from] serde_json::Error),
}
