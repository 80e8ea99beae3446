use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Size overflow in subtree: {name}")]
    SizeOverflow { name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
