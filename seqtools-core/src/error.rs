use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqError {
    #[error("invalid input: {msg}")]
    InvalidInput { msg: &'static str },

    #[error("invalid motif pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),

    #[error("sequence length mismatch (left={left}, right={right})")]
    LengthMismatch { left: usize, right: usize },
}

pub type SeqResult<T> = Result<T, SeqError>;
