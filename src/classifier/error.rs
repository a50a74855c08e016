use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Model bundle not found: {0:?}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode decoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Model bundle is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Weight vector has {weights} entries but vocabulary has {vocabulary} words")]
    DimensionMismatch { weights: usize, vocabulary: usize },

    #[error("Word {word:?} maps to index {index}, outside weight vector of length {len}")]
    IndexOutOfRange {
        word: String,
        index: usize,
        len: usize,
    },

    #[error("Words {first:?} and {second:?} share index {index}")]
    DuplicateIndex {
        first: String,
        second: String,
        index: usize,
    },

    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, LoadError>;
