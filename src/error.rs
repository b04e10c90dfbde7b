use thiserror::Error;

/// Recoverable conditions surfaced by the grading core. Nothing here is
/// retryable; callers decide whether to warn, abort, or fall back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("extraction text is empty")]
    EmptyExtraction,

    #[error("no answer markers of the form \"(<digits>)\" found in extraction text")]
    NoAnswerMarkers,

    #[error("answer key has {key_len} entries but response has {response_len}")]
    LengthMismatch { key_len: usize, response_len: usize },

    #[error("answer key has {found} entries but the exam expects {expected}")]
    KeyCountMismatch { expected: usize, found: usize },

    #[error("invalid exam configuration: {0}")]
    InvalidConfig(String),
}
