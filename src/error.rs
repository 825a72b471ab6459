use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("paragraph does not match the timetable format:\n{0}")]
    MalformedParagraph(String),

    #[error("malformed date {0:?}, expected DD-Mon-YYYY")]
    MalformedDate(String),

    #[error("malformed time {0:?}, expected HH:MM")]
    MalformedTime(String),

    #[error("failed to read course name override: {0}")]
    Prompt(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
