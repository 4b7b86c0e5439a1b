use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChapterizeError {
    #[error("Unrecognized time format: '{0}' (expected MM:SS or HH:MM:SS)")]
    UnrecognizedTime(String),

    #[error("Unknown config preset: '{0}'. Valid presets are: {1}")]
    UnknownPreset(String, String),

    #[error("Invalid index argument: '{0}'")]
    InvalidIndex(String),

    #[error("Line {line}: no token at index {index}")]
    TokenIndexOutOfBounds { line: usize, index: i32 },

    #[error("Input contains no chapter lines")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, ChapterizeError>;
