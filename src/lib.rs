pub mod config;
pub mod error;
pub mod parser;
pub mod timecode;
pub mod xml;

pub use config::{IndexConfig, TitleEnd, PRESET_NAMES};
pub use error::{ChapterizeError, Result};
pub use parser::{Chapter, ChapterParser};
