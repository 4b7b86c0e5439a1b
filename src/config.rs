use crate::error::{ChapterizeError, Result};

/// Upper bound of the title token range.
///
/// `ToEnd` means "join to the end of the line's tokens". It is a distinct
/// variant rather than a sentinel so it can never be confused with an
/// explicit index of 0 or any positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleEnd {
    Index(i32),
    ToEnd,
}

impl std::fmt::Display for TitleEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleEnd::Index(i) => write!(f, "{}", i),
            TitleEnd::ToEnd => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for TitleEnd {
    type Err = ChapterizeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("none") {
            Ok(TitleEnd::ToEnd)
        } else {
            s.parse::<i32>()
                .map(TitleEnd::Index)
                .map_err(|_| ChapterizeError::InvalidIndex(s.to_string()))
        }
    }
}

/// Describes how to slice a line's whitespace-split tokens: which token is
/// the timestamp and which range is the title. Indices may be negative and
/// count from the end of the line, -1 being the last token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    pub time_index: i32,
    pub title_start: i32,
    pub title_end: TitleEnd,
}

/// Names of the built-in presets, in lookup order.
pub const PRESET_NAMES: [&str; 4] = [
    "super_mario_galaxy",
    "squad_goals",
    "pink_season",
    "minecraft",
];

impl IndexConfig {
    pub const fn new(time_index: i32, title_start: i32, title_end: TitleEnd) -> Self {
        Self {
            time_index,
            title_start,
            title_end,
        }
    }

    /// Look up a built-in indexing preset by name.
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            // "0:00 Wii Menu - Starting The Game (''Super Mario Galaxy'')"
            "super_mario_galaxy" => Ok(Self::new(0, 1, TitleEnd::ToEnd)),
            // "1. Fibre - Supernatural 0:00 - 2:32"
            "squad_goals" => Ok(Self::new(-3, 1, TitleEnd::Index(-3))),
            // "1. Hot Nickel Ball On A P*ssy 0:00"
            "pink_season" => Ok(Self::new(-1, 1, TitleEnd::Index(-1))),
            // "0:00 - Key"
            "minecraft" => Ok(Self::new(0, 2, TitleEnd::ToEnd)),
            _ => Err(ChapterizeError::UnknownPreset(
                name.to_string(),
                PRESET_NAMES.join(", "),
            )),
        }
    }

    /// Build a configuration from explicit `-i` arguments. The timestamp and
    /// title-start indices must be integers; the title-end index may also be
    /// the literal `none`, meaning "to the end of the line".
    pub fn from_indices(timestamp: &str, title_start: &str, title_end: &str) -> Result<Self> {
        Ok(Self::new(
            parse_index(timestamp)?,
            parse_index(title_start)?,
            title_end.parse()?,
        ))
    }
}

fn parse_index(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| ChapterizeError::InvalidIndex(s.to_string()))
}
