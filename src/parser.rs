//! The chapter parser: turns a sequence of track-listing lines into chapter
//! records using a one-line lookahead, so each record's end time is the next
//! line's start time. The final record's end time is supplied by the caller,
//! usually the length of the whole track.

use crate::config::{IndexConfig, TitleEnd};
use crate::error::{ChapterizeError, Result};
use crate::timecode;

/// A single named, time-bounded segment of the track. Time strings are
/// carried verbatim from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub time_start: String,
    pub time_end: String,
    pub title: String,
}

enum State {
    /// No line consumed yet. Zero input lines is an error, not an empty
    /// sequence.
    AwaitingFirstLine,
    /// Holds the tokens of the line whose record has not been emitted yet.
    Streaming { line_no: usize, tokens: Vec<String> },
    Done,
}

/// Lazy chapter iterator. Yields one `Chapter` per input line, in input
/// order; fused after the first error or after the final record.
pub struct ChapterParser<I> {
    lines: I,
    config: IndexConfig,
    final_time_end: String,
    state: State,
}

impl<I> ChapterParser<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(lines: I, config: IndexConfig, final_time_end: impl Into<String>) -> Self {
        Self {
            lines,
            config,
            final_time_end: final_time_end.into(),
            state: State::AwaitingFirstLine,
        }
    }

    fn pull(&mut self) -> Option<Vec<String>> {
        self.lines.next().map(|line| tokenize(&line))
    }

    /// Extract the timestamp token, bounds-checked against the line.
    fn time_token(&self, line_no: usize, tokens: &[String]) -> Result<String> {
        let index = self.config.time_index;
        let resolved = resolve_index(tokens.len(), index)
            .ok_or(ChapterizeError::TokenIndexOutOfBounds { line: line_no, index })?;
        Ok(tokens[resolved].clone())
    }

    /// Join the configured title range. Slice bounds clamp to the token
    /// list, so a short line yields a truncated or empty title.
    fn title(&self, tokens: &[String]) -> String {
        let start = slice_bound(tokens.len(), self.config.title_start);
        let end = match self.config.title_end {
            TitleEnd::Index(i) => slice_bound(tokens.len(), i),
            TitleEnd::ToEnd => tokens.len(),
        };
        if start >= end {
            return String::new();
        }
        tokens[start..end].join(" ")
    }
}

impl<I> Iterator for ChapterParser<I>
where
    I: Iterator<Item = String>,
{
    type Item = Result<Chapter>;

    fn next(&mut self) -> Option<Self::Item> {
        // Taking the state up front leaves `Done` behind on every error
        // path, which is what fuses the iterator.
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::AwaitingFirstLine => match self.pull() {
                Some(tokens) => {
                    self.state = State::Streaming { line_no: 1, tokens };
                    self.next()
                }
                None => Some(Err(ChapterizeError::EmptyInput)),
            },
            State::Streaming { line_no, tokens } => {
                let time_start = match self.time_token(line_no, &tokens) {
                    Ok(token) => token,
                    Err(e) => return Some(Err(e)),
                };
                if let Err(e) = timecode::validate(&time_start) {
                    return Some(Err(e));
                }
                let title = self.title(&tokens);

                // Peek the next line; its time token is this record's end.
                let time_end = match self.pull() {
                    Some(next_tokens) => {
                        let next_line = line_no + 1;
                        let end = match self.time_token(next_line, &next_tokens) {
                            Ok(token) => token,
                            Err(e) => return Some(Err(e)),
                        };
                        self.state = State::Streaming {
                            line_no: next_line,
                            tokens: next_tokens,
                        };
                        end
                    }
                    None => self.final_time_end.clone(),
                };

                Some(Ok(Chapter {
                    time_start,
                    time_end,
                    title,
                }))
            }
        }
    }
}

fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Resolve a possibly negative token index, Python style: -1 is the last
/// token. Returns None when the index falls outside the token list.
fn resolve_index(len: usize, index: i32) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs() as usize)
    } else {
        let i = index as usize;
        (i < len).then_some(i)
    }
}

/// Clamp a slice bound the way Python clamps slice indices.
fn slice_bound(len: usize, index: i32) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs() as usize)
    } else {
        (index as usize).min(len)
    }
}
