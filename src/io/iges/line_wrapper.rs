//! Packing of parameter tokens into fixed-width lines

use tracing::debug;

use crate::error::{IgesError, Result};

/// Width of the trailing directory back-pointer field on Parameter lines
pub const BACK_POINTER_WIDTH: usize = 7;

/// Data columns before the back-pointer field, which always ends at column 72
pub const BACK_POINTER_COLUMN: usize = 65;

/// Packs formatted tokens into delimited lines of at most `line_width` columns
///
/// Every line keeps one free column for the delimiter or record terminator
/// that follows its last token. Tokens that can never fit on a line are split
/// into chunks rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrapper {
    delimiter: char,
    terminator: char,
    line_width: usize,
    back_pointer: Option<u32>,
}

impl LineWrapper {
    /// Create a wrapper without a back-pointer field
    pub fn new(delimiter: char, terminator: char, line_width: usize) -> Result<Self> {
        if line_width < 2 {
            return Err(IgesError::InvalidConfiguration(format!(
                "line width {line_width} leaves no room for a token and its delimiter"
            )));
        }
        Ok(Self {
            delimiter,
            terminator,
            line_width,
            back_pointer: None,
        })
    }

    /// Stamp every line with a right-justified directory back pointer
    pub fn with_back_pointer(mut self, pointer: u32) -> Self {
        self.back_pointer = Some(pointer);
        self
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Column after which the back-pointer field starts
    pub fn back_pointer_column(&self) -> usize {
        self.line_width.max(BACK_POINTER_COLUMN)
    }

    /// Wrap the tokens of one record
    pub fn wrap<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        if tokens.is_empty() {
            return Err(IgesError::EmptyRecord);
        }

        let width = self.line_width;
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;
        // An empty token still occupies a field, so line length alone
        // cannot tell whether the current line holds one.
        let mut line_open = false;

        for token in tokens {
            let token = token.as_ref();
            let token_len = token.chars().count();

            if token_len + 1 > width {
                if line_open {
                    current.push(self.delimiter);
                    lines.push(std::mem::take(&mut current));
                }
                let (chunks, tail) = split_token(token, width);
                debug!(
                    token_len,
                    width,
                    continuation_lines = chunks.len(),
                    "splitting oversized parameter token"
                );
                lines.extend(chunks);
                current_len = tail.chars().count();
                current = tail;
                line_open = true;
                continue;
            }

            if !line_open {
                current.push_str(token);
                current_len = token_len;
                line_open = true;
            } else if current_len + 1 + token_len + 1 <= width {
                current.push(self.delimiter);
                current.push_str(token);
                current_len += 1 + token_len;
            } else {
                current.push(self.delimiter);
                lines.push(std::mem::replace(&mut current, token.to_string()));
                current_len = token_len;
            }
        }

        current.push(self.terminator);
        lines.push(current);

        if let Some(pointer) = self.back_pointer {
            let column = self.back_pointer_column();
            for line in &mut lines {
                *line = format!(
                    "{line:<column$}{pointer:>width$}",
                    width = BACK_POINTER_WIDTH
                );
            }
        }

        Ok(lines)
    }
}

/// Split an oversized token into full-width chunks plus a shorter tail
///
/// The tail is never empty and always leaves one column free, so the
/// delimiter after the token lands on the same line as its last character.
fn split_token(token: &str, width: usize) -> (Vec<String>, String) {
    let chars: Vec<char> = token.chars().collect();
    let mut rest = &chars[..];
    let mut chunks = Vec::new();

    while rest.len() > width - 1 {
        let take = if rest.len() > width { width } else { width - 1 };
        let (chunk, remainder) = rest.split_at(take);
        chunks.push(chunk.iter().collect());
        rest = remainder;
    }

    (chunks, rest.iter().collect())
}
