/// Word count a description must exceed before it is wrapped.
pub const WRAP_MIN_WORDS: usize = 15;
/// Character count a description must exceed before it is wrapped.
pub const WRAP_MIN_CHARS: usize = 115;
/// Number of words kept on the first line of a wrapped description.
pub const WRAP_FIRST_LINE_WORDS: usize = 16;

/// A play description split into one or two display lines.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WrappedDescription {
    lines: Vec<String>,
}

impl WrappedDescription {
    /// Wrap `raw` after word 16 when it has more than 15 words AND more than 115 characters.
    ///
    /// Words are separated by single spaces, so runs of spaces count as empty words.
    pub fn wrap(raw: &str) -> Self {
        let words: Vec<&str> = raw.split(' ').collect();
        let long_enough = words.len() > WRAP_MIN_WORDS && raw.chars().count() > WRAP_MIN_CHARS;
        if !long_enough {
            return Self {
                lines: vec![raw.to_string()],
            };
        }
        let (head, tail) = words.split_at(WRAP_FIRST_LINE_WORDS);
        Self {
            lines: vec![head.join(" "), tail.join(" ")],
        }
    }

    /// Display lines, one or two.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when the description was split.
    pub fn is_wrapped(&self) -> bool {
        self.lines.len() > 1
    }

    /// Lines joined with `sep` (e.g. `"<br>"` for HTML titles).
    pub fn joined(&self, sep: &str) -> String {
        self.lines.join(sep)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/description.rs"]
mod tests;
