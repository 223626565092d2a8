//! Page text as handed over by the document reader.

/// Text of one document page: trimmed, non-empty lines in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed).
    pub number: u32,
    text: String,
}

impl PageText {
    /// Normalize raw page text into trimmed, non-empty lines.
    pub fn new(number: u32, raw: &str) -> Self {
        let text = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Self { number, text }
    }

    /// Full page text, one line per `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
