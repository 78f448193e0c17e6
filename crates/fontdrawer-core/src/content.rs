//! The run of character codes waiting to be drawn

/// Ordered, append-only sequence of character codes
///
/// Nothing is validated or deduplicated here. Codes the font lacks are
/// passed through and resolved by the engine when measuring or painting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuffer {
    codes: Vec<char>,
}

impl ContentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the characters of `text` at the end
    pub fn append(&mut self, text: &str) {
        self.codes.extend(text.chars());
    }

    /// Add arbitrary codes at the end
    pub fn extend<I: IntoIterator<Item = char>>(&mut self, codes: I) {
        self.codes.extend(codes);
    }

    /// Back to empty; calling it twice is the same as calling it once
    pub fn clear(&mut self) {
        self.codes.clear();
    }

    pub fn codes(&self) -> &[char] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The buffer as a string
    pub fn to_text(&self) -> String {
        self.codes.iter().collect()
    }
}
