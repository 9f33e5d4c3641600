use regex::Regex;

/// Printable ASCII and blanks only
pub const ALLOWED_WORD_PATTERN: &str = r"^[[:blank:][:graph:]]+$";

/// Lookup key for a raw message text
pub fn normalize_word(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Gate for words sent to the remote translator
#[derive(Debug, Clone)]
pub struct WordFilter {
    pattern: Regex,
}

impl WordFilter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(ALLOWED_WORD_PATTERN)?,
        })
    }

    pub fn is_allowed(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}
