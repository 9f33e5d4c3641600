use std::collections::HashMap;

use envndict_core::dictionary::{DictionaryMetadata, LocalDictionary};

const HEADWORD_MARKER: char = '@';

/// English-Vietnamese dictionary indexed by lowercased headword.
///
/// Source layout:
///
/// ```text
/// @hello /hə'lou/
/// * thán từ
/// - chào anh!, chào chị!
/// @world /wə:ld/
/// ...
/// ```
#[derive(Debug, Default)]
pub struct EnViDict {
    index: HashMap<String, String>,
}

impl EnViDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from dictionary source text
    pub fn from_text(text: &str) -> Self {
        let mut dict = Self::new();
        dict.extend_from_text(text);
        dict
    }

    /// Add every entry of `text`, merging repeated headwords
    pub fn extend_from_text(&mut self, text: &str) {
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in text.lines() {
            if let Some(header) = line.strip_prefix(HEADWORD_MARKER) {
                if let Some((word, body)) = current.take() {
                    self.insert(word, body);
                }
                let (word, pronunciation) = split_header(header);
                let body = pronunciation.into_iter().collect();
                current = Some((word, body));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line.trim_end());
            }
        }

        if let Some((word, body)) = current {
            self.insert(word, body);
        }
    }

    /// Merge another dictionary into this one
    pub fn merge(mut self, other: EnViDict) -> Self {
        for (word, definition) in other.index {
            self.insert_definition(word, definition);
        }
        self
    }

    pub fn entry_count(&self) -> usize {
        self.index.len()
    }

    fn insert(&mut self, word: String, mut body: Vec<&str>) {
        while body.last().is_some_and(|line| line.trim().is_empty()) {
            body.pop();
        }
        if word.is_empty() {
            tracing::debug!("skipping dictionary entry without headword");
            return;
        }
        self.insert_definition(word, body.join("\n"));
    }

    fn insert_definition(&mut self, word: String, definition: String) {
        match self.index.get_mut(&word) {
            Some(existing) => {
                existing.push_str("\n\n");
                existing.push_str(&definition);
            }
            None => {
                self.index.insert(word, definition);
            }
        }
    }
}

/// `"hello /hə'lou/"` into `("hello", Some("/hə'lou/"))`
fn split_header(header: &str) -> (String, Option<&str>) {
    let header = header.trim();
    match header.find(" /") {
        Some(pos) => (
            header[..pos].trim().to_lowercase(),
            Some(header[pos..].trim()),
        ),
        None => (header.to_lowercase(), None),
    }
}

impl LocalDictionary for EnViDict {
    fn check(&self, word: &str) -> Option<String> {
        self.index.get(word).cloned()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "en_vi".to_string(),
            language: "en-vi".to_string(),
            entry_count: self.index.len(),
        }
    }
}
