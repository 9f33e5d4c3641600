use std::sync::Arc;

use envndict_translator::{TranslateError, Translator};
use envndict_types::ChatSender;

use crate::analytics::{UsageEvent, UsageRecorder};
use crate::cache::DefinitionCache;
use crate::dictionary::LocalDictionary;
use crate::messages;
use crate::preprocess::{WordFilter, normalize_word};

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "vi";

/// Prefix marking a definition that came from the remote translator
pub const TRANSLATION_MARKER: &str = "-> ";

/// Handles the resolver needs, injected at construction
#[derive(Clone)]
pub struct LookupServices {
    pub cache: Arc<dyn DefinitionCache>,
    pub dictionary: Arc<dyn LocalDictionary>,
    pub translator: Arc<dyn Translator>,
    pub usage: UsageRecorder,
}

/// Resolves a word through cache, local dictionary and remote translator,
/// in that order, stopping at the first hit.
pub struct DefinitionResolver {
    services: LookupServices,
    filter: WordFilter,
}

impl DefinitionResolver {
    pub fn new(services: LookupServices, filter: WordFilter) -> Self {
        Self { services, filter }
    }

    /// Definition text to reply with.
    ///
    /// Returns an empty string when the cache itself is failing, and the
    /// apology message when nothing knows the word.
    pub async fn resolve(&self, word: &str, sender: &ChatSender) -> String {
        let word = normalize_word(word);

        self.services.usage.record(UsageEvent::Word(word.clone()));

        match self.services.cache.get(&word).await {
            Ok(Some(definition)) => {
                tracing::debug!(%word, "cache hit");
                return definition;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(%word, sender_id = sender.id, "cache lookup failed: {e}");
                return String::new();
            }
        }

        if let Some(definition) = self.services.dictionary.check(&word) {
            tracing::debug!(%word, "local dictionary hit");
            self.store(&word, &definition).await;
            return definition;
        }

        // Dictionary lookups take any input, only remote lookups are filtered
        if !self.filter.is_allowed(&word) {
            tracing::debug!(%word, "word rejected by filter");
            return messages::apology(&sender.display_name(), &word);
        }

        match self.translate(&word).await {
            Ok(definition) => {
                self.store(&word, &definition).await;
                definition
            }
            Err(e) => {
                tracing::error!(
                    call_site = "translator",
                    sender_id = sender.id,
                    %word,
                    "remote translation failed: {e}"
                );
                messages::apology(&sender.display_name(), &word)
            }
        }
    }

    async fn translate(&self, word: &str) -> Result<String, TranslateError> {
        let translation = self
            .services
            .translator
            .translate(word, SOURCE_LANGUAGE.to_string(), TARGET_LANGUAGE.to_string())
            .await?;

        if translation.text.is_empty() {
            return Err(TranslateError::EmptyTranslation);
        }
        if translation.text == word {
            return Err(TranslateError::SameWord);
        }

        Ok(format!("{TRANSLATION_MARKER}{}", translation.text))
    }

    async fn store(&self, word: &str, definition: &str) {
        if let Err(e) = self.services.cache.set(word, definition).await {
            tracing::error!(%word, "cache write failed: {e}");
        }
    }
}
