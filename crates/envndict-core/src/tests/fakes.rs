//! In-memory collaborators that count how they are used

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use envndict_translator::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};
use envndict_types::{ChatKind, ChatSender};
use kanal::AsyncReceiver;

use crate::analytics::{UsageEvent, UsageRecorder, UsageSink};
use crate::cache::{CacheError, DefinitionCache};
use crate::dictionary::{DictionaryMetadata, LocalDictionary};
use crate::preprocess::WordFilter;
use crate::resolver::{DefinitionResolver, LookupServices};

#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, String>>,
    pub gets: AtomicUsize,
    pub writes: Mutex<Vec<(String, String)>>,
    pub fail_get: bool,
    pub fail_set: bool,
}

impl FakeCache {
    pub fn failing_get() -> Self {
        Self {
            fail_get: true,
            ..Self::default()
        }
    }

    pub fn failing_set() -> Self {
        Self {
            fail_set: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DefinitionCache for FakeCache {
    async fn get(&self, word: &str) -> Result<Option<String>, CacheError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get {
            return Err(CacheError::transport("connection refused"));
        }
        Ok(self.entries.lock().unwrap().get(word).cloned())
    }

    async fn set(&self, word: &str, definition: &str) -> Result<(), CacheError> {
        self.writes
            .lock()
            .unwrap()
            .push((word.to_string(), definition.to_string()));
        if self.fail_set {
            return Err(CacheError::transport("read only replica"));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(word.to_string(), definition.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDictionary {
    entries: HashMap<String, String>,
    pub checks: AtomicUsize,
}

impl FakeDictionary {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(w, d)| (w.to_string(), d.to_string()))
                .collect(),
            checks: AtomicUsize::new(0),
        }
    }
}

impl LocalDictionary for FakeDictionary {
    fn check(&self, word: &str) -> Option<String> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.entries.get(word).cloned()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "fake".to_string(),
            language: "en-vi".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

pub enum Reply {
    Text(&'static str),
    RateLimited,
}

pub struct FakeTranslator {
    reply: Reply,
    pub calls: Mutex<Vec<(String, LanguageCode, LanguageCode)>>,
}

impl FakeTranslator {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.lock().unwrap().push((text.to_string(), from, to));

        match self.reply {
            Reply::Text(translated) => Ok(Translation {
                text: translated.to_string(),
            }),
            Reply::RateLimited => Err(TranslateError::RateLimitExceeded),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
        }
    }
}

#[derive(Default)]
pub struct FakeSink {
    pub increments: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl UsageSink for FakeSink {
    async fn increment(&self, counter: &str, member: &str) -> Result<(), CacheError> {
        self.increments
            .lock()
            .unwrap()
            .push((counter.to_string(), member.to_string()));
        if self.fail {
            return Err(CacheError::transport("sink down"));
        }
        Ok(())
    }
}

pub struct Harness {
    pub cache: Arc<FakeCache>,
    pub dictionary: Arc<FakeDictionary>,
    pub translator: Arc<FakeTranslator>,
    pub usage_rx: AsyncReceiver<UsageEvent>,
    pub resolver: DefinitionResolver,
}

impl Harness {
    pub fn new(cache: FakeCache, dictionary: FakeDictionary, translator: FakeTranslator) -> Self {
        let cache = Arc::new(cache);
        let dictionary = Arc::new(dictionary);
        let translator = Arc::new(translator);
        let (usage, usage_rx) = UsageRecorder::bounded(16);

        let services = LookupServices {
            cache: cache.clone(),
            dictionary: dictionary.clone(),
            translator: translator.clone(),
            usage,
        };
        let resolver = DefinitionResolver::new(services, WordFilter::new().unwrap());

        Self {
            cache,
            dictionary,
            translator,
            usage_rx,
            resolver,
        }
    }

    pub fn with_dictionary(entries: &[(&str, &str)]) -> Self {
        Self::new(
            FakeCache::default(),
            FakeDictionary::with(entries),
            FakeTranslator::replying(Reply::RateLimited),
        )
    }

    pub fn with_translation(reply: Reply) -> Self {
        Self::new(
            FakeCache::default(),
            FakeDictionary::default(),
            FakeTranslator::replying(reply),
        )
    }

    pub fn dictionary_checks(&self) -> usize {
        self.dictionary.checks.load(Ordering::SeqCst)
    }

    pub fn queued_usage(&self) -> Vec<UsageEvent> {
        let mut events = vec![];
        while let Ok(Some(event)) = self.usage_rx.try_recv() {
            events.push(event);
        }
        events
    }
}

pub fn direct(first_name: &str, last_name: &str) -> ChatSender {
    ChatSender {
        id: 1001,
        kind: ChatKind::Private,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        title: String::new(),
    }
}

pub fn group(title: &str) -> ChatSender {
    ChatSender {
        id: -2002,
        kind: ChatKind::Group,
        first_name: String::new(),
        last_name: String::new(),
        title: title.to_string(),
    }
}
