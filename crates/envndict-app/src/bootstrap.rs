use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use envndict_cache::{MemoryStore, RedisStore};
use envndict_config::Config;
use envndict_core::analytics::{UsageEvent, UsageRecorder, UsageSink};
use envndict_core::cache::DefinitionCache;
use envndict_core::dictionary::LocalDictionary;
use envndict_core::preprocess::WordFilter;
use envndict_core::{DefinitionResolver, LookupServices, MessageRouter};
use envndict_dictionary::EnViLoader;
use envndict_io::{TelegramClient, UpdatePoller};
use envndict_translator::{Translator, YandexTranslator};
use kanal::AsyncReceiver;

use crate::state::AppState;

/// Everything the controller needs to start the tasks
pub struct Bootstrap {
    pub state: Arc<AppState>,
    pub poller: UpdatePoller,
    pub usage_sink: Arc<dyn UsageSink>,
    pub usage_rx: AsyncReceiver<UsageEvent>,
}

/// Build every collaborator. Only Telegram is contacted here; an
/// unreachable cache shows up later as failed lookups.
pub async fn build(config: &Config) -> anyhow::Result<Bootstrap> {
    let dictionary = EnViLoader::load_with_additional(
        Path::new(&config.dictionary.path),
        config.dictionary.additional_paths.as_slice(),
    )
    .context("Failed to load local dictionary")?;
    let metadata = dictionary.metadata();
    tracing::info!(
        name = %metadata.name,
        language = %metadata.language,
        entries = metadata.entry_count,
        "Local dictionary ready"
    );

    let cache: Arc<dyn DefinitionCache>;
    let usage_sink: Arc<dyn UsageSink>;
    if config.cache.is_memory() {
        tracing::warn!("Using in-memory cache, definitions and counters are lost on restart");
        let store = Arc::new(MemoryStore::new());
        cache = store.clone();
        usage_sink = store;
    } else {
        let store = Arc::new(RedisStore::open(&config.cache.url).context("Invalid CACHE_URL")?);
        cache = store.clone();
        usage_sink = store;
    }

    if config.translator.api_key.is_empty() {
        tracing::warn!("YANDEX_API_KEY is not set, remote lookups will always fail");
    }
    let translator = YandexTranslator::new(
        config.translator.api_key.clone(),
        config.translator.api_url.clone(),
        config.translator.timeout_seconds.map(Duration::from_secs),
    )
    .context("Failed to build translator client")?;
    tracing::info!("Remote translator: {}", translator.metadata().name);

    let (usage, usage_rx) = UsageRecorder::bounded(config.usage_queue_capacity);

    let services = LookupServices {
        cache,
        dictionary: Arc::new(dictionary),
        translator: Arc::new(translator),
        usage: usage.clone(),
    };
    let filter = WordFilter::new().context("Failed to compile word filter")?;
    let router = MessageRouter::new(
        config.telegram.bot_name.clone(),
        DefinitionResolver::new(services, filter),
    );

    let telegram = TelegramClient::new(&config.telegram.api_url, &config.telegram.bot_token);
    let me = telegram
        .get_me()
        .await
        .context("Failed to connect to Telegram")?;
    tracing::info!(
        bot_id = me.id,
        username = me.username.as_deref().unwrap_or(&me.first_name),
        "Connected to Telegram"
    );

    let poller = UpdatePoller::new(
        telegram.clone(),
        config.telegram.poll_timeout_seconds,
        Duration::from_millis(config.telegram.poll_retry_delay_ms),
    );

    Ok(Bootstrap {
        state: Arc::new(AppState::new(router, Arc::new(telegram), usage)),
        poller,
        usage_sink,
        usage_rx,
    })
}
