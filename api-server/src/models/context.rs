use getset::Getters;
use log::info;
use std::sync::Arc;
use yts_client::cache::CacheConfig;
use yts_client::YtsClient;

use super::config::Config;

#[derive(Getters)]
#[get = "pub"]
pub struct Context {
    yts_client: YtsClient,
    config: Config,
}

impl Context {
    pub fn new(config: Config) -> Self {
        let yts_client = if *config.cache_enabled() {
            let cache_config = CacheConfig {
                max_entries: *config.cache_max_entries(),
                ..CacheConfig::default()
            };
            info!(
                "Initialized YtsClient with caching (max entries: {})",
                cache_config.max_entries
            );
            YtsClient::with_cache(config.yts_api_base(), cache_config)
        } else {
            info!("Initialized YtsClient without caching");
            YtsClient::new(config.yts_api_base())
        };

        Self { yts_client, config }
    }
}

pub type ContextPointer = Arc<Context>;
