use crate::Endpoint;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use utils::QueryParams;

/// Configuration for the response cache.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// How long to keep list responses.
    pub list_ttl: Duration,
    /// How long to keep movie detail responses.
    pub details_ttl: Duration,
    /// How long to keep suggestion responses.
    pub suggestions_ttl: Duration,
    /// How long to keep parental guide responses.
    pub guides_ttl: Duration,
    /// Maximum number of cached entries.
    pub max_entries: usize,
    /// Whether caching is enabled.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            list_ttl: Duration::minutes(5),
            details_ttl: Duration::minutes(10),
            suggestions_ttl: Duration::minutes(15),
            guides_ttl: Duration::minutes(30),
            max_entries: 1000,
            enabled: true,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self, endpoint: Endpoint) -> Duration {
        match endpoint {
            Endpoint::ListMovies => self.list_ttl,
            Endpoint::MovieDetails => self.details_ttl,
            Endpoint::MovieSuggestions => self.suggestions_ttl,
            Endpoint::ParentalGuides => self.guides_ttl,
        }
    }
}

/// Cached upstream envelope with expiry metadata.
#[derive(Clone, Debug)]
pub struct CachedResult {
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl CachedResult {
    pub fn new(data: Value, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Utc::now(),
            ttl,
        }
    }

    pub fn is_valid(&self) -> bool {
        Utc::now() < self.created_at + self.ttl
    }

    /// Whether the entry is within 10% of its TTL from expiring.
    pub fn expires_soon(&self) -> bool {
        let expiry_threshold = self.ttl.num_milliseconds() / 10;
        let expires_at = self.created_at + self.ttl;
        let time_until_expiry = expires_at - Utc::now();
        time_until_expiry.num_milliseconds() < expiry_threshold
    }
}

/// Cache key: the endpoint plus a digest of its rendered parameters.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct CacheKey {
    endpoint: Endpoint,
    digest: String,
}

impl CacheKey {
    pub fn new(endpoint: Endpoint, params: &QueryParams) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(endpoint.path().as_bytes());
        hasher.update(b"?");
        hasher.update(params.to_query_string().as_bytes());

        Self {
            endpoint,
            digest: hex::encode(hasher.finalize()),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

/// In-memory response cache backed by DashMap.
pub struct ResponseCache {
    entries: DashMap<CacheKey, CachedResult>,
    pub config: CacheConfig,
}

impl ResponseCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    /// Returns the cached envelope if present and not expired. Expired
    /// entries are dropped on the way out.
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        if !self.config.enabled {
            return None;
        }

        if let Some(cached) = self.entries.get(key) {
            if cached.is_valid() {
                log::debug!("Cache hit for {}", key.endpoint().path());
                return Some(cached.data.clone());
            }
            log::debug!("Cache expired for {}", key.endpoint().path());
            drop(cached);
            self.entries.remove(key);
        }

        log::debug!("Cache miss for {}", key.endpoint().path());
        None
    }

    pub fn put(&self, key: CacheKey, data: Value, ttl: Duration) {
        if !self.config.enabled {
            return;
        }

        if self.entries.len() >= self.config.max_entries {
            self.evict_expired();

            if self.entries.len() >= self.config.max_entries {
                self.evict_oldest();
            }
        }

        log::debug!("Stored response for {}", key.endpoint().path());
        self.entries.insert(key, CachedResult::new(data, ttl));
    }

    pub fn evict_expired(&self) {
        let expired_keys: Vec<_> = self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_valid())
            .map(|entry| entry.key().clone())
            .collect();

        let expired_count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        log::debug!("Evicted {} expired cache entries", expired_count);
    }

    /// Removes the oldest quarter of the entries when still at capacity.
    fn evict_oldest(&self) {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();

        entries.sort_by_key(|(_, created_at)| *created_at);

        let to_remove = (self.config.max_entries / 4).max(1);
        for (key, _) in entries.into_iter().take(to_remove) {
            self.entries.remove(&key);
        }

        log::debug!("Evicted {} oldest cache entries", to_remove);
    }

    pub fn clear(&self) {
        self.entries.clear();
        log::info!("Cache cleared");
    }

    pub fn stats(&self) -> CacheStats {
        let total_entries = self.entries.len();
        let expired_entries = self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_valid())
            .count();

        CacheStats {
            total_entries,
            valid_entries: total_entries - expired_entries,
            expired_entries,
            max_entries: self.config.max_entries,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub max_entries: usize,
}

pub type SharedResponseCache = Arc<ResponseCache>;
