pub mod cache;
pub mod dates;
mod error;
pub mod filters;
pub mod magnet;
mod movie;


use cache::{CacheConfig, CacheKey, ResponseCache, SharedResponseCache};
pub use cache::CacheStats;
pub use error::Error;
pub use filters::{DetailsOptions, MovieFilters, OrderBy, Quality, SortBy};
pub use movie::{
    Cast, Envelope, Meta, Movie, MovieDetailsData, MovieListData, MovieSuggestionsData,
    ParentalGuide, ParentalGuidesData, Torrent, GENRES,
};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use surf::{Client, Url};
use utils::{QueryParams, SurfLogging};

pub const DEFAULT_API_BASE: &str = "https://yts.mx/api/v2";

const USER_AGENT: &str = "yts-catalogue-proxy";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_LIMIT: u32 = 2;

/// The YTS catalogue endpoints this client speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListMovies,
    MovieDetails,
    MovieSuggestions,
    ParentalGuides,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ListMovies => "list_movies.json",
            Endpoint::MovieDetails => "movie_details.json",
            Endpoint::MovieSuggestions => "movie_suggestions.json",
            Endpoint::ParentalGuides => "movie_parental_guides.json",
        }
    }
}

/// Client for the YTS catalogue API with optional response caching.
#[derive(Clone)]
pub struct YtsClient {
    http: Client,
    cache: Option<SharedResponseCache>,
}

impl Default for YtsClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl YtsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: build_http(base_url),
            cache: None,
        }
    }

    pub fn with_cache(base_url: &str, cache_config: CacheConfig) -> Self {
        Self {
            http: build_http(base_url),
            cache: Some(Arc::new(ResponseCache::new(cache_config))),
        }
    }

    /// Browse the catalogue with the given filter state.
    pub async fn list_movies(
        &self,
        filters: &MovieFilters,
    ) -> Result<Envelope<MovieListData>, Error> {
        let params = filters.to_query_params();
        self.fetch(Endpoint::ListMovies, params).await
    }

    /// Full record for one movie, optionally with images and cast.
    pub async fn movie_details(
        &self,
        movie_id: u32,
        options: &DetailsOptions,
    ) -> Result<Envelope<MovieDetailsData>, Error> {
        let mut params = movie_id_params(movie_id)?;
        options.apply_to(&mut params);
        self.fetch(Endpoint::MovieDetails, params).await
    }

    /// Movies related to the given one.
    pub async fn movie_suggestions(
        &self,
        movie_id: u32,
    ) -> Result<Envelope<MovieSuggestionsData>, Error> {
        let params = movie_id_params(movie_id)?;
        self.fetch(Endpoint::MovieSuggestions, params).await
    }

    /// Parental guidance entries for the given movie.
    pub async fn parental_guides(
        &self,
        movie_id: u32,
    ) -> Result<Envelope<ParentalGuidesData>, Error> {
        let params = movie_id_params(movie_id)?;
        self.fetch(Endpoint::ParentalGuides, params).await
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| cache.stats())
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    pub fn evict_expired_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.evict_expired();
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<Envelope<T>, Error> {
        let value = self.fetch_envelope(endpoint, &params).await?;
        serde_json::from_value(value).map_err(|error| Error::Decode(error.to_string()))
    }

    /// Cache lookup, then the actual request. Upstream error envelopes are
    /// surfaced as `Error::Api` and never cached.
    async fn fetch_envelope(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Value, Error> {
        let key = CacheKey::new(endpoint, params);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key) {
                log::info!("Returning cached response for {}", endpoint.path());
                return Ok(hit);
            }
        }

        let value = self.request(endpoint, params).await?;

        if value.get("status").and_then(Value::as_str) == Some("error") {
            let message = value
                .get("status_message")
                .and_then(Value::as_str)
                .unwrap_or("API Error");
            return Err(Error::Api(message.to_string()));
        }

        if let Some(cache) = &self.cache {
            let ttl = cache.config.ttl(endpoint);
            cache.put(key, value.clone(), ttl);
        }

        Ok(value)
    }

    async fn request(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value, Error> {
        let path = if params.is_empty() {
            endpoint.path().to_string()
        } else {
            format!("{}?{}", endpoint.path(), params.to_query_string())
        };

        let mut attempt = 0;
        loop {
            match self.request_once(&path).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && attempt < RETRY_LIMIT => {
                    attempt += 1;
                    log::warn!(
                        "Request to {} failed ({}), retry {}/{}",
                        endpoint.path(),
                        error,
                        attempt,
                        RETRY_LIMIT
                    );
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn request_once(&self, path: &str) -> Result<Value, Error> {
        let mut response = self.http.get(path).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.into()));
        }

        response
            .body_json::<Value>()
            .await
            .map_err(|error| Error::Decode(error.to_string()))
    }
}

fn movie_id_params(movie_id: u32) -> Result<QueryParams, Error> {
    if movie_id == 0 {
        return Err(Error::MissingParameter("movie_id"));
    }

    let mut params = QueryParams::new();
    params.push("movie_id", movie_id);
    Ok(params)
}

fn build_http(base_url: &str) -> Client {
    // A trailing slash makes relative endpoint paths join under /api/v2
    // instead of replacing the last segment.
    let mut base = base_url.trim_end_matches('/').to_string();
    base.push('/');

    let client: Client = surf::Config::new()
        .set_base_url(Url::parse(&base).expect("invalid YTS API base URL"))
        .set_timeout(Some(REQUEST_TIMEOUT))
        .add_header(surf::http::headers::USER_AGENT, USER_AGENT)
        .expect("static User-Agent header")
        .try_into()
        .expect("HTTP client configuration");

    client.with(SurfLogging)
}
