use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use getset::Getters;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;

/// Server configuration, read from `config.yaml` with `YTS_`-prefixed
/// environment variables taking precedence. Every field has a default, so an
/// empty configuration is valid.
#[serde_inline_default]
#[derive(Debug, Clone, Deserialize, Getters)]
#[get = "pub"]
pub struct Config {
    #[serde_inline_default(8000)]
    port: u16,
    #[serde_inline_default(String::from(yts_client::DEFAULT_API_BASE))]
    yts_api_base: String,
    #[serde_inline_default(true)]
    cache_enabled: bool,
    #[serde_inline_default(1000)]
    cache_max_entries: usize,
    #[serde_inline_default(String::from("info"))]
    log_level: String,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file("config.yaml"))
            .merge(Env::prefixed("YTS_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_configuration_falls_back_to_defaults() {
        let config: Config = Figment::new().extract().unwrap();
        assert_eq!(*config.port(), 8000);
        assert_eq!(config.yts_api_base(), "https://yts.mx/api/v2");
        assert!(*config.cache_enabled());
        assert_eq!(*config.cache_max_entries(), 1000);
        assert_eq!(config.log_level(), "info");
    }
}
