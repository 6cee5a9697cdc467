use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, State};
use serde::Serialize;
use yts_client::CacheStats;

use crate::models::context::ContextPointer;

#[derive(Serialize)]
pub struct CacheStatsResponse {
    pub cache_stats: Option<CacheStats>,
    pub cache_enabled: bool,
}

/// Current response cache statistics.
#[get("/cache/stats")]
pub fn cache_stats(context: &State<ContextPointer>) -> Json<CacheStatsResponse> {
    let cache_stats = context.yts_client().cache_stats();
    let cache_enabled = cache_stats.is_some();

    Json(CacheStatsResponse {
        cache_stats,
        cache_enabled,
    })
}

/// Drops every cached response.
#[delete("/cache")]
pub fn clear_cache(context: &State<ContextPointer>) -> Status {
    context.yts_client().clear_cache();
    Status::NoContent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cors::Cors;
    use crate::models::config::Config;
    use crate::models::context::Context;
    use figment::Figment;
    use rocket::local::blocking::Client;
    use rocket::routes;
    use std::sync::Arc;

    fn test_client() -> Client {
        let config: Config = Figment::new().extract().unwrap();
        let context: ContextPointer = Arc::new(Context::new(config));

        let rocket = rocket::build()
            .manage(context)
            .attach(Cors)
            .mount("/api", routes![cache_stats, clear_cache]);

        Client::tracked(rocket).unwrap()
    }

    #[test]
    fn stats_endpoint_reports_the_enabled_cache() {
        let client = test_client();

        let response = client.get("/api/cache/stats").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );

        let body: serde_json::Value = response.into_json().unwrap();
        assert_eq!(body["cache_enabled"], true);
        assert_eq!(body["cache_stats"]["total_entries"], 0);
        assert_eq!(body["cache_stats"]["max_entries"], 1000);
    }

    #[test]
    fn clearing_the_cache_responds_no_content() {
        let client = test_client();

        let response = client.delete("/api/cache").dispatch();
        assert_eq!(response.status(), Status::NoContent);
    }
}
