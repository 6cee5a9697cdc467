pub mod cache_admin;
pub mod movie_details;
pub mod movie_suggestions;
pub mod movies;
pub mod parental_guides;

use rocket::{routes, Route};

pub fn routes() -> Vec<Route> {
    routes![
        movies::list_movies,
        movie_details::movie_details,
        movie_suggestions::movie_suggestions,
        parental_guides::parental_guides,
        cache_admin::cache_stats,
        cache_admin::clear_cache,
    ]
}
