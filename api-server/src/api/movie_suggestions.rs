use rocket::serde::json::Json;
use rocket::{get, State};
use yts_client::{Envelope, MovieSuggestionsData};

use crate::http_error::HttpError;
use crate::models::context::ContextPointer;

const CONTEXT: &str = "Failed to fetch movie suggestions from YTS API";

#[get("/movies/<id>/suggestions")]
pub async fn movie_suggestions(
    id: u32,
    context: &State<ContextPointer>,
) -> Result<Json<Envelope<MovieSuggestionsData>>, HttpError> {
    let envelope = context
        .yts_client()
        .movie_suggestions(id)
        .await
        .map_err(|error| HttpError::from_client(CONTEXT, error))?;

    Ok(Json(envelope))
}
