use rocket::serde::json::Json;
use rocket::{get, State};
use yts_client::{DetailsOptions, Envelope, MovieDetailsData};

use crate::http_error::HttpError;
use crate::models::context::ContextPointer;

const CONTEXT: &str = "Failed to fetch movie details from YTS API";

#[get("/movies/<id>?<with_images>&<with_cast>")]
pub async fn movie_details(
    id: u32,
    with_images: Option<bool>,
    with_cast: Option<bool>,
    context: &State<ContextPointer>,
) -> Result<Json<Envelope<MovieDetailsData>>, HttpError> {
    let options = DetailsOptions::new(with_images.unwrap_or(false), with_cast.unwrap_or(false));

    let envelope = context
        .yts_client()
        .movie_details(id, &options)
        .await
        .map_err(|error| HttpError::from_client(CONTEXT, error))?;

    Ok(Json(envelope))
}
