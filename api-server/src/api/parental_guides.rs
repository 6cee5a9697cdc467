use rocket::serde::json::Json;
use rocket::{get, State};
use yts_client::{Envelope, ParentalGuidesData};

use crate::http_error::HttpError;
use crate::models::context::ContextPointer;

const CONTEXT: &str = "Failed to fetch parental guides from YTS API";

#[get("/movies/<id>/parental-guides")]
pub async fn parental_guides(
    id: u32,
    context: &State<ContextPointer>,
) -> Result<Json<Envelope<ParentalGuidesData>>, HttpError> {
    let envelope = context
        .yts_client()
        .parental_guides(id)
        .await
        .map_err(|error| HttpError::from_client(CONTEXT, error))?;

    Ok(Json(envelope))
}
