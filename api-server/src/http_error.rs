use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;

/// JSON error envelope returned by every failing route.
///
/// Caller mistakes (missing movie id, out-of-domain filter values) come back
/// as 400 with the precise message; everything else hides behind the route's
/// context message with a 500.
#[derive(Debug)]
pub struct HttpError {
    status: Status,
    message: String,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    status_message: String,
    error: String,
}

impl HttpError {
    pub fn from_client(context: &str, error: yts_client::Error) -> Self {
        let status = match &error {
            yts_client::Error::MissingParameter(_) | yts_client::Error::InvalidFilter(_) => {
                Status::BadRequest
            }
            _ => Status::InternalServerError,
        };

        log::error!("{}: {}", context, error);

        let message = if status == Status::BadRequest {
            error.to_string()
        } else {
            context.to_string()
        };

        Self {
            status,
            message,
            detail: error.to_string(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl<'r> Responder<'r, 'static> for HttpError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = Json(ErrorBody {
            status: "error",
            status_message: self.message,
            error: self.detail,
        });

        let mut response = body.respond_to(request)?;
        response.set_status(self.status);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yts_client::filters::{FilterField, InvalidFilterError};
    use yts_client::Error;

    #[test]
    fn caller_mistakes_map_to_bad_request() {
        let error = HttpError::from_client("ctx", Error::MissingParameter("movie_id"));
        assert_eq!(error.status(), Status::BadRequest);

        let invalid = InvalidFilterError::new(FilterField::Quality, "480p");
        let error = HttpError::from_client("ctx", Error::InvalidFilter(invalid));
        assert_eq!(error.status(), Status::BadRequest);
    }

    #[test]
    fn upstream_failures_map_to_internal_error() {
        let error = HttpError::from_client("ctx", Error::Status(503));
        assert_eq!(error.status(), Status::InternalServerError);

        let error = HttpError::from_client("ctx", Error::Api("Movie not found".into()));
        assert_eq!(error.status(), Status::InternalServerError);
    }
}
