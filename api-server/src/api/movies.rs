use rocket::serde::json::Json;
use rocket::{get, FromForm, State};
use yts_client::filters::{FilterField, InvalidFilterError};
use yts_client::{Envelope, Error, MovieFilters, MovieListData, OrderBy, Quality, SortBy};

use crate::http_error::HttpError;
use crate::models::context::ContextPointer;

const CONTEXT: &str = "Failed to fetch movies from YTS API";

/// Browser-facing filter form. `search` is accepted as an alias for
/// `query_term`, matching the short names used in page URLs.
#[derive(Debug, Default, FromForm)]
pub struct ListQuery {
    limit: Option<u8>,
    page: Option<u32>,
    quality: Option<String>,
    minimum_rating: Option<u8>,
    query_term: Option<String>,
    search: Option<String>,
    genre: Option<String>,
    sort_by: Option<String>,
    order_by: Option<String>,
    with_rt_ratings: Option<bool>,
}

impl ListQuery {
    fn into_filters(self) -> Result<MovieFilters, Error> {
        let mut filters = MovieFilters::default();

        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(InvalidFilterError::new(FilterField::Limit, "0").into());
            }
            filters.set_limit(limit);
        }
        if let Some(page) = self.page {
            filters.set_page(page);
        }
        if let Some(quality) = self.quality {
            filters.set_quality(Quality::parse(&quality)?);
        }
        if let Some(sort_by) = self.sort_by {
            filters.set_sort_by(SortBy::parse(&sort_by)?);
        }
        if let Some(order_by) = self.order_by {
            filters.set_order_by(OrderBy::parse(&order_by)?);
        }

        filters.set_minimum_rating(self.minimum_rating);
        filters.set_query_term(
            self.query_term
                .or(self.search)
                .filter(|term| !term.is_empty()),
        );
        filters.set_genre(self.genre.filter(|genre| !genre.is_empty()));
        filters.set_with_rt_ratings(self.with_rt_ratings.unwrap_or(false));

        Ok(filters)
    }
}

#[get("/movies?<query..>")]
pub async fn list_movies(
    query: ListQuery,
    context: &State<ContextPointer>,
) -> Result<Json<Envelope<MovieListData>>, HttpError> {
    let filters = query
        .into_filters()
        .map_err(|error| HttpError::from_client(CONTEXT, error))?;

    let envelope = context
        .yts_client()
        .list_movies(&filters)
        .await
        .map_err(|error| HttpError::from_client(CONTEXT, error))?;

    Ok(Json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_gives_default_filters() {
        let filters = ListQuery::default().into_filters().unwrap();
        assert_eq!(filters, MovieFilters::default());
    }

    #[test]
    fn search_is_an_alias_for_query_term() {
        let query = ListQuery {
            search: Some("blade runner".to_string()),
            ..ListQuery::default()
        };

        let filters = query.into_filters().unwrap();
        assert_eq!(filters.query_term().as_deref(), Some("blade runner"));
    }

    #[test]
    fn explicit_query_term_wins_over_the_alias() {
        let query = ListQuery {
            query_term: Some("dune".to_string()),
            search: Some("blade runner".to_string()),
            ..ListQuery::default()
        };

        let filters = query.into_filters().unwrap();
        assert_eq!(filters.query_term().as_deref(), Some("dune"));
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        let query = ListQuery {
            quality: Some("480p".to_string()),
            ..ListQuery::default()
        };

        assert!(matches!(
            query.into_filters().unwrap_err(),
            Error::InvalidFilter(_)
        ));
    }

    #[test]
    fn zero_limit_is_rejected_not_forwarded() {
        let query = ListQuery {
            limit: Some(0),
            ..ListQuery::default()
        };

        let error = query.into_filters().unwrap_err();
        match error {
            Error::InvalidFilter(invalid) => {
                assert_eq!(*invalid.filter(), FilterField::Limit);
            }
            other => panic!("expected an invalid filter error, got {other}"),
        }
    }

    #[test]
    fn empty_search_counts_as_unset() {
        let query = ListQuery {
            search: Some(String::new()),
            ..ListQuery::default()
        };

        let filters = query.into_filters().unwrap();
        assert!(filters.query_term().is_none());
    }
}
