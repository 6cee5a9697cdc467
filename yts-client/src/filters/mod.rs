mod details_options;
mod invalid_filter_error;
mod order_by;
mod quality;
mod sort_by;

pub use details_options::DetailsOptions;
pub use invalid_filter_error::{FilterField, InvalidFilterError};
pub use order_by::OrderBy;
pub use quality::Quality;
pub use sort_by::SortBy;

use getset::{CopyGetters, Getters, Setters};
use utils::QueryParams;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u8 = 20;

/// The browsing filter state: everything the list endpoint can be narrowed
/// by, mirrored into the browser URL and forwarded upstream.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
pub struct MovieFilters {
    #[getset(get_copy = "pub", set = "pub")]
    page: u32,
    #[getset(get_copy = "pub", set = "pub")]
    limit: u8,
    #[getset(get_copy = "pub", set = "pub")]
    quality: Quality,
    #[getset(get_copy = "pub", set = "pub")]
    minimum_rating: Option<u8>,
    #[getset(get = "pub", set = "pub")]
    query_term: Option<String>,
    #[getset(get = "pub", set = "pub")]
    genre: Option<String>,
    #[getset(get_copy = "pub", set = "pub")]
    sort_by: SortBy,
    #[getset(get_copy = "pub", set = "pub")]
    order_by: OrderBy,
    #[getset(get_copy = "pub", set = "pub")]
    with_rt_ratings: bool,
}

impl Default for MovieFilters {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            quality: Quality::default(),
            minimum_rating: None,
            query_term: None,
            genre: None,
            sort_by: SortBy::default(),
            order_by: OrderBy::default(),
            with_rt_ratings: false,
        }
    }
}

impl MovieFilters {
    /// Parameters for the upstream list request. Pagination and ordering are
    /// always present; the optional filters only when actually set.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("limit", self.limit);
        params.push("page", self.page);
        if self.quality != Quality::All {
            params.push("quality", self.quality);
        }
        params.push_opt("minimum_rating", self.minimum_rating);
        params.push_opt("query_term", self.query_term.as_deref());
        params.push_opt("genre", self.genre.as_deref());
        params.push("sort_by", self.sort_by);
        params.push("order_by", self.order_by);
        params.push_flag("with_rt_ratings", self.with_rt_ratings);
        params
    }

    /// The browser-URL form of this state: defaults are omitted entirely and
    /// the short aliases `search` and `min_rating` are used.
    pub fn to_url_query(&self) -> QueryParams {
        let defaults = Self::default();
        let mut params = QueryParams::new();
        if self.page != defaults.page {
            params.push("page", self.page);
        }
        if self.limit != defaults.limit {
            params.push("limit", self.limit);
        }
        if self.sort_by != defaults.sort_by {
            params.push("sort_by", self.sort_by);
        }
        if self.order_by != defaults.order_by {
            params.push("order_by", self.order_by);
        }
        params.push_opt("search", self.query_term.as_deref());
        params.push_opt("genre", self.genre.as_deref());
        if self.quality != defaults.quality {
            params.push("quality", self.quality);
        }
        params.push_opt("min_rating", self.minimum_rating);
        params
    }

    /// Rebuilds the state from browser-URL pairs. Missing keys fall back to
    /// the defaults, unknown keys are ignored, empty text filters count as
    /// unset.
    pub fn from_url_query<'a, I>(pairs: I) -> Result<Self, InvalidFilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            match key {
                "page" => {
                    filters.page = value
                        .parse()
                        .map_err(|_| InvalidFilterError::new(FilterField::Page, value))?;
                }
                "limit" => {
                    let limit: u8 = value
                        .parse()
                        .map_err(|_| InvalidFilterError::new(FilterField::Limit, value))?;
                    if limit == 0 {
                        return Err(InvalidFilterError::new(FilterField::Limit, value));
                    }
                    filters.limit = limit;
                }
                "sort_by" => filters.sort_by = SortBy::parse(value)?,
                "order_by" => filters.order_by = OrderBy::parse(value)?,
                "quality" => filters.quality = Quality::parse(value)?,
                "search" => {
                    filters.query_term = Some(value.to_string()).filter(|v| !v.is_empty());
                }
                "genre" => {
                    filters.genre = Some(value.to_string()).filter(|v| !v.is_empty());
                }
                "min_rating" => {
                    filters.minimum_rating = Some(value.parse().map_err(|_| {
                        InvalidFilterError::new(FilterField::MinimumRating, value)
                    })?);
                }
                _ => {}
            }
        }
        Ok(filters)
    }

    /// Applies a filter change: any change beyond the page number jumps the
    /// pagination back to the first page.
    pub fn merged(&self, new: MovieFilters) -> MovieFilters {
        let mut probe = new.clone();
        probe.page = self.page;

        if probe == *self {
            new
        } else {
            MovieFilters {
                page: DEFAULT_PAGE,
                ..new
            }
        }
    }

    pub fn total_pages(&self, movie_count: u32) -> u32 {
        if movie_count == 0 || self.limit == 0 {
            return 0;
        }
        movie_count.div_ceil(self.limit as u32)
    }
}
