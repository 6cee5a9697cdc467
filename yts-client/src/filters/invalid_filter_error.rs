use getset::Getters;
use strum_macros::Display;
use thiserror::Error;

/// Names the filter a rejected value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FilterField {
    Page,
    Limit,
    Quality,
    MinimumRating,
    SortBy,
    OrderBy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Getters)]
#[get = "pub"]
#[error("invalid value `{value}` for filter `{filter}`")]
pub struct InvalidFilterError {
    filter: FilterField,
    value: String,
}

impl InvalidFilterError {
    pub fn new(filter: FilterField, value: impl Into<String>) -> Self {
        Self {
            filter,
            value: value.into(),
        }
    }
}
