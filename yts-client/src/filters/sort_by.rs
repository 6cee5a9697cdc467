use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::invalid_filter_error::{FilterField, InvalidFilterError};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Title,
    #[default]
    Year,
    Rating,
    Peers,
    Seeds,
    DownloadCount,
    LikeCount,
    DateAdded,
}

impl SortBy {
    pub fn parse(value: &str) -> Result<Self, InvalidFilterError> {
        value
            .parse()
            .map_err(|_| InvalidFilterError::new(FilterField::SortBy, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_case_values() {
        assert_eq!(SortBy::parse("date_added").unwrap(), SortBy::DateAdded);
        assert_eq!(SortBy::parse("download_count").unwrap(), SortBy::DownloadCount);
    }

    #[test]
    fn rejects_unknown_column() {
        assert!(SortBy::parse("popularity").is_err());
    }
}
