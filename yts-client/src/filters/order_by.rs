use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::invalid_filter_error::{FilterField, InvalidFilterError};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Asc,
    #[default]
    Desc,
}

impl OrderBy {
    pub fn parse(value: &str) -> Result<Self, InvalidFilterError> {
        value
            .parse()
            .map_err(|_| InvalidFilterError::new(FilterField::OrderBy, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders() {
        assert_eq!(OrderBy::parse("asc").unwrap(), OrderBy::Asc);
        assert_eq!(OrderBy::Desc.to_string(), "desc");
        assert!(OrderBy::parse("descending").is_err());
    }
}
