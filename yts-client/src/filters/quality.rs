use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::invalid_filter_error::{FilterField, InvalidFilterError};

/// Release quality accepted by the `quality` filter. `All` is the default
/// and is never forwarded upstream.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Quality {
    #[default]
    #[strum(serialize = "all")]
    #[serde(rename = "all")]
    All,
    #[strum(serialize = "720p")]
    #[serde(rename = "720p")]
    Hd720,
    #[strum(serialize = "1080p")]
    #[serde(rename = "1080p")]
    Hd1080,
    #[strum(serialize = "2160p")]
    #[serde(rename = "2160p")]
    Uhd2160,
    #[strum(serialize = "3D")]
    #[serde(rename = "3D")]
    ThreeD,
}

impl Quality {
    pub fn parse(value: &str) -> Result<Self, InvalidFilterError> {
        value
            .parse()
            .map_err(|_| InvalidFilterError::new(FilterField::Quality, value))
    }
}
