use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Store a receipt was issued by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Apple,
    Google,
    Amazon,
    Roku,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_platform_names_ignoring_case() {
        assert_eq!(Platform::from_str("apple").unwrap(), Platform::Apple);
        assert_eq!(Platform::from_str("Google").unwrap(), Platform::Google);
        assert_eq!(Platform::from_str("AMAZON").unwrap(), Platform::Amazon);
        assert_eq!(Platform::from_str("roku").unwrap(), Platform::Roku);
        assert!(Platform::from_str("windows").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for platform in Platform::iter() {
            assert_eq!(Platform::from_str(&platform.to_string()).unwrap(), platform);
        }
    }
}
