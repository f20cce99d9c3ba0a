use strum::{Display, EnumIter, EnumString};

/// The two concurrently-live API schema versions.
///
/// V1 serves adaptation-target scoring and basic impacts, V2 the full
/// record with specialized impact metrics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ApiVersion {
    #[strum(serialize = "v1")]
    V1,
    #[strum(serialize = "v2")]
    V2,
}

impl ApiVersion {
    /// The version served when a request carries no version signal.
    pub const fn latest() -> Self {
        Self::V2
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("v1".parse(), Ok(ApiVersion::V1));
        assert_eq!("V2".parse(), Ok(ApiVersion::V2));
        assert!("v3".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(ApiVersion::V1.to_string(), "v1");
        assert_eq!(ApiVersion::V2.to_string(), "v2");
    }
}
