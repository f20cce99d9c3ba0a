//! Resolution of the API schema version governing a request.

use thiserror::Error;

use crate::entities::version::ApiVersion;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported API version requested: {0}")]
pub struct UnsupportedVersionError(pub String);

type Result<T> = std::result::Result<T, UnsupportedVersionError>;

/// Determine the schema version from a request path and an
/// `Accept-Version` header value.
///
/// Policy, in order:
/// 1. A present header must name a supported version; anything else is an
///    error, never a silent fallback — also when the path carries a valid
///    version.
/// 2. A leading `/v<digits>/` path segment must name a supported version.
/// 3. When both signals are present and disagree, the path wins.
/// 4. Without any signal the latest version (v2) is served.
pub fn resolve(path: Option<&str>, header: Option<&str>) -> Result<ApiVersion> {
    let header_version = header
        .map(|value| {
            value
                .trim()
                .parse::<ApiVersion>()
                .map_err(|_| UnsupportedVersionError(value.trim().to_string()))
        })
        .transpose()?;
    let path_version = path.map(path_signal).transpose()?.flatten();
    Ok(path_version
        .or(header_version)
        .unwrap_or_else(ApiVersion::latest))
}

/// Extract the version signal from a leading `/v<digits>/` path segment.
fn path_signal(path: &str) -> Result<Option<ApiVersion>> {
    let Some(rest) = path.strip_prefix("/v") else {
        return Ok(None);
    };
    let digits: &str = &rest[..rest.find('/').unwrap_or(rest.len())];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    format!("v{digits}")
        .parse::<ApiVersion>()
        .map(Some)
        .map_err(|_| UnsupportedVersionError(format!("v{digits}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_latest() {
        assert_eq!(resolve(None, None), Ok(ApiVersion::V2));
        assert_eq!(resolve(Some("/api/solutions"), None), Ok(ApiVersion::V2));
    }

    #[test]
    fn header_signal() {
        assert_eq!(resolve(None, Some("v1")), Ok(ApiVersion::V1));
        assert_eq!(resolve(None, Some("V2")), Ok(ApiVersion::V2));
    }

    #[test]
    fn path_signal_wins_over_header() {
        assert_eq!(
            resolve(Some("/v1/api/solutions"), Some("v2")),
            Ok(ApiVersion::V1)
        );
        assert_eq!(
            resolve(Some("/v2/api/solutions"), Some("v1")),
            Ok(ApiVersion::V2)
        );
    }

    #[test]
    fn invalid_header_is_an_error_even_with_path_signal() {
        assert_eq!(
            resolve(Some("/v1/api/solutions"), Some("v3")),
            Err(UnsupportedVersionError("v3".into()))
        );
        assert_eq!(
            resolve(None, Some("latest")),
            Err(UnsupportedVersionError("latest".into()))
        );
    }

    #[test]
    fn unsupported_path_version_is_an_error() {
        assert_eq!(
            resolve(Some("/v9/api/solutions"), None),
            Err(UnsupportedVersionError("v9".into()))
        );
    }

    #[test]
    fn unversioned_path_prefixes_are_no_signal() {
        assert_eq!(resolve(Some("/version/api"), None), Ok(ApiVersion::V2));
        assert_eq!(resolve(Some("/v1x/api"), None), Ok(ApiVersion::V2));
    }
}
