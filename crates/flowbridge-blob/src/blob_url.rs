//! Storage-object URL parsing.

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Errors produced while parsing a storage-object URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobUrlError {
    /// The input is not a well-formed URL.
    #[error("unparsable blob URL: {0}")]
    Parse(#[from] url::ParseError),

    /// The URL carries no host.
    #[error("blob URL has no host")]
    MissingHost,

    /// The host starts with an empty account label.
    #[error("blob URL host has an empty account label")]
    EmptyAccount,

    /// The URL path carries no container segment.
    #[error("blob URL is missing a container segment")]
    MissingContainer,

    /// The URL path ends at the container.
    #[error("blob URL is missing an object path")]
    MissingObjectPath,
}

/// A parsed storage-object reference.
///
/// Notifications reference objects as
/// `scheme://<account-host>/<container>/<object-path...>`: the account is
/// the host label before the first `.`, the container is the first path
/// segment, and the remaining segments joined by `/` form the object path.
/// The scheme and host suffix are carried through untouched; no further
/// validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobUrl {
    scheme: String,
    host: String,
    account: String,
    container: String,
    path: String,
}

impl BlobUrl {
    /// Parses a storage-object URL into its account/container/path parts.
    pub fn parse(input: &str) -> Result<Self, BlobUrlError> {
        let url = Url::parse(input)?;
        let host = url.host_str().ok_or(BlobUrlError::MissingHost)?.to_owned();

        let account = host
            .split('.')
            .next()
            .unwrap_or_default()
            .to_owned();
        if account.is_empty() {
            return Err(BlobUrlError::EmptyAccount);
        }

        let mut segments = url.path_segments().ok_or(BlobUrlError::MissingContainer)?;
        let container = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or(BlobUrlError::MissingContainer)?
            .to_owned();

        let path = segments.collect::<Vec<_>>().join("/");
        if path.is_empty() {
            return Err(BlobUrlError::MissingObjectPath);
        }

        Ok(Self {
            scheme: url.scheme().to_owned(),
            host,
            account,
            container,
            path,
        })
    }

    /// Returns the URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the full storage host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the container name.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Returns the object path within the container.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the service endpoint hosting the account.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

impl FromStr for BlobUrl {
    type Err = BlobUrlError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}/{}/{}",
            self.scheme, self.host, self.container, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flow_log_url() {
        let url = BlobUrl::parse("https://acct.blob.core.windows.net/c/log1.json").unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), "acct.blob.core.windows.net");
        assert_eq!(url.account(), "acct");
        assert_eq!(url.container(), "c");
        assert_eq!(url.path(), "log1.json");
        assert_eq!(url.endpoint(), "https://acct.blob.core.windows.net");
    }

    #[test]
    fn joins_nested_object_paths() {
        let url = BlobUrl::parse(
            "https://acct.blob.core.windows.net/insights-logs/resourceId=/y=2026/m=08/log.json",
        )
        .unwrap();

        assert_eq!(url.container(), "insights-logs");
        assert_eq!(url.path(), "resourceId=/y=2026/m=08/log.json");
    }

    #[test]
    fn rejects_unparsable_input() {
        assert!(matches!(
            BlobUrl::parse("not a url"),
            Err(BlobUrlError::Parse(_))
        ));
    }

    #[test]
    fn rejects_url_without_container() {
        assert_eq!(
            BlobUrl::parse("https://acct.blob.core.windows.net"),
            Err(BlobUrlError::MissingContainer)
        );
        assert_eq!(
            BlobUrl::parse("https://acct.blob.core.windows.net/"),
            Err(BlobUrlError::MissingContainer)
        );
    }

    #[test]
    fn rejects_url_without_object_path() {
        assert_eq!(
            BlobUrl::parse("https://acct.blob.core.windows.net/c"),
            Err(BlobUrlError::MissingObjectPath)
        );
        assert_eq!(
            BlobUrl::parse("https://acct.blob.core.windows.net/c/"),
            Err(BlobUrlError::MissingObjectPath)
        );
    }

    #[test]
    fn display_reconstructs_reference() {
        let input = "https://acct.blob.core.windows.net/c/dir/log1.json";
        let url = BlobUrl::parse(input).unwrap();
        assert_eq!(url.to_string(), input);
    }

    #[test]
    fn from_str_matches_parse() {
        let url: BlobUrl = "https://acct.blob.core.windows.net/c/log1.json"
            .parse()
            .unwrap();
        assert_eq!(url.account(), "acct");
    }
}
