use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// `network_site_url` supplied a path that does not terminate the URL.
    /// Slicing by length would mis-slice here, so the rewrite refuses instead.
    #[error("path {path:?} is not a suffix of url {url:?}")]
    PathNotSuffix { url: String, path: String },
}
