//! URL rewrite strategies.
//!
//! Two mutually exclusive rewriters cover the hosting environments a
//! subdirectory multisite install runs under: [`subdir::UrlFixer`] for
//! Valet, [`fallback::NetworkPathRewriter`] for everything else. Exactly
//! one is installed, selected once at composition time.

pub mod fallback;
pub mod subdir;

/// The admin subdirectory segment as it appears at the end of a site URL.
pub const ADMIN_SUFFIX: &str = "/wp";

/// The same segment as it appears before a reattached network path.
pub const ADMIN_DIR: &str = "wp/";

/// The one capability both strategies share: correcting a computed network
/// site URL before the host renders or redirects to it.
pub trait NetworkUrlRewrite {
    /// `url` arrives with `path` already appended; `scheme` is threaded
    /// through unchanged for host compatibility.
    fn rewrite_network_site_url(&self, url: &str, path: &str, scheme: &str) -> String;
}
