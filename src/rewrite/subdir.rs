//! Subdirectory install fixer.
//!
//! On Valet the CMS core lives under a `/wp` subdirectory distinct from the
//! public site root, and the host's stored option values get it wrong in
//! both directions: the home URL must never carry the suffix, the site URL
//! always must, and computed network URLs need `wp/` spliced in ahead of
//! the reattached path.

use crate::errors::RewriteError;
use crate::hooks::{HostHooks, OptionHook};
use crate::rewrite::{NetworkUrlRewrite, ADMIN_DIR, ADMIN_SUFFIX};

/// Fixes the three classes of URL a subdirectory multisite install emits.
///
/// Stateless; construct one wherever the host hooks are being wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlFixer;

impl UrlFixer {
    pub fn new() -> Self {
        Self
    }

    /// Ensure the home URL does not end with the admin subdirectory.
    pub fn fix_home_url(&self, value: &str) -> String {
        match value.strip_suffix(ADMIN_SUFFIX) {
            Some(stripped) => {
                tracing::debug!(hook = "option_home", "stripped admin suffix");
                stripped.to_string()
            }
            None => value.to_string(),
        }
    }

    /// Ensure the site URL ends with the admin subdirectory.
    pub fn fix_site_url(&self, value: &str) -> String {
        if value.ends_with(ADMIN_SUFFIX) {
            value.to_string()
        } else {
            tracing::debug!(hook = "option_siteurl", "appended admin suffix");
            format!("{value}{ADMIN_SUFFIX}")
        }
    }

    /// Ensure a computed network URL carries `wp/` immediately before the
    /// reattached `path` segment. `scheme` is accepted for hook
    /// compatibility and unused.
    ///
    /// Degrades to a no-op (with a warning) when `path` does not actually
    /// terminate `url`; see [`Self::try_fix_network_site_url`].
    pub fn fix_network_site_url(&self, url: &str, path: &str, scheme: &str) -> String {
        match self.try_fix_network_site_url(url, path) {
            Ok(fixed) => fixed,
            Err(e) => {
                tracing::warn!(hook = "network_site_url", scheme, error = %e, "rewrite skipped");
                url.to_string()
            }
        }
    }

    /// Fallible core of [`Self::fix_network_site_url`]: strip the leading
    /// `/` from `path`, peel `path` off the end of `url`, splice in `wp/`
    /// if the base lacks it, reattach. An empty path is a valid (empty)
    /// suffix; a path that is not a suffix of `url` is refused.
    pub fn try_fix_network_site_url(&self, url: &str, path: &str) -> Result<String, RewriteError> {
        let path = path.trim_start_matches('/');
        let base = url
            .strip_suffix(path)
            .ok_or_else(|| RewriteError::PathNotSuffix {
                url: url.to_string(),
                path: path.to_string(),
            })?;

        if base.ends_with(ADMIN_DIR) {
            Ok(url.to_string())
        } else {
            tracing::debug!(hook = "network_site_url", "spliced admin dir");
            Ok(format!("{base}{ADMIN_DIR}{path}"))
        }
    }

    /// Register all three fixes against the host's extension points.
    pub fn install(self, hooks: &mut dyn HostHooks) {
        hooks.add_option_filter(
            OptionHook::OptionHome,
            Box::new(move |value| self.fix_home_url(&value)),
        );
        hooks.add_option_filter(
            OptionHook::OptionSiteUrl,
            Box::new(move |value| self.fix_site_url(&value)),
        );
        hooks.add_network_site_url_filter(Box::new(move |url, path, scheme| {
            self.fix_network_site_url(&url, path, scheme)
        }));
    }
}

impl NetworkUrlRewrite for UrlFixer {
    fn rewrite_network_site_url(&self, url: &str, path: &str, scheme: &str) -> String {
        self.fix_network_site_url(url, path, scheme)
    }
}

// ── Tests ────────────────────────────────────────────────────
