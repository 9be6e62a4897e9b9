//! Network-path fallback rewriter.
//!
//! Hosts other than Valet serve the admin subdirectory transparently, but the
//! CMS still computes network admin and auth URLs against the site root.
//! This rewriter patches the known offenders — network admin panel, login,
//! activation, and signup scripts — to their `/wp`-prefixed form as they
//! pass through `network_site_url`.

use crate::hooks::HostHooks;
use crate::rewrite::{NetworkUrlRewrite, ADMIN_SUFFIX};

/// Paths rewritten to their `/wp`-prefixed form, checked in this order.
const PATHS_TO_FIX: &[&str] = &[
    "/wp-admin/network/",
    "/wp-login.php",
    "/wp-activate.php",
    "/wp-signup.php",
];

/// Rewrites the fixed set of network paths. Each entry is checked
/// independently against the evolving URL, so multiple offenders in one
/// value are all patched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkPathRewriter;

impl NetworkPathRewriter {
    pub fn new() -> Self {
        Self
    }

    /// Patch every bare offender in `url` to its `/wp`-prefixed form.
    /// URLs already carrying the prefixed form are left alone, which also
    /// makes repeated application a no-op.
    pub fn rewrite(&self, url: &str) -> String {
        let mut url = url.to_string();
        for bare in PATHS_TO_FIX {
            let fixed = format!("{ADMIN_SUFFIX}{bare}");
            if url.contains(bare) && !url.contains(&fixed) {
                tracing::debug!(hook = "network_site_url", path = bare, "prefixed network path");
                url = url.replacen(bare, &fixed, 1);
            }
        }
        url
    }

    /// Register the rewrite against `network_site_url`.
    pub fn install(self, hooks: &mut dyn HostHooks) {
        hooks.add_network_site_url_filter(Box::new(move |url, path, scheme| {
            self.rewrite_network_site_url(&url, path, scheme)
        }));
    }
}

impl NetworkUrlRewrite for NetworkPathRewriter {
    fn rewrite_network_site_url(&self, url: &str, _path: &str, _scheme: &str) -> String {
        self.rewrite(url)
    }
}

// ── Tests ────────────────────────────────────────────────────
