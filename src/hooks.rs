//! Host extension points.
//!
//! The CMS host exposes its URL construction as named filter hooks; this
//! module models that surface as a capability trait so the rewriters can be
//! wired up without reimplementing the host. `FilterRegistry` is the
//! reference implementation used by an embedding host and by the tests.

// ── Extension-point names ────────────────────────────────────

/// The two string-valued option filters. Wire names must match the host
/// exactly or the callbacks are never invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionHook {
    OptionHome,
    OptionSiteUrl,
}

impl OptionHook {
    /// The host-side filter tag.
    pub fn wire_name(self) -> &'static str {
        match self {
            OptionHook::OptionHome => "option_home",
            OptionHook::OptionSiteUrl => "option_siteurl",
        }
    }
}

/// Wire name of the three-parameter network URL filter.
pub const NETWORK_SITE_URL: &str = "network_site_url";

// ── Filter callbacks ─────────────────────────────────────────

/// Filter over a stored option value: receives the candidate string, returns
/// the corrected one.
pub type OptionFilter = Box<dyn Fn(String) -> String + Send + Sync>;

/// Filter over a computed network URL: `(url, path, scheme) -> url`.
/// `path` is the trailing segment already appended to `url`; `scheme` is
/// threaded through for host compatibility.
pub type NetworkFilter = Box<dyn Fn(String, &str, &str) -> String + Send + Sync>;

/// Registration surface the host (or its stand-in) exposes.
pub trait HostHooks {
    fn add_option_filter(&mut self, hook: OptionHook, filter: OptionFilter);
    fn add_network_site_url_filter(&mut self, filter: NetworkFilter);
}

// ── Reference registry ───────────────────────────────────────

/// In-process filter registry with the host's chain semantics: filters run
/// in registration order, each receiving the previous filter's output.
#[derive(Default)]
pub struct FilterRegistry {
    option_home: Vec<OptionFilter>,
    option_siteurl: Vec<OptionFilter>,
    network_site_url: Vec<NetworkFilter>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an option value through its filter chain.
    pub fn apply_option(&self, hook: OptionHook, value: String) -> String {
        let chain = match hook {
            OptionHook::OptionHome => &self.option_home,
            OptionHook::OptionSiteUrl => &self.option_siteurl,
        };
        chain.iter().fold(value, |v, f| f(v))
    }

    /// Run a computed network URL through the `network_site_url` chain.
    pub fn apply_network_site_url(&self, url: String, path: &str, scheme: &str) -> String {
        self.network_site_url
            .iter()
            .fold(url, |u, f| f(u, path, scheme))
    }

    /// Number of filters registered on an option hook.
    pub fn option_filter_count(&self, hook: OptionHook) -> usize {
        match hook {
            OptionHook::OptionHome => self.option_home.len(),
            OptionHook::OptionSiteUrl => self.option_siteurl.len(),
        }
    }

    /// Number of filters registered on `network_site_url`.
    pub fn network_filter_count(&self) -> usize {
        self.network_site_url.len()
    }
}

impl HostHooks for FilterRegistry {
    fn add_option_filter(&mut self, hook: OptionHook, filter: OptionFilter) {
        tracing::debug!(hook = hook.wire_name(), "filter registered");
        match hook {
            OptionHook::OptionHome => self.option_home.push(filter),
            OptionHook::OptionSiteUrl => self.option_siteurl.push(filter),
        }
    }

    fn add_network_site_url_filter(&mut self, filter: NetworkFilter) {
        tracing::debug!(hook = NETWORK_SITE_URL, "filter registered");
        self.network_site_url.push(filter);
    }
}

// ── Tests ────────────────────────────────────────────────────
