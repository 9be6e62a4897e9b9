//! urlfix — multisite URL fixer for subdirectory-based CMS installs.
//!
//! When the CMS core lives under a `/wp` subdirectory, the host framework's
//! generated home, site, and network URLs need patching before they are
//! rendered or redirected to. This crate registers pure string filters
//! against the host's `option_home`, `option_siteurl`, and
//! `network_site_url` extension points; which filters get installed is
//! decided once, from [`Config`], at composition time.

pub mod config;
pub mod errors;
pub mod hooks;
pub mod rewrite;

pub use config::{Config, HostEnv};
pub use errors::RewriteError;
pub use hooks::{FilterRegistry, HostHooks, OptionHook};
pub use rewrite::fallback::NetworkPathRewriter;
pub use rewrite::subdir::UrlFixer;
pub use rewrite::NetworkUrlRewrite;

/// Composition root: wire the strategy selected by `config` into the host's
/// extension points. Registers nothing on single-site installs.
pub fn install(config: &Config, hooks: &mut dyn HostHooks) {
    if !config.multisite {
        tracing::debug!("single-site install, no url filters registered");
        return;
    }

    match config.host {
        HostEnv::Valet => {
            tracing::info!(strategy = "subdir", "installing url filters");
            UrlFixer::new().install(hooks);
        }
        HostEnv::Other => {
            tracing::info!(strategy = "fallback", "installing url filters");
            NetworkPathRewriter::new().install(hooks);
        }
    }
}
