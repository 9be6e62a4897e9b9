//! Integration tests for strategy selection and filter wiring.
//!
//! These tests verify:
//! 1. `install()` wires the right strategy into the right extension points
//! 2. The registry drives registered filters with host filter-chain semantics
//! 3. The end-to-end URL corrections match what the CMS host expects
//! 4. Repeated application through the hooks is idempotent

use std::sync::Once;

use urlfix::{install, Config, FilterRegistry, HostEnv, OptionHook};

static INIT: Once = Once::new();

/// Route filter logging to the test output when RUST_LOG is set.
fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn config(multisite: bool, host: HostEnv) -> Config {
    Config { multisite, host }
}

fn registry_for(cfg: &Config) -> FilterRegistry {
    init_tracing();
    let mut reg = FilterRegistry::new();
    install(cfg, &mut reg);
    reg
}

mod strategy_selection_tests {
    use super::*;

    /// Single-site installs must not get any filters at all.
    #[test]
    fn test_single_site_registers_nothing() {
        let reg = registry_for(&config(false, HostEnv::Valet));

        assert_eq!(reg.option_filter_count(OptionHook::OptionHome), 0);
        assert_eq!(reg.option_filter_count(OptionHook::OptionSiteUrl), 0);
        assert_eq!(reg.network_filter_count(), 0);
    }

    /// Valet hosts get the full subdirectory fixer on all three hooks.
    #[test]
    fn test_valet_installs_subdir_fixer() {
        let reg = registry_for(&config(true, HostEnv::Valet));

        assert_eq!(reg.option_filter_count(OptionHook::OptionHome), 1);
        assert_eq!(reg.option_filter_count(OptionHook::OptionSiteUrl), 1);
        assert_eq!(reg.network_filter_count(), 1);
    }

    /// Everything else gets only the network-path fallback.
    #[test]
    fn test_other_hosts_install_fallback_only() {
        let reg = registry_for(&config(true, HostEnv::Other));

        assert_eq!(reg.option_filter_count(OptionHook::OptionHome), 0);
        assert_eq!(reg.option_filter_count(OptionHook::OptionSiteUrl), 0);
        assert_eq!(reg.network_filter_count(), 1);
    }
}

mod valet_pipeline_tests {
    use super::*;

    fn valet_registry() -> FilterRegistry {
        registry_for(&config(true, HostEnv::Valet))
    }

    #[test]
    fn test_home_url_loses_admin_suffix() {
        let reg = valet_registry();
        assert_eq!(
            reg.apply_option(OptionHook::OptionHome, "http://example.test/wp".into()),
            "http://example.test"
        );
        assert_eq!(
            reg.apply_option(OptionHook::OptionHome, "http://example.test".into()),
            "http://example.test"
        );
    }

    #[test]
    fn test_site_url_gains_admin_suffix() {
        let reg = valet_registry();
        assert_eq!(
            reg.apply_option(OptionHook::OptionSiteUrl, "http://example.test".into()),
            "http://example.test/wp"
        );
        assert_eq!(
            reg.apply_option(OptionHook::OptionSiteUrl, "http://example.test/wp".into()),
            "http://example.test/wp"
        );
    }

    #[test]
    fn test_network_url_gains_admin_dir() {
        let reg = valet_registry();
        assert_eq!(
            reg.apply_network_site_url("http://example.test/network/".into(), "network/", "http"),
            "http://example.test/wp/network/"
        );
        assert_eq!(
            reg.apply_network_site_url(
                "http://example.test/wp/network/".into(),
                "network/",
                "http"
            ),
            "http://example.test/wp/network/"
        );
    }

    /// A path the host never should have produced passes through untouched
    /// rather than mis-slicing the URL.
    #[test]
    fn test_network_url_guard_passes_through() {
        let reg = valet_registry();
        assert_eq!(
            reg.apply_network_site_url("http://example.test/a/".into(), "b/", "http"),
            "http://example.test/a/"
        );
    }

    #[test]
    fn test_option_filters_idempotent_through_hooks() {
        let reg = valet_registry();

        let home = reg.apply_option(OptionHook::OptionHome, "http://example.test/wp".into());
        assert_eq!(reg.apply_option(OptionHook::OptionHome, home.clone()), home);

        let site = reg.apply_option(OptionHook::OptionSiteUrl, "http://example.test".into());
        assert_eq!(reg.apply_option(OptionHook::OptionSiteUrl, site.clone()), site);
    }
}

mod fallback_pipeline_tests {
    use super::*;

    fn fallback_registry() -> FilterRegistry {
        registry_for(&config(true, HostEnv::Other))
    }

    #[test]
    fn test_login_url_gets_prefixed() {
        let reg = fallback_registry();
        assert_eq!(
            reg.apply_network_site_url(
                "http://example.test/wp-login.php".into(),
                "wp-login.php",
                "login"
            ),
            "http://example.test/wp/wp-login.php"
        );
    }

    #[test]
    fn test_network_admin_url_gets_prefixed() {
        let reg = fallback_registry();
        assert_eq!(
            reg.apply_network_site_url(
                "http://example.test/wp-admin/network/".into(),
                "wp-admin/network/",
                "https"
            ),
            "http://example.test/wp/wp-admin/network/"
        );
    }

    #[test]
    fn test_prefixed_urls_left_alone() {
        let reg = fallback_registry();
        assert_eq!(
            reg.apply_network_site_url(
                "http://example.test/wp/wp-login.php".into(),
                "wp-login.php",
                "login"
            ),
            "http://example.test/wp/wp-login.php"
        );
    }

    #[test]
    fn test_unrelated_urls_pass_through() {
        let reg = fallback_registry();
        assert_eq!(
            reg.apply_network_site_url(
                "http://example.test/wp-admin/settings.php".into(),
                "wp-admin/settings.php",
                "admin"
            ),
            "http://example.test/wp-admin/settings.php"
        );
    }

    #[test]
    fn test_fallback_idempotent_through_hooks() {
        let reg = fallback_registry();
        let once = reg.apply_network_site_url(
            "http://example.test/wp-signup.php".into(),
            "wp-signup.php",
            "http",
        );
        assert_eq!(
            reg.apply_network_site_url(once.clone(), "wp-signup.php", "http"),
            once
        );
    }
}
