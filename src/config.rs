use serde::Deserialize;

/// Hosting environment the shim is running under.
///
/// Valet serves the admin subdirectory itself, so generated URLs need the
/// full home/site/network treatment; every other host only needs the
/// network-path fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostEnv {
    Valet,
    #[default]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Whether the host install is a multisite network. When false the shim
    /// registers nothing — single-site URLs are already correct.
    pub multisite: bool,
    /// Which rewrite strategy to install. Set via WP_HOST env var; any value
    /// other than the literal `valet` (or no value) selects the fallback.
    pub host: HostEnv,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let multisite = match std::env::var("MULTISITE") {
        Ok(v) => parse_flag(&v)
            .ok_or_else(|| anyhow::anyhow!("MULTISITE must be a boolean, got {:?}", v))?,
        Err(_) => false,
    };

    let host = match std::env::var("WP_HOST").as_deref() {
        Ok("valet") => HostEnv::Valet,
        _ => HostEnv::Other,
    };

    Ok(Config { multisite, host })
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim() {
        "true" | "1" => Some(true),
        "false" | "0" | "" => Some(false),
        _ => None,
    }
}
