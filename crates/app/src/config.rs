use shared_types::ClientConfig;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Settings embedded from `config.toml`, with `LOAN_API_BASE_URL` (read at
/// build time) moving every endpoint to one host. A broken file falls back to
/// defaults.
pub fn load() -> ClientConfig {
    let config = ClientConfig::from_toml_str(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.toml is invalid, using defaults");
        ClientConfig::default()
    });
    config.with_base_url_override(option_env!("LOAN_API_BASE_URL"))
}
