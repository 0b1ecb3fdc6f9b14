use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub server: ServerSettings,
    pub limits: LimitSettings,
    pub oracles: OracleSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LimitSettings {
    pub oracle_timeout_ms: u64,
    pub max_concurrent_oracles: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OracleSettings {
    pub leak: OracleCommand,
    pub optimization: OracleCommand,
}

/// Program and arguments used to launch one oracle process.
#[derive(Debug, Deserialize, Clone)]
pub struct OracleCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollerConfig {
    pub poller: PollerSettingsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollerSettingsConfig {
    pub gateway_url: String,
    pub leak_interval_ms: u64,
    pub optimization_interval_ms: u64,
}

pub fn load_gateway_config() -> anyhow::Result<GatewayConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/gateway"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_poller_config() -> anyhow::Result<PollerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/poller"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
