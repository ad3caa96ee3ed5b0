use serde::Deserialize;
use service_workslip::StaticAuthSettings;

use super::telemetry::TelemetryConfig;

const CONFIG_FILE: &str = "config";
const CONFIG_ENV_PREFIX: &str = "WORKSLIP";
const CONFIG_ENV_SEPARATOR: &str = "__";

#[derive(Default, Clone, Deserialize, Debug)]
pub struct OfficeConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub db: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub auth: StaticAuthSettings,
}

#[derive(Clone, Deserialize, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    pub bind_port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3001
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}

impl DatabaseConfig {
    fn default_url() -> String {
        Self::sqlite_url("./workslips.db")
    }

    /// Connection url of a SQLite file, created when missing.
    pub fn sqlite_url(path: &str) -> String {
        format!("sqlite://{path}?mode=rwc")
    }
}

/// `config.yaml` in the working directory, any yaml file passed as an
/// argument, then `WORKSLIP__*` environment variables.
pub fn build_config() -> anyhow::Result<config::Config> {
    let mut config = config::Config::builder().add_source(
        config::File::with_name(CONFIG_FILE)
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in std::env::args().skip(1) {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix(CONFIG_ENV_PREFIX)
            .separator(CONFIG_ENV_SEPARATOR)
            .try_parsing(true),
    );
    Ok(config.build()?)
}

impl OfficeConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config = build_config()?.try_deserialize::<OfficeConfig>()?;
        Ok(config.merge_env(|key| std::env::var(key).ok()))
    }

    /// Applies the plain variables older deployments were started with:
    /// `HOST`, `PORT`, `DB_PATH` and the login variables.
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|el| !el.trim().is_empty());
        if let Some(host) = lookup("HOST") {
            self.host.bind_address = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.trim().parse() {
                Ok(port) => self.host.bind_port = port,
                Err(e) => tracing::warn!("Ignoring PORT={port}: {e}"),
            }
        }
        if let Some(path) = lookup("DB_PATH") {
            self.db.url = DatabaseConfig::sqlite_url(&path);
        }
        self.auth = self.auth.merge_env(lookup);
        self
    }
}
