use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File as ConfigFile, FileFormat};
use eyre::{eyre, Context, Result};
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

const EXAMPLE_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    pub server_address: String,
    pub session_path: String,
    pub user_path: String,
    pub payment_publishable_key: String,
    pub request_timeout_ms: u64,
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn build_default() -> Result<ConfigBuilder<DefaultState>> {
        let data_dir = gymdesk_common::utils::data_dir();
        let session_path = data_dir.join("session");
        let user_path = data_dir.join("user");

        Ok(Config::builder()
            .set_default("server_address", "http://127.0.0.1:3001/api")?
            .set_default("session_path", session_path.to_str())?
            .set_default("user_path", user_path.to_str())?
            .set_default("payment_publishable_key", "")?
            .set_default("request_timeout_ms", 10_000)?
            .add_source(
                Environment::with_prefix("gymdesk")
                    .prefix_separator("_")
                    .separator("__"),
            ))
    }

    pub fn new() -> Result<Self> {
        let config_dir = gymdesk_common::utils::config_dir();
        let data_dir = gymdesk_common::utils::data_dir();

        create_dir_all(&config_dir)
            .wrap_err_with(|| format!("Failed to create dir {config_dir:?}"))?;
        create_dir_all(&data_dir).wrap_err_with(|| format!("Failed to create dir {data_dir:?}"))?;

        let mut config_file = if let Ok(p) = std::env::var("GYMDESK_CONFIG_DIR") {
            PathBuf::from(p)
        } else {
            config_dir
        };
        config_file.push("config.toml");

        let mut config_builder = Self::build_default()?;
        config_builder = if config_file.exists() {
            config_builder.add_source(ConfigFile::new(
                config_file.to_str().unwrap(),
                FileFormat::Toml,
            ))
        } else {
            let mut file = File::create(config_file).wrap_err("Failed to create config file")?;
            file.write_all(EXAMPLE_CONFIG.as_bytes())
                .wrap_err("Failed to write default config file")?;
            config_builder
        };

        let mut settings: Settings = config_builder
            .build()?
            .try_deserialize()
            .map_err(|e| eyre!("Failed to deserialize {}", e))?;

        settings.session_path = expand_shell(&settings.session_path)?;
        settings.user_path = expand_shell(&settings.user_path)?;

        Ok(settings)
    }
}

fn expand_shell(value: &str) -> Result<String> {
    Ok(shellexpand::full(value)?.to_string())
}
