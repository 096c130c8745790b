use clutch_api::model::Region;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub discord_token: String,
    pub valorant_api_key: String,
    pub linked_accounts_path: PathBuf,
    pub default_region: Region,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_token: String::new(),
            valorant_api_key: String::new(),
            linked_accounts_path: PathBuf::from("linked_accounts.json"),
            default_region: Region::Eu,
        }
    }
}

impl Config {
    /// Optional TOML file from argv, overridden field by field from the
    /// environment.
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };

        config.discord_token = std::env::var("DISCORD_TOKEN")
            .ok()
            .unwrap_or(config.discord_token);
        config.valorant_api_key = std::env::var("VALORANT_API_KEY")
            .ok()
            .unwrap_or(config.valorant_api_key);
        config.linked_accounts_path = std::env::var("LINKED_ACCOUNTS_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(config.linked_accounts_path);
        if let Ok(region) = std::env::var("DEFAULT_REGION") {
            config.default_region = region.parse()?;
        }

        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }
}
