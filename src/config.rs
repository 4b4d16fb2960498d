use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// SQLite connection string; the DATABASE_URL env var takes precedence
    pub database_url: Option<String>,
    /// News items synced into the database at startup
    #[serde(default)]
    pub news: Vec<NewsEntry>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsEntry {
    /// ISO date, YYYY-MM-DD
    pub date: String,
    pub title: String,
    pub desc: String,
    pub content: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
