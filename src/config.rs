use crate::error::{HolocronError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "holocron.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolocronConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Endpoint path the GraphQL API is mounted at, without leading slash.
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_path() -> String {
    "api".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    /// The route the GraphQL endpoint is served on, e.g. `/api`.
    pub fn endpoint(&self) -> String {
        format!("/{}", self.path.trim_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://holocron.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseSettings {
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl HolocronConfig {
    /// Loads the nearest `holocron.toml` above `start_path`, falling back to
    /// defaults when there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HolocronError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: HolocronConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HolocronError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = HolocronConfig::discover(temp_dir.path()).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.endpoint(), "/api");
        assert!(config.server.graphiql);
        assert_eq!(config.database.url, "sqlite://holocron.db");
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_discover_searches_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 4000\npath = \"/graphql/\"\n\n[database]\nurl = \"sqlite::memory:\"\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = HolocronConfig::discover(&nested).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.endpoint(), "/graphql");
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.database.is_in_memory());
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut config = HolocronConfig::default();
        config.server.graphiql = false;
        config.logging.file = Some(PathBuf::from("logs/holocron.log"));
        config.save(&path).unwrap();

        let loaded = HolocronConfig::load(&path).unwrap();
        assert!(!loaded.server.graphiql);
        assert_eq!(loaded.logging.file, Some(PathBuf::from("logs/holocron.log")));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = HolocronConfig::load(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, HolocronError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = HolocronConfig::load(&path).unwrap_err();
        assert!(matches!(err, HolocronError::Toml(_)));
    }
}
