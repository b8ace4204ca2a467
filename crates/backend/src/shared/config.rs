use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend (trunk `dist`)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of the upstream catalog, without the `/api` suffix
    pub base_url: String,
    /// Bearer token for the catalog API
    #[serde(default)]
    pub api_token: Option<String>,
    pub default_page_size: u32,
    pub timeout_secs: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[catalog]
base_url = "http://localhost:1337"
default_page_size = 12
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables `CATALOG_BASE_URL`, `CATALOG_API_TOKEN` and
/// `SERVER_PORT` override whatever was loaded.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_config()?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn load_file_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Config {
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CATALOG_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.catalog.base_url = url;
        }
        if let Some(token) = lookup("CATALOG_API_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.catalog.api_token = Some(token);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => tracing::warn!("Ignoring invalid SERVER_PORT '{}': {}", port, e),
            }
        }
    }
}
