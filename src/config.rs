// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{LensError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub client: ClientConfig,
    pub output: OutputConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub poll_interval_secs: u64,
    pub max_polls: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub pretty: bool,
    pub placeholder: String,
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    pub parallel_workers: usize,
    pub max_file_size_mb: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LISTING_LENS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LensError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| LensError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            client: ClientConfig {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_secs: 30,
                poll_interval_secs: 5,
                max_polls: 60,
            },
            output: OutputConfig {
                pretty: true,
                placeholder: "Not available".to_string(),
                export_dir: PathBuf::from("./exports"),
            },
            batch: BatchConfig {
                parallel_workers: 4,
                max_file_size_mb: 5,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.client.base_url.trim().is_empty() {
            return Err(LensError::Config("client.base_url must not be empty".to_string()));
        }

        if self.client.poll_interval_secs == 0 {
            return Err(LensError::Config(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.batch.parallel_workers == 0 {
            return Err(LensError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_poll_interval() {
        let mut config = Config::default_config();
        config.client.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lens.toml");
        fs::write(
            &path,
            r#"
[client]
base_url = "https://listings.example.com/api"
timeout_secs = 10
poll_interval_secs = 2
max_polls = 5

[output]
pretty = false
placeholder = "n/a"
export_dir = "out"

[batch]
parallel_workers = 2
max_file_size_mb = 1
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.client.base_url, "https://listings.example.com/api");
        assert_eq!(config.output.placeholder, "n/a");
        assert_eq!(config.batch.parallel_workers, 2);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(
            &path,
            r#"
[client]
base_url = ""
timeout_secs = 10
poll_interval_secs = 2
max_polls = 5

[output]
pretty = false
placeholder = "n/a"
export_dir = "out"

[batch]
parallel_workers = 2
max_file_size_mb = 1
"#,
        )
        .unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
