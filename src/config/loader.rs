use super::types::Config;
use crate::error::ActivityError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of config initialization
#[derive(Debug, PartialEq)]
pub enum InitResult {
    /// Config was created at the given path
    Created(PathBuf),
    /// Config already existed at the given path
    AlreadyExists(PathBuf),
}

fn io_error(op: &str, path: &Path, err: std::io::Error) -> ActivityError {
    ActivityError::Config(format!("cannot {} {}: {}", op, path.display(), err))
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config named on the command line, or the default one
    pub fn load(explicit: Option<&Path>) -> Result<Config, ActivityError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Config::load(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ActivityError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path (~/.config/github-activity/config.toml)
    pub fn default_path() -> PathBuf {
        if let Some(dir) = dirs::config_dir() {
            dir.join("github-activity").join("config.toml")
        } else {
            PathBuf::from(".github-activity/config.toml")
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, ActivityError> {
        let config_path = ConfigLoader::default_path();

        if !config_path.exists() {
            return Ok(Config::default());
        }

        ConfigLoader::load_from_path(config_path)
    }

    /// Save configuration to the given location
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ActivityError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| io_error("write", path, e))?;
        Ok(())
    }

    /// Create a default config at `path` unless one is already there
    pub fn init_at<P: AsRef<Path>>(path: P) -> Result<InitResult, ActivityError> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            return Ok(InitResult::AlreadyExists(path));
        }

        Config::default().save_to(&path)?;
        Ok(InitResult::Created(path))
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), ActivityError> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(ActivityError::Config("api_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ActivityError::Config(format!(
                "api_url must start with http:// or https://, got {}",
                url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ActivityError::Config("user_agent must not be empty".into()));
        }

        if self.timeout_secs == 0 {
            return Err(ActivityError::Config(
                "timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String, ActivityError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Print configuration as TOML
    pub fn print<W: Write>(&self, out: &mut W) -> Result<(), ActivityError> {
        writeln!(out, "{}", self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("Failed to create file");
        file.write_all(content.as_bytes())
            .expect("Failed to write file");
        path
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "config.toml",
            "api_url = \"http://localhost:9999\"\ntimeout_secs = 2\n",
        );

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = ConfigLoader::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ActivityError::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "config.toml", "timeout_secs = \"soon\"");

        let err = ConfigLoader::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ActivityError::Config(_)));
    }

    #[test]
    fn test_init_creates_then_reports_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(
            Config::init_at(&path).unwrap(),
            InitResult::Created(path.clone())
        );
        assert_eq!(
            Config::init_at(&path).unwrap(),
            InitResult::AlreadyExists(path.clone())
        );

        let loaded = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_check() {
        assert!(Config::default().check().is_ok());

        let config = Config {
            api_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.check().is_err());

        let config = Config {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.check().is_err());

        let config = Config {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_print_writes_toml() {
        let mut buf = Vec::new();
        Config::default().print(&mut buf).unwrap();
        let content = String::from_utf8(buf).unwrap();
        assert!(content.contains("timeout_secs = 10"));
    }

    #[test]
    fn test_print_reports_closed_output() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = Config::default().print(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, ActivityError::Output(_)));
    }

    #[test]
    fn test_to_toml_contains_fields() {
        let config = Config {
            token: Some("secret".to_string()),
            ..Default::default()
        };
        let content = config.to_toml().unwrap();
        assert!(content.contains("api_url = \"https://api.github.com\""));
        assert!(content.contains("token = \"secret\""));
    }
}
