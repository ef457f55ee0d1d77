use crate::error::{Result, ShelfError};
use crate::model::Admin;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ADMIN_USERNAME: &str = "hasib";
const DEFAULT_ADMIN_PASSWORD: &str = "hasib1212";

pub const KEYS: &[&str] = &["data-file", "admin-username", "admin-password"];

/// Configuration for shelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Library data file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_admin_username() -> String {
    DEFAULT_ADMIN_USERNAME.to_string()
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "admin-username" => Some(self.admin_username.clone()),
            "admin-password" => Some(self.admin_password.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ShelfError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            "data-file" => self.data_file = PathBuf::from(value),
            "admin-username" => self.admin_username = value.to_string(),
            "admin-password" => self.admin_password = value.to_string(),
            _ => return Err(ShelfError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Value suitable for printing; the password is masked.
    pub fn display_value(&self, key: &str) -> Option<String> {
        match key {
            "admin-password" => self.get(key).map(|p| "*".repeat(p.chars().count())),
            _ => self.get(key),
        }
    }

    /// The admin identity for this process.
    pub fn admin(&self) -> Admin {
        Admin::new(&self.admin_username, &self.admin_password)
    }

    /// Resolves the data file against `cwd` unless it is already absolute.
    pub fn data_path(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.data_file, PathBuf::from("library_data.json"));
        assert_eq!(config.admin(), Admin::new("hasib", "hasib1212"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "admin_password": "s3cret" }"#,
        )
        .unwrap();

        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config.admin_username, "hasib");
        assert_eq!(config.admin_password, "s3cret");
        assert_eq!(config.data_file, PathBuf::from("library_data.json"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShelfConfig::default();
        config.set("data-file", "/srv/shelf/data.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("/srv/shelf/data.json"));
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = ShelfConfig::default();
        assert!(matches!(
            config.set("colour", "red"),
            Err(ShelfError::Config(_))
        ));
        assert!(matches!(
            config.set("admin-username", ""),
            Err(ShelfError::Config(_))
        ));
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_password_is_masked() {
        let config = ShelfConfig::default();
        assert_eq!(config.display_value("admin-password").unwrap(), "*********");
        assert_eq!(config.display_value("admin-username").unwrap(), "hasib");
        assert!(config.display_value("nope").is_none());
    }

    #[test]
    fn test_data_path_resolution() {
        let cwd = Path::new("/work");
        let config = ShelfConfig::default();
        assert_eq!(config.data_path(cwd), PathBuf::from("/work/library_data.json"));

        let mut absolute = ShelfConfig::default();
        absolute.set("data-file", "/var/lib/shelf.json").unwrap();
        assert_eq!(absolute.data_path(cwd), PathBuf::from("/var/lib/shelf.json"));
    }
}
