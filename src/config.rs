use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Variant;

pub const APP_NAME: &str = "hello-field";

/// 日志级别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 配置文件结构 (~/.config/hello-field/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    pub placeholder: String,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            placeholder: "name...".to_string(),
            log_level: LogLevel::default(),
        }
    }
}

/// 获取配置目录路径 (~/.config/hello-field/)
pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir().ok_or(AppError::NoDir("config"))?.join(APP_NAME))
}

/// 获取数据目录路径 (~/.local/share/hello-field/)，不存在则创建
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(AppError::NoDir("data"))?.join(APP_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.placeholder, "name...");
        assert_eq!(config.variant, Variant::Greeting);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "variant = \"echo\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.variant, Variant::Echo);
        assert_eq!(config.placeholder, "name...");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "variant = \"greeting\"\nplaceholder = \"type here\"\nlog_level = \"debug\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.placeholder, "type here");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_level.as_str(), "debug");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "variant = \"loud\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }
}
