//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入数据目录下的文件

use std::fs::OpenOptions;
use std::path::Path;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LogLevel};
use crate::error::Result;

/// 初始化 tracing，`RUST_LOG` 优先于配置中的级别
pub fn init_logging(log_path: &Path, level: LogLevel) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "logging initialized");
    Ok(())
}

/// 记录已加载的配置，须在 `init_logging` 之后调用
pub fn log_config_loaded(path: &Path, config: &Config) {
    info!(
        path = %path.display(),
        exists = path.exists(),
        variant = config.variant.name(),
        "config loaded"
    );
}
