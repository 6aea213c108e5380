mod config;
mod error;
mod logging;
mod models;
mod reactive;
mod ui;

use std::io;

use color_eyre::eyre::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::config::{APP_NAME, load_config};
use crate::logging::{init_logging, log_config_loaded};
use crate::ui::{App, render};

fn main() -> Result<()> {
    color_eyre::install()?;

    // 配置文件路径 (~/.config/hello-field/config.toml)
    let config_path = config::config_dir()?.join("config.toml");
    let config = load_config(&config_path)?;

    // 日志文件路径 (~/.local/share/hello-field/hello-field.log)
    let log_path = config::data_dir()?.join(format!("{APP_NAME}.log"));
    init_logging(&log_path, config.log_level)?;
    log_config_loaded(&config_path, &config);

    // 创建应用状态
    let mut app = App::new(config.variant, config.placeholder);

    // 设置终端，ratatui::init 会安装恢复终端的 panic hook
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableBracketedPaste)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    let paste = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    paste?;

    info!("exiting");
    result
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if ui::handle_event(app, crossterm::event::read()?) {
            break;
        }
    }
    Ok(())
}
