//! Maestro CLI
//!
//! ## 架构
//!
//! 仪表盘采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新，返回待执行的命令 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 异步命令与外部资源 (`backend/`)
//!
//! 与界面无关的纯逻辑：
//! - **Render**: 详情的 JSON / YAML / 摘要渲染 (`render/`)
//! - **Search**: ANSI 感知的搜索与高亮 (`search/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析参数（clap）
//!     logging::init()         // 仪表盘只写日志文件，其余命令写 stderr
//!     commands::*::run()      // 分发子命令
//!
//! }
//!
//!
//! 当执行 `maestro-cli tui` 时：
//!     commands/tui.rs
//!         · 加载连接偏好，预填连接表单
//!         · init_terminal()           // from util/terminal.rs
//!         · app::run()                // 主循环，见 app.rs
//!         · restore_terminal()        // 无论成功与否，都恢复终端
//!
//! 当执行 `maestro-cli wait` 时：
//!     commands/wait.rs
//!         · 校验 Consumer 与 ManifestWork 存在
//!         · wait_for_condition()      // from maestro-client
//!         · 条件成立时退出码为 0，超时或出错时为 1
//!

mod app;
mod backend;
mod cli;
mod commands;
mod error;
mod event;
mod logging;
mod message;
mod model;
mod render;
mod search;
mod update;
mod util;
mod view;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui);
    if let Err(e) = logging::init(
        cli.global.verbose,
        logging::target_for(interactive, cli.global.log_file.clone()),
    ) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match dispatch(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Tui => commands::tui::run(&cli.global).await,
        Commands::Wait(args) => commands::wait::run(&cli.global, args).await,
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
