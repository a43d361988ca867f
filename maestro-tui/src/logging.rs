//! 日志初始化
//!
//! `RUST_LOG` 优先；否则默认 INFO，`--verbose` 时为 DEBUG。
//! maestro-client 通过 `log` 门面输出的记录由 tracing-subscriber 一并收集。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志输出位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// 标准错误（一次性命令）
    Stderr,
    /// 追加写入文件
    File(PathBuf),
    /// 不输出（仪表盘占用终端且未指定日志文件）
    Off,
}

/// 根据命令与参数选择日志输出位置
pub fn target_for(interactive: bool, log_file: Option<PathBuf>) -> LogTarget {
    match (log_file, interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Off,
        (None, false) => LogTarget::Stderr,
    }
}

/// 初始化全局日志
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = || {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    };

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(filter())
                .try_init()
                .context("failed to initialize logging")?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .with(filter())
                .try_init()
                .context("failed to initialize logging")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_logs_only_to_file() {
        assert_eq!(target_for(true, None), LogTarget::Off);
        assert_eq!(target_for(false, None), LogTarget::Stderr);
        assert_eq!(
            target_for(true, Some(PathBuf::from("tui.log"))),
            LogTarget::File(PathBuf::from("tui.log"))
        );
    }
}
