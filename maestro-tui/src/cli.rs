//! 命令行参数

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use maestro_client::{DEFAULT_CONDITION, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};

/// Browse and manage Maestro consumers and ManifestWorks
#[derive(Debug, Parser)]
#[command(name = "maestro-cli", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 所有子命令共用的连接与日志参数
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Maestro HTTP API endpoint
    #[arg(long, global = true, env = "MAESTRO_HTTP_ENDPOINT")]
    pub http_endpoint: Option<String>,

    /// Bearer token sent with every request
    #[arg(
        long,
        global = true,
        env = "MAESTRO_TOKEN",
        hide_env_values = true,
        conflicts_with = "token_file"
    )]
    pub token: Option<String>,

    /// Read the bearer token from a file
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file (the dashboard never logs to the terminal)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive terminal dashboard
    Tui,

    /// Wait for a ManifestWork to reach a condition
    Wait(WaitArgs),

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Args)]
pub struct WaitArgs {
    /// ManifestWork name
    #[arg(long)]
    pub name: String,

    /// Target consumer (cluster) name
    #[arg(long)]
    pub consumer: String,

    /// Condition to wait for, e.g. 'Available', 'Job:Complete OR Job:Failed'
    #[arg(long = "for", default_value = DEFAULT_CONDITION)]
    pub condition: String,

    /// Overall wait budget
    #[arg(long, value_parser = parse_duration, default_value = "5m")]
    pub timeout: Duration,

    /// Interval between polls
    #[arg(long, value_parser = parse_duration, default_value = "1s")]
    pub poll_interval: Duration,

    /// Write a status-result JSON file after every poll
    #[arg(long)]
    pub results_path: Option<PathBuf>,
}

impl WaitArgs {
    /// 零值回退到默认值
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_WAIT_TIMEOUT
        } else {
            self.timeout
        }
    }

    pub fn effective_poll_interval(&self) -> Duration {
        if self.poll_interval.is_zero() {
            DEFAULT_POLL_INTERVAL
        } else {
            self.poll_interval
        }
    }
}

/// 解析时长：`500ms`、`30s`、`5m`、`1h` 或纯秒数
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (digits, unit) = input.split_at(split);

    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{input}'"))?;

    let seconds = |factor: u64| {
        value
            .checked_mul(factor)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration '{input}' is too large"))
    };

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "" | "s" => seconds(1),
        "m" => seconds(60),
        "h" => seconds(3600),
        _ => Err(format!("invalid duration unit '{unit}' (use ms, s, m or h)")),
    }
}
