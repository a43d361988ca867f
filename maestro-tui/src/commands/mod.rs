//!
//! src/commands/mod.rs
//! 子命令入口
//!
//!     maestro-cli tui         交互式仪表盘
//!     maestro-cli wait        等待 ManifestWork 满足条件（一次性）
//!     maestro-cli version     版本信息
//!
//! 连接参数（端点、token、TLS）由全局参数给出，三个子命令共用。
//!

pub mod tui;
pub mod version;
pub mod wait;

use anyhow::{Context, Result};
use maestro_client::{ClientConfig, DEFAULT_HTTP_ENDPOINT};

use crate::cli::GlobalArgs;

/// 解析 token：`--token` / `MAESTRO_TOKEN` 优先，其次 `--token-file`（去除首尾空白）
pub async fn resolve_token(global: &GlobalArgs) -> Result<Option<String>> {
    if let Some(token) = global.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(Some(token.to_string()));
    }
    let Some(path) = &global.token_file else {
        return Ok(None);
    };
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read token file {}", path.display()))?;
    let token = content.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

/// 一次性命令使用的客户端配置
pub async fn client_config(global: &GlobalArgs) -> Result<ClientConfig> {
    Ok(ClientConfig {
        http_endpoint: global
            .http_endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HTTP_ENDPOINT.to_string()),
        token: resolve_token(global).await?,
        insecure: global.insecure,
        ..ClientConfig::default()
    })
}
