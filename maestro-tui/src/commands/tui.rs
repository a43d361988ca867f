//! `tui` 子命令：交互式仪表盘
//!
//!     Preferences::load()         // 上次成功连接的端点与 TLS 开关
//!     initial_form()              // 参数 > 偏好 > 空（显示占位符）
//!     init_terminal()
//!     app::run()
//!     restore_terminal()          // 无论成功与否

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::resolve_token;
use crate::app;
use crate::backend::{ConfigService, Executor, LocalConfigService, Preferences};
use crate::cli::GlobalArgs;
use crate::model::state::ConnectState;
use crate::model::App;
use crate::util::{init_terminal, restore_terminal};
use crate::view::theme::Palette;

pub async fn run(global: &GlobalArgs) -> Result<()> {
    let prefs_service = Arc::new(LocalConfigService::default());
    let prefs = match prefs_service.load().await {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable connection preferences");
            Preferences::default()
        }
    };

    let token = resolve_token(global).await?;
    let mut app = App::new(initial_form(global, &prefs, token), Palette::default());

    let (tx, rx) = mpsc::unbounded_channel();
    let executor = Executor::new(tx, prefs_service);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &executor, rx).await;
    restore_terminal(&mut terminal)?;

    result
}

/// 连接表单的初始值
fn initial_form(global: &GlobalArgs, prefs: &Preferences, token: Option<String>) -> ConnectState {
    let endpoint = global
        .http_endpoint
        .clone()
        .filter(|e| !e.trim().is_empty())
        .or_else(|| prefs.http_endpoint.clone())
        .unwrap_or_default();
    ConnectState::new(endpoint, token, global.insecure || prefs.insecure)
}
