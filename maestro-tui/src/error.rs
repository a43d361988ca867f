//! 应用错误类型
//!
//! 所有异步命令的失败都归入 `AppError`，由 update 层转换为一行状态栏错误。

use maestro_client::ClientError;
use thiserror::Error;

/// 应用错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 后端调用失败
    #[error(transparent)]
    Client(#[from] ClientError),

    /// 系统剪贴板不可用
    #[error("clipboard: {0}")]
    Clipboard(#[from] arboard::Error),

    /// 用户输入无效
    #[error("{0}")]
    Validation(String),

    /// 后台任务异常终止
    #[error("background task failed: {0}")]
    Task(String),

    /// 文件读写失败
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 是否为预期内的错误（用于日志分级）
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Client(e) => e.is_expected(),
            Self::Validation(_) => true,
            Self::Clipboard(_) | Self::Task(_) | Self::Io(_) => false,
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }
}
