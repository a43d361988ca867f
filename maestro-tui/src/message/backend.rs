//! 异步命令的完成消息
//!
//! 每条命令完成时恰好产生一条 `BackendMessage`。

use maestro_client::{Consumer, WorkDetail, WorkSummary};

use crate::backend::ClientHandle;
use crate::error::AppError;

/// 详情请求的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrigin {
    /// 用户选择或刷新
    User,
    /// watch 定时刷新
    Watch,
}

/// 命令完成消息
#[derive(Debug)]
pub enum BackendMessage {
    /// 连接握手完成（客户端 + 首次 Consumer 列表）
    Connected(Result<(ClientHandle, Vec<Consumer>), AppError>),
    /// Consumer 列表
    ConsumersLoaded(Result<Vec<Consumer>, AppError>),
    /// 某个 Consumer 的 ManifestWork 列表
    WorkLoaded {
        consumer: String,
        result: Result<Vec<WorkSummary>, AppError>,
    },
    /// 详情
    DetailLoaded {
        origin: DetailOrigin,
        result: Result<WorkDetail, AppError>,
    },
    /// 新建 Consumer
    ConsumerCreated(Result<Consumer, AppError>),
    /// 删除 Consumer
    ConsumerDeleted(Result<(), AppError>),
    /// 删除 ManifestWork
    WorkDeleted(Result<(), AppError>),
    /// 写入剪贴板
    Copied(Result<(), AppError>),
}
