//! 异步命令描述
//!
//! Update 层只返回命令描述，由 `Executor` 在事件循环之外执行。
//! 每条命令携带执行时需要的全部参数（客户端句柄、目标 id 等）的快照。

use maestro_client::ClientConfig;

use super::ClientHandle;
use crate::message::DetailOrigin;

/// 异步命令
#[derive(Debug)]
pub enum Command {
    /// 建立连接并拉取 Consumer 列表
    Connect(ClientConfig),
    /// 重新加载 Consumer 列表
    LoadConsumers { client: ClientHandle },
    /// 加载某个 Consumer 的 ManifestWork 列表
    LoadWork {
        client: ClientHandle,
        consumer: String,
    },
    /// 加载详情
    LoadDetail {
        client: ClientHandle,
        id: String,
        origin: DetailOrigin,
    },
    /// 新建 Consumer
    CreateConsumer { client: ClientHandle, name: String },
    /// 删除 Consumer
    DeleteConsumer { client: ClientHandle, id: String },
    /// 删除 ManifestWork
    DeleteWork { client: ClientHandle, id: String },
    /// 写入系统剪贴板
    CopyToClipboard(String),
    /// 100ms 后发送 SpinnerTick
    ScheduleSpinner,
    /// 5s 后发送 WatchTick
    ScheduleWatch,
}

impl Command {
    /// 日志中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            Command::Connect(_) => "connect",
            Command::LoadConsumers { .. } => "load_consumers",
            Command::LoadWork { .. } => "load_work",
            Command::LoadDetail { .. } => "load_detail",
            Command::CreateConsumer { .. } => "create_consumer",
            Command::DeleteConsumer { .. } => "delete_consumer",
            Command::DeleteWork { .. } => "delete_work",
            Command::CopyToClipboard(_) => "copy_to_clipboard",
            Command::ScheduleSpinner => "schedule_spinner",
            Command::ScheduleWatch => "schedule_watch",
        }
    }
}
