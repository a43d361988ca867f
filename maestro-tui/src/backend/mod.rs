//!
//! src/backend/mod.rs
//! Backend 层：异步命令与外部资源
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // Command：命令描述
//!         mod executor;           // Executor：在事件循环之外执行命令
//!         mod clipboard;          // 系统剪贴板（arboard）
//!         mod config_service;     // 连接偏好的 JSON 存储
//!
//!         pub struct ClientHandle // 共享、只读的后端客户端句柄
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 命令的生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update() 返回 Vec<Command>
//!         ↓
//!     app.rs 交给 Executor::execute()
//!         ↓
//!     tokio::spawn(...)           // 不阻塞事件循环
//!         ↓
//!     MaestroApi 调用 / 剪贴板 / 定时器
//!         ↓
//!     tx.send(AppMessage::Backend(..))   // 恰好一条完成消息
//!         ↓
//!     update() 合并结果
//!
//!     命令只持有 ClientHandle 的克隆（Arc），从不接触 App。
//!

mod clipboard;
mod command;
mod config_service;
mod executor;

use std::fmt;
use std::sync::Arc;

use maestro_client::MaestroApi;

pub use command::Command;
pub use config_service::{ConfigService, LocalConfigService, Preferences};
pub use executor::Executor;

/// 后端客户端句柄
///
/// 连接成功后由会话持有，命令执行时克隆一份快照。
#[derive(Clone)]
pub struct ClientHandle(Arc<dyn MaestroApi>);

impl ClientHandle {
    pub fn new(api: Arc<dyn MaestroApi>) -> Self {
        Self(api)
    }

    pub fn api(&self) -> &dyn MaestroApi {
        self.0.as_ref()
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientHandle(..)")
    }
}
