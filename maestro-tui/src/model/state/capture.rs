//! 输入捕获模式
//!
//! 同一时刻至多一个捕获模式（`Option<Capture>`）；
//! 捕获期间全部按键都交给它，直到 Esc 取消或 Enter 提交。

/// 待删除的对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Consumer { id: String, name: String },
    Work { id: String, name: String },
}

impl DeleteTarget {
    /// 确认弹窗中的提示语
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Consumer { name, .. } => format!("Delete consumer \"{name}\"?"),
            DeleteTarget::Work { name, .. } => format!("Delete ManifestWork \"{name}\"?"),
        }
    }
}

/// 输入捕获模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// Work 面板的过滤输入
    Filtering,
    /// 详情面板的搜索输入
    Searching,
    /// 新建 Consumer 弹窗
    CreatingConsumer {
        name: String,
        error: Option<String>,
    },
    /// 删除确认弹窗
    ConfirmingDelete(DeleteTarget),
}

impl Capture {
    /// 是否为弹窗类捕获
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Capture::CreatingConsumer { .. } | Capture::ConfirmingDelete(_)
        )
    }
}
