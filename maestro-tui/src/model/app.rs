//! 应用主状态结构

use std::time::Duration;

use ratatui::layout::Rect;

use super::state::{
    Capture, ConnectState, ConsumersState, DetailState, WatchState, WorkState,
};
use super::{FocusPanel, MainLayout, Screen};
use crate::backend::ClientHandle;
use crate::view::theme::Palette;

/// 加载动画帧
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// 加载动画间隔
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// 已建立的会话
#[derive(Debug, Clone)]
pub struct Session {
    /// 共享的后端客户端
    pub client: ClientHandle,
    /// 连接的端点（用于标题显示）
    pub endpoint: String,
}

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前屏幕
    pub screen: Screen,

    /// 会话（连接成功后存在）
    pub session: Option<Session>,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 当前捕获模式（至多一个）
    pub capture: Option<Capture>,

    // === 各屏幕 / 面板状态 ===
    /// 连接表单
    pub connect: ConnectState,
    /// Consumer 面板
    pub consumers: ConsumersState,
    /// ManifestWork 面板
    pub work: WorkState,
    /// 详情面板
    pub detail: DetailState,
    /// watch 调度
    pub watch: WatchState,

    /// 状态栏消息
    pub status: Option<StatusMessage>,

    /// 是否有请求在进行
    pub loading: bool,
    /// 加载动画当前帧
    pub spinner_frame: usize,
    /// 已排期、尚未触发的加载动画 tick
    pub spinner_pending: bool,

    /// 终端区域（由 Resize 更新）
    pub area: Rect,

    /// 调色板（启动时构造，只读）
    pub palette: Palette,
}

impl App {
    /// 创建新的应用实例
    pub fn new(connect: ConnectState, palette: Palette) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Connect,
            session: None,
            focus: FocusPanel::Consumers,
            capture: None,
            connect,
            consumers: ConsumersState::new(),
            work: WorkState::new(),
            detail: DetailState::new(),
            watch: WatchState::new(),
            status: None,
            loading: false,
            spinner_frame: 0,
            spinner_pending: false,
            area: Rect::default(),
            palette,
        }
    }

    /// 当前主界面布局
    pub fn layout(&self) -> MainLayout {
        MainLayout::new(self.area)
    }

    /// 设置状态消息（清除错误）
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    /// 设置错误消息（替换状态消息）
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Error(message.into()));
    }

    /// 当前加载动画帧
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// 会话中的客户端句柄快照
    pub fn client(&self) -> Option<ClientHandle> {
        self.session.as_ref().map(|s| s.client.clone())
    }

    pub fn is_filtering(&self) -> bool {
        matches!(self.capture, Some(Capture::Filtering))
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.capture, Some(Capture::Searching))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ConnectState::default(), Palette::default())
    }
}
