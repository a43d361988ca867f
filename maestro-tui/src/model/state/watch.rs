//! Watch 调度状态
//!
//! 开启后每 5 秒刷新一次当前选中的详情。下一次 tick 只在上一次
//! watch 请求的结果被应用之后才排期，慢后端下请求不会叠加。
//!
//!     toggle() ──▶ tick_pending ──(5s)──▶ on_tick()
//!                      ▲                     │ 有选中项
//!                      │                     ▼
//!            on_fetch_done() ◀──── fetch_in_flight

use std::time::Duration;

/// Watch 刷新周期
pub const WATCH_INTERVAL: Duration = Duration::from_secs(5);

/// 一次 tick 的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    /// 发起一次详情请求
    Fetch,
    /// 没有选中项，只排期下一次 tick
    Reschedule,
    /// 什么都不做
    Idle,
}

/// Watch 状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchState {
    /// 是否开启
    pub enabled: bool,
    /// 已排期、尚未触发的 tick
    tick_pending: bool,
    /// 由 watch 发起、尚未应用结果的请求
    fetch_in_flight: bool,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换开关，返回是否需要排期 tick
    ///
    /// 关闭不会取消已发出的请求。
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.try_schedule()
    }

    /// 处理一次 tick
    pub fn on_tick(&mut self, has_selection: bool) -> WatchAction {
        self.tick_pending = false;
        if !self.enabled || self.fetch_in_flight {
            return WatchAction::Idle;
        }
        if has_selection {
            self.fetch_in_flight = true;
            WatchAction::Fetch
        } else {
            self.tick_pending = true;
            WatchAction::Reschedule
        }
    }

    /// watch 请求的结果（成功或失败）已应用，返回是否需要排期 tick
    pub fn on_fetch_done(&mut self) -> bool {
        self.fetch_in_flight = false;
        self.try_schedule()
    }

    fn try_schedule(&mut self) -> bool {
        if self.enabled && !self.tick_pending && !self.fetch_in_flight {
            self.tick_pending = true;
            true
        } else {
            false
        }
    }
}
