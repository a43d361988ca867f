//!
//! src/render/mod.rs
//! 渲染原语：把详情转换为带 ANSI 前景色的文本
//!
//!
//! 有模块结构：
//!     src/render/mod.rs
//!         mod json;           // 结构化视图（JSON）逐行着色
//!         mod yaml;           // 映射视图（YAML）逐行着色
//!         mod detail;         // Formatted 视图
//!         mod ansi_text;      // ANSI 文本 → ratatui Text
//!
//!
//!     三种视图在详情加载完成时一次性生成（见 RenderedDetail），
//!     切换视图只是换一个缓存字符串，不重新请求也不重新着色。
//!
//!     着色只使用前景色（ESC[38;2;r;g;bm … ESC[39m）、粗体与下划线，
//!     背景色留给搜索高亮（ESC[42m / ESC[43m … ESC[49m）。
//!

pub mod ansi_text;
pub mod detail;
pub mod json;
pub mod yaml;

use maestro_client::WorkDetail;

use crate::error::AppError;
use crate::view::theme::Palette;

/// 一个详情的三种预渲染形式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDetail {
    /// Formatted 视图（着色）
    pub formatted: String,
    /// 规范 JSON（未着色）
    pub json: String,
    /// 规范 YAML（未着色）
    pub yaml: String,
    /// 着色后的 JSON
    pub json_colored: String,
    /// 着色后的 YAML
    pub yaml_colored: String,
}

impl RenderedDetail {
    /// 序列化并渲染详情
    pub fn build(work: &WorkDetail, palette: &Palette) -> Result<Self, AppError> {
        let json_text = work.to_json()?;
        let yaml_text = work.to_yaml()?;
        Ok(Self {
            formatted: detail::render_detail(Some(work), palette),
            json_colored: json::colorize_json(&json_text, palette),
            yaml_colored: yaml::colorize_yaml(&yaml_text, palette),
            json: json_text,
            yaml: yaml_text,
        })
    }
}
