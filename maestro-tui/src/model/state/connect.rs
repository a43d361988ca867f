//! 连接表单状态

use maestro_client::{ClientConfig, DEFAULT_HTTP_ENDPOINT};

use crate::error::AppError;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectField {
    #[default]
    Endpoint,
    Token,
    Insecure,
    Button,
}

impl ConnectField {
    /// 下一个字段（循环）
    pub fn next(self) -> Self {
        match self {
            ConnectField::Endpoint => ConnectField::Token,
            ConnectField::Token => ConnectField::Insecure,
            ConnectField::Insecure => ConnectField::Button,
            ConnectField::Button => ConnectField::Endpoint,
        }
    }

    /// 上一个字段（循环）
    pub fn prev(self) -> Self {
        match self {
            ConnectField::Endpoint => ConnectField::Button,
            ConnectField::Token => ConnectField::Endpoint,
            ConnectField::Insecure => ConnectField::Token,
            ConnectField::Button => ConnectField::Insecure,
        }
    }

    /// 在此字段按 Enter 是否直接连接
    pub fn submits(self) -> bool {
        matches!(self, ConnectField::Token | ConnectField::Button)
    }
}

/// 连接表单状态
#[derive(Debug, Clone, Default)]
pub struct ConnectState {
    /// HTTP 端点
    pub endpoint: String,
    /// Bearer token（显示时遮盖）
    pub token: String,
    /// 跳过 TLS 校验
    pub insecure: bool,
    /// 当前焦点字段
    pub focus: ConnectField,
    /// 表单内联错误
    pub error: Option<String>,
}

impl ConnectState {
    /// 用预设值创建表单
    pub fn new(endpoint: impl Into<String>, token: Option<String>, insecure: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.unwrap_or_default(),
            insecure,
            ..Self::default()
        }
    }

    /// 当前输入字段的文本（非输入字段为 None）
    fn input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ConnectField::Endpoint => Some(&mut self.endpoint),
            ConnectField::Token => Some(&mut self.token),
            ConnectField::Insecure | ConnectField::Button => None,
        }
    }

    pub fn input(&mut self, ch: char) {
        if let Some(text) = self.input_mut() {
            text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.input_mut() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 空格：只在复选框上切换
    pub fn toggle_insecure(&mut self) {
        if self.focus == ConnectField::Insecure {
            self.insecure = !self.insecure;
        }
    }

    /// 校验并生成客户端配置；端点为空时是校验错误
    pub fn to_config(&self) -> Result<ClientConfig, AppError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AppError::Validation(
                "HTTP endpoint must not be empty".to_string(),
            ));
        }
        let token = self.token.trim();
        Ok(ClientConfig {
            http_endpoint: endpoint.to_string(),
            token: (!token.is_empty()).then(|| token.to_string()),
            insecure: self.insecure,
            ..ClientConfig::default()
        })
    }

    /// 端点输入框的占位符
    pub fn endpoint_placeholder() -> &'static str {
        DEFAULT_HTTP_ENDPOINT
    }
}
