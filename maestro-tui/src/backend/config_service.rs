//! 连接偏好
//!
//! 上次成功连接的端点与 TLS 开关保存在
//! `<config dir>/maestro-cli/tui.json`，启动时预填连接表单。
//! Token 永不落盘。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// 连接偏好
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// 上次使用的 HTTP 端点
    pub http_endpoint: Option<String>,
    /// 上次是否跳过 TLS 校验
    pub insecure: bool,
}

/// 偏好存取 trait
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// 加载偏好；文件不存在时返回默认值
    async fn load(&self) -> Result<Preferences>;

    /// 保存偏好
    async fn save(&self, prefs: &Preferences) -> Result<()>;
}

/// 获取默认偏好文件路径
pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("maestro-cli")
        .join("tui.json")
}

/// 基于 JSON 文件的偏好存储
#[derive(Debug, Clone)]
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(default_preferences_path())
    }
}

#[async_trait]
impl ConfigService for LocalConfigService {
    async fn load(&self) -> Result<Preferences> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))
    }

    async fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "Saved connection preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let service = LocalConfigService::new(dir.path().join("absent.json"));
        let prefs = service.load().await.unwrap_or_else(|e| panic!("load: {e}"));
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let service = LocalConfigService::new(dir.path().join("nested").join("tui.json"));
        let prefs = Preferences {
            http_endpoint: Some("https://maestro:8000".to_string()),
            insecure: true,
        };

        service.save(&prefs).await.unwrap_or_else(|e| panic!("save: {e}"));
        let loaded = service.load().await.unwrap_or_else(|e| panic!("load: {e}"));
        assert_eq!(loaded, prefs);

        let raw = fs::read_to_string(service.path()).await.unwrap_or_default();
        assert!(raw.contains("httpEndpoint"));
        assert!(!raw.contains("token"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("tui.json");
        fs::write(&path, "{not json").await.unwrap_or_else(|e| panic!("write: {e}"));
        assert!(LocalConfigService::new(path).load().await.is_err());
    }
}
