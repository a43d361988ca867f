//! 系统剪贴板

use crate::error::AppError;

/// 把文本写入系统剪贴板
///
/// arboard 是同步 API，放到阻塞线程池里执行。
pub async fn copy_to_clipboard(text: String) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || -> Result<(), AppError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    })
    .await?
}
