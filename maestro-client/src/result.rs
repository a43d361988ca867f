//! Status-result file written by the wait path for an external status reporter.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::types::WorkDetail;

/// Status token written while the condition is not yet met.
pub const STATUS_WAITING: &str = "Waiting";

/// Environment variable consulted when no results path is given.
pub const RESULTS_PATH_ENV: &str = "RESULTS_PATH";

/// One snapshot of a wait in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    pub name: String,
    pub consumer: String,
    /// [`STATUS_WAITING`], or the awaited expression once it is met.
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<WorkDetail>,
    pub timestamp: DateTime<Utc>,
}

/// Builds the record for one poll.
pub fn build_status_result(
    name: &str,
    consumer: &str,
    status: &str,
    message: impl Into<String>,
    details: Option<&WorkDetail>,
) -> StatusResult {
    StatusResult {
        name: name.to_string(),
        consumer: consumer.to_string(),
        status: status.to_string(),
        message: message.into(),
        details: details.cloned(),
        timestamp: Utc::now(),
    }
}

/// Writes `result` as pretty JSON, replacing the file atomically.
///
/// The record goes to a sibling temporary file first, so a reader never
/// observes a half-written document.
pub async fn write_result(path: &Path, result: &StatusResult) -> ClientResult<()> {
    let fail = |detail: String| result_file_error(path, detail);
    let body = encode(result, path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| fail(e.to_string()))?;
    }

    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, &body)
        .await
        .map_err(|e| fail(e.to_string()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| fail(e.to_string()))?;

    log::debug!("[maestro] wrote status '{}' to {}", result.status, path.display());
    Ok(())
}

/// Blocking form of [`write_result`] for synchronous poll callbacks.
pub fn write_result_blocking(path: &Path, result: &StatusResult) -> ClientResult<()> {
    let fail = |detail: String| result_file_error(path, detail);
    let body = encode(result, path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, &body).map_err(|e| fail(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| fail(e.to_string()))?;

    log::debug!("[maestro] wrote status '{}' to {}", result.status, path.display());
    Ok(())
}

fn encode(result: &StatusResult, path: &Path) -> ClientResult<Vec<u8>> {
    serde_json::to_vec_pretty(result).map_err(|e| result_file_error(path, e.to_string()))
}

fn tmp_path(path: &Path) -> std::ffi::OsString {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    tmp
}

fn result_file_error(path: &Path, detail: String) -> ClientError {
    ClientError::ResultFile {
        path: path.display().to_string(),
        detail,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("result.json");
        let result = build_status_result(
            "job-work",
            "agent1",
            STATUS_WAITING,
            "Waiting for condition 'Available'",
            None,
        );

        write_result(&path, &result).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: StatusResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.status, "Waiting");
        assert_eq!(back.consumer, "agent1");
        assert!(!text.contains("\"details\""));
    }

    #[tokio::test]
    async fn overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");

        let first = build_status_result("w", "c", STATUS_WAITING, "waiting", None);
        write_result(&path, &first).await.unwrap();
        let second = build_status_result("w", "c", "Available", "Condition 'Available' met", None);
        write_result(&path, &second).await.unwrap();

        let back: StatusResult =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.status, "Available");
        assert!(!dir.path().join("result.json.tmp").exists());
    }

    #[test]
    fn blocking_writer_matches_async_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("result.json");
        let result = build_status_result("w", "c", "Available", "Condition 'Available' met", None);

        write_result_blocking(&path, &result).unwrap();

        let back: StatusResult =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, result);
    }

    #[tokio::test]
    async fn unwritable_path_is_result_file_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by a file.
        let result = build_status_result("w", "c", STATUS_WAITING, "waiting", None);
        let blocker = dir.path().join("taken");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), b"x").unwrap();

        let err = write_result(&blocker, &result).await.unwrap_err();
        assert!(matches!(err, ClientError::ResultFile { .. }), "{err:?}");
    }
}
