//! Shared test helpers: assertion macros and an in-memory `MaestroApi`.

#![allow(dead_code)]

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use maestro_client::{
    ClientError, ClientResult, Condition, Consumer, MaestroApi, ResourceStatus, WorkDetail,
    WorkSummary,
};
use serde_json::Value;

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub fn condition(t: &str, status: &str) -> Condition {
    Condition {
        condition_type: t.to_string(),
        status: status.to_string(),
        ..Condition::default()
    }
}

pub fn work(id: &str, name: &str, consumer: &str) -> WorkDetail {
    WorkDetail {
        id: id.to_string(),
        name: name.to_string(),
        consumer_name: consumer.to_string(),
        version: 1,
        created_at: "2025-01-01T00:00:00Z".to_string(),
        updated_at: "2025-01-01T00:00:00Z".to_string(),
        conditions: vec![condition("Applied", "True")],
        manifests: Vec::new(),
        resource_status: Vec::new(),
        raw: Value::Null,
    }
}

/// In-memory backend.
///
/// `ready_after(n)` makes every detail fetch from the n-th on report
/// `Available=True` and a completed `Job`.
#[derive(Default)]
pub struct MockApi {
    consumers: RwLock<Vec<Consumer>>,
    work: RwLock<Vec<WorkDetail>>,
    ready_after: Option<usize>,
    fetch_delay: Option<Duration>,
    detail_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consumer(self, name: &str) -> Self {
        if let Ok(mut consumers) = self.consumers.write() {
            consumers.push(Consumer {
                id: format!("id-{name}"),
                name: name.to_string(),
            });
        }
        self
    }

    pub fn with_work(self, detail: WorkDetail) -> Self {
        if let Ok(mut work) = self.work.write() {
            work.push(detail);
        }
        self
    }

    pub fn ready_after(mut self, fetches: usize) -> Self {
        self.ready_after = Some(fetches);
        self
    }

    pub fn fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MaestroApi for MockApi {
    async fn list_consumers(&self) -> ClientResult<Vec<Consumer>> {
        Ok(self.consumers.read().map(|c| c.clone()).unwrap_or_default())
    }

    async fn create_consumer(&self, name: &str) -> ClientResult<Consumer> {
        let consumer = Consumer {
            id: format!("id-{name}"),
            name: name.to_string(),
        };
        if let Ok(mut consumers) = self.consumers.write() {
            consumers.push(consumer.clone());
        }
        Ok(consumer)
    }

    async fn delete_consumer(&self, id: &str) -> ClientResult<()> {
        if let Ok(mut consumers) = self.consumers.write() {
            consumers.retain(|c| c.id != id);
        }
        Ok(())
    }

    async fn list_work(&self, consumer_name: &str) -> ClientResult<Vec<WorkSummary>> {
        let work = self.work.read().map(|w| w.clone()).unwrap_or_default();
        Ok(work
            .into_iter()
            .filter(|w| w.consumer_name == consumer_name)
            .map(|w| WorkSummary {
                id: w.id,
                name: w.name,
                consumer_name: w.consumer_name,
                conditions: w.conditions,
            })
            .collect())
    }

    async fn get_work_detail(&self, id: &str) -> ClientResult<WorkDetail> {
        let call = self.detail_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }

        let found = self
            .work
            .read()
            .ok()
            .and_then(|w| w.iter().find(|d| d.id == id).cloned());
        let Some(mut detail) = found else {
            return Err(ClientError::not_found("work", id));
        };

        if self.ready_after.is_some_and(|n| call >= n) {
            detail.conditions.push(condition("Available", "True"));
            detail.resource_status.push(ResourceStatus {
                kind: "Job".to_string(),
                name: "pi".to_string(),
                namespace: Some("default".to_string()),
                conditions: vec![condition("Complete", "True")],
            });
        }
        Ok(detail)
    }

    async fn delete_work(&self, id: &str) -> ClientResult<()> {
        if let Ok(mut work) = self.work.write() {
            work.retain(|w| w.id != id);
        }
        Ok(())
    }
}
