//! The backend contract consumed by the dashboard and the wait command.

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::types::{Consumer, WorkDetail, WorkSummary};

/// Operations against a Maestro-compatible backend.
///
/// Every call is independent and fallible; implementations hold no
/// per-call state, so one instance can be shared across tasks.
#[async_trait]
pub trait MaestroApi: Send + Sync {
    /// List every consumer.
    async fn list_consumers(&self) -> ClientResult<Vec<Consumer>>;

    /// Register a new consumer.
    async fn create_consumer(&self, name: &str) -> ClientResult<Consumer>;

    /// Delete a consumer by id.
    async fn delete_consumer(&self, id: &str) -> ClientResult<()>;

    /// List the work bundles addressed to one consumer.
    async fn list_work(&self, consumer_name: &str) -> ClientResult<Vec<WorkSummary>>;

    /// Fetch the full record of one work bundle.
    async fn get_work_detail(&self, id: &str) -> ClientResult<WorkDetail>;

    /// Delete a work bundle by id.
    async fn delete_work(&self, id: &str) -> ClientResult<()>;

    /// Fail with [`ClientError::NotFound`] unless a consumer with this name exists.
    async fn validate_consumer(&self, name: &str) -> ClientResult<()> {
        let consumers = self.list_consumers().await?;
        if consumers.iter().any(|c| c.name == name) {
            Ok(())
        } else {
            Err(ClientError::not_found("consumer", name))
        }
    }

    /// Resolve a work bundle by name within one consumer and fetch its detail.
    async fn get_work_by_name(&self, consumer_name: &str, name: &str) -> ClientResult<WorkDetail> {
        let items = self.list_work(consumer_name).await?;
        let Some(summary) = items.into_iter().find(|w| w.name == name) else {
            return Err(ClientError::not_found("work", name));
        };
        self.get_work_detail(&summary.id).await
    }
}
