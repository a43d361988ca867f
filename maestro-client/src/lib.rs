//! # maestro-client
//!
//! Client library for the Maestro work-dispatch API: consumers, the work
//! bundles (resource bundles) addressed to them, and a condition-wait
//! primitive built on top.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for TLS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use maestro_client::{ClientConfig, HttpClient, MaestroApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(&ClientConfig {
//!         http_endpoint: "http://localhost:8000".to_string(),
//!         ..ClientConfig::default()
//!     })?;
//!
//!     for consumer in client.list_consumers().await? {
//!         let work = client.list_work(&consumer.name).await?;
//!         println!("{}: {} bundle(s)", consumer.name, work.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Waiting for a condition
//!
//! ```rust,no_run
//! # use maestro_client::*;
//! # async fn example(client: &HttpClient) -> ClientResult<()> {
//! let expr = ConditionExpr::parse("Job:Complete OR Job:Failed")?;
//! let deadline = tokio::time::Instant::now() + DEFAULT_WAIT_TIMEOUT;
//! let detail = wait_for_condition(
//!     client,
//!     "agent1",
//!     "pi-job",
//!     &expr,
//!     DEFAULT_POLL_INTERVAL,
//!     deadline,
//!     |_, _| Ok(()),
//! )
//! .await?;
//! println!("{} reached '{expr}'", detail.name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ClientResult<T>`]. Transport failures and HTTP
//! 429 are retried with exponential backoff before they surface as
//! [`ClientError::Transport`] or [`ClientError::RateLimited`]; a missing
//! record is [`ClientError::NotFound`]; an elapsed wait is
//! [`ClientError::Timeout`].

mod client;
mod condition;
mod error;
mod http_client;
mod result;
mod traits;
mod types;
mod utils;
mod wait;

pub use client::{API_PREFIX, ClientConfig, DEFAULT_HTTP_ENDPOINT, HttpClient};
pub use condition::{ConditionExpr, ConditionTerm, DEFAULT_CONDITION};
pub use error::{ClientError, ClientResult};
pub use result::{
    RESULTS_PATH_ENV, STATUS_WAITING, StatusResult, build_status_result, write_result,
    write_result_blocking,
};
pub use traits::MaestroApi;
pub use types::{
    CONDITION_TRUE, Condition, Consumer, ManifestRef, ResourceStatus, WorkDetail, WorkHealth,
    WorkSummary,
};
pub use utils::log_sanitizer;
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, wait_for_condition};
