//! 命令执行器
//!
//! 每条命令在 tokio 运行时上独立执行，完成后向队列发送恰好一条消息。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use maestro_client::{ClientConfig, Consumer, HttpClient, MaestroApi};
use tokio::sync::mpsc::UnboundedSender;

use super::clipboard::copy_to_clipboard;
use super::config_service::{ConfigService, Preferences};
use super::{ClientHandle, Command};
use crate::error::AppError;
use crate::message::{AppMessage, BackendMessage};
use crate::model::state::WATCH_INTERVAL;
use crate::model::SPINNER_INTERVAL;

/// 命令执行器
#[derive(Clone)]
pub struct Executor {
    tx: UnboundedSender<AppMessage>,
    prefs: Arc<dyn ConfigService>,
}

impl Executor {
    pub fn new(tx: UnboundedSender<AppMessage>, prefs: Arc<dyn ConfigService>) -> Self {
        Self { tx, prefs }
    }

    /// 执行一条命令（不阻塞调用方）
    pub fn execute(&self, command: Command) {
        tracing::debug!(command = command.name(), "Dispatching command");

        match command {
            Command::ScheduleSpinner => self.after(SPINNER_INTERVAL, || AppMessage::SpinnerTick),
            Command::ScheduleWatch => self.after(WATCH_INTERVAL, || AppMessage::WatchTick),

            Command::Connect(config) => {
                let prefs = Arc::clone(&self.prefs);
                self.spawn(async move { BackendMessage::Connected(connect(config, prefs).await) });
            }
            Command::LoadConsumers { client } => self.spawn(async move {
                let result = client.api().list_consumers().await.map_err(Into::into);
                BackendMessage::ConsumersLoaded(result)
            }),
            Command::LoadWork { client, consumer } => self.spawn(async move {
                let result = client.api().list_work(&consumer).await.map_err(Into::into);
                BackendMessage::WorkLoaded { consumer, result }
            }),
            Command::LoadDetail { client, id, origin } => self.spawn(async move {
                let result = client.api().get_work_detail(&id).await.map_err(Into::into);
                BackendMessage::DetailLoaded { origin, result }
            }),
            Command::CreateConsumer { client, name } => self.spawn(async move {
                let result = client.api().create_consumer(&name).await.map_err(Into::into);
                BackendMessage::ConsumerCreated(result)
            }),
            Command::DeleteConsumer { client, id } => self.spawn(async move {
                let result = client.api().delete_consumer(&id).await.map_err(Into::into);
                BackendMessage::ConsumerDeleted(result)
            }),
            Command::DeleteWork { client, id } => self.spawn(async move {
                let result = client.api().delete_work(&id).await.map_err(Into::into);
                BackendMessage::WorkDeleted(result)
            }),
            Command::CopyToClipboard(text) => {
                self.spawn(async move { BackendMessage::Copied(copy_to_clipboard(text).await) });
            }
        }
    }

    /// 执行一批命令
    pub fn execute_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = BackendMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let message = future.await;
            if tx.send(AppMessage::Backend(message)).is_err() {
                tracing::debug!("Event loop closed before command completed");
            }
        });
    }

    fn after(&self, delay: Duration, message: fn() -> AppMessage) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // 队列关闭说明正在退出
            let _ = tx.send(message());
        });
    }
}

/// 建立客户端并完成一次握手
async fn connect(
    config: ClientConfig,
    prefs: Arc<dyn ConfigService>,
) -> Result<(ClientHandle, Vec<Consumer>), AppError> {
    let client = HttpClient::new(&config)?;
    let consumers = client.list_consumers().await?;
    tracing::info!(
        endpoint = client.base_url(),
        consumers = consumers.len(),
        "Connected"
    );

    let preferences = Preferences {
        http_endpoint: Some(config.http_endpoint.clone()),
        insecure: config.insecure,
    };
    if let Err(e) = prefs.save(&preferences).await {
        tracing::warn!(error = %e, "Failed to save connection preferences");
    }

    let api: Arc<dyn MaestroApi> = Arc::new(client);
    Ok((ClientHandle::new(api), consumers))
}
