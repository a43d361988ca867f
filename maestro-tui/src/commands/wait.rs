//! `wait` 子命令：轮询 ManifestWork 直到条件表达式成立
//!
//! 每次轮询后（若给出了结果路径）写入一份状态结果文件，
//! 供外部状态上报器读取。Ctrl+C / SIGTERM 立即中止。

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use maestro_client::{
    build_status_result, wait_for_condition, write_result_blocking, ClientResult, ConditionExpr,
    HttpClient, MaestroApi, WorkDetail, RESULTS_PATH_ENV, STATUS_WAITING,
};
use tokio::time::Instant;

use super::client_config;
use crate::cli::{GlobalArgs, WaitArgs};

pub async fn run(global: &GlobalArgs, args: &WaitArgs) -> Result<()> {
    let config = client_config(global).await?;
    let client = HttpClient::new(&config).context("failed to create Maestro client")?;

    let results_path = args
        .results_path
        .clone()
        .or_else(|| std::env::var_os(RESULTS_PATH_ENV).map(PathBuf::from));

    tokio::select! {
        result = wait_for(&client, args, results_path.as_deref()) => {
            let detail = result?;
            tracing::info!(
                name = %detail.name,
                consumer = %detail.consumer_name,
                condition = %args.condition,
                "Condition met"
            );
            Ok(())
        }
        () = shutdown_signal() => {
            bail!("interrupted while waiting for condition '{}'", args.condition)
        }
    }
}

/// 校验目标存在后开始等待
async fn wait_for(
    api: &dyn MaestroApi,
    args: &WaitArgs,
    results_path: Option<&Path>,
) -> Result<WorkDetail> {
    let expr = ConditionExpr::parse(&args.condition)?;

    api.validate_consumer(&args.consumer).await?;
    match api.get_work_by_name(&args.consumer, &args.name).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => bail!(
            "ManifestWork {:?} not found in consumer {:?}",
            args.name,
            args.consumer
        ),
        Err(e) => return Err(e).context("failed to look up ManifestWork"),
    }

    let timeout = args.effective_timeout();
    let poll_interval = args.effective_poll_interval();
    let deadline = Instant::now()
        .checked_add(timeout)
        .with_context(|| format!("timeout {timeout:?} is too large"))?;
    tracing::info!(
        name = %args.name,
        consumer = %args.consumer,
        condition = %expr,
        timeout = ?timeout,
        poll_interval = ?poll_interval,
        "Waiting for condition"
    );

    let on_poll = |detail: &WorkDetail, met: bool| -> ClientResult<()> {
        let Some(path) = results_path else {
            return Ok(());
        };
        let result = if met {
            build_status_result(
                &args.name,
                &args.consumer,
                &args.condition,
                format!("Condition '{}' met", args.condition),
                Some(detail),
            )
        } else {
            build_status_result(
                &args.name,
                &args.consumer,
                STATUS_WAITING,
                format!("Waiting for condition '{}'", args.condition),
                Some(detail),
            )
        };
        // 回调是同步的；结果文件只有几 KB，在轮询任务上直接写入
        write_result_blocking(path, &result)
    };

    wait_for_condition(
        api,
        &args.consumer,
        &args.name,
        &expr,
        poll_interval,
        deadline,
        on_poll,
    )
    .await
    .with_context(|| format!("error waiting for condition '{}'", args.condition))
}

/// Ctrl+C，或 Unix 上的 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
