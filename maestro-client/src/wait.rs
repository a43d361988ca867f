//! Condition-wait primitive: poll a work bundle until an expression holds.

use std::time::Duration;

use tokio::time::{Instant, sleep_until, timeout_at};

use crate::condition::ConditionExpr;
use crate::error::{ClientError, ClientResult};
use crate::traits::MaestroApi;
use crate::types::WorkDetail;

/// Default interval between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default overall wait budget.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Polls `consumer/name` until `expr` holds or `deadline` passes.
///
/// The first poll is issued immediately, then one every `poll_interval`.
/// When the next poll would start at or after the deadline the wait ends
/// with [`ClientError::Timeout`]; a poll still running at the deadline is
/// abandoned the same way. `on_poll` runs after every successful fetch
/// with the fetched detail and whether the expression held; an error from
/// it, or from the fetch itself, ends the wait with that error.
pub async fn wait_for_condition<F>(
    api: &dyn MaestroApi,
    consumer: &str,
    name: &str,
    expr: &ConditionExpr,
    poll_interval: Duration,
    deadline: Instant,
    mut on_poll: F,
) -> ClientResult<WorkDetail>
where
    F: FnMut(&WorkDetail, bool) -> ClientResult<()> + Send,
{
    let started = Instant::now();
    let timed_out = || ClientError::Timeout {
        expression: expr.to_string(),
        waited: deadline.saturating_duration_since(started),
    };

    let mut next_poll = started;
    let mut polls = 0_u32;

    loop {
        polls += 1;
        let detail = timeout_at(deadline, api.get_work_by_name(consumer, name))
            .await
            .map_err(|_| timed_out())??;

        let met = expr.is_met(&detail);
        log::debug!("[maestro] poll #{polls} of {consumer}/{name}: '{expr}' met={met}");
        on_poll(&detail, met)?;
        if met {
            return Ok(detail);
        }

        next_poll += poll_interval;
        if next_poll >= deadline {
            log::warn!("[maestro] gave up on '{expr}' for {consumer}/{name} after {polls} poll(s)");
            return Err(timed_out());
        }
        sleep_until(next_poll).await;
    }
}
