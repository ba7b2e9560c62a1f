use std::sync::Arc;
use std::time::Duration;

use crate::api::error;
use crate::modules::job::{
    repository::JobRepository,
    scheduler::{SchedulerClient, WAKE_COMMAND},
};

/// Delivers one wake command for every pending notification and marks them
/// sent. A single successful ping settles all pending rows, the scheduler
/// rescans its whole queue on `database`.
pub async fn flush_pending<R, S>(repo: &R, scheduler: &S) -> Result<usize, error::SystemError>
where
    R: JobRepository + Send + Sync,
    S: SchedulerClient + Send + Sync,
{
    let pending = repo.pending_notifications().await?;
    if pending.is_empty() {
        return Ok(0);
    }

    let output = scheduler
        .communicate(WAKE_COMMAND)
        .await
        .map_err(|err| error::SystemError::Scheduler(err.report().into()))?;
    if !output.is_empty() {
        log::debug!("Scheduler output: {output}");
    }

    let ids: Vec<i64> = pending.iter().map(|entry| entry.outbox_pk).collect();
    repo.mark_notifications_sent(&ids).await?;

    Ok(ids.len())
}

/// Background retry loop for notifications whose synchronous delivery
/// failed. Keeps a committed queue row from ending up orphaned.
pub fn spawn_dispatcher<R, S>(repo: Arc<R>, scheduler: Arc<S>, every: Duration)
where
    R: JobRepository + Send + Sync + 'static,
    S: SchedulerClient + Send + Sync + 'static,
{
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match flush_pending(repo.as_ref(), scheduler.as_ref()).await {
                Ok(0) => {}
                Ok(sent) => log::info!("Delivered {sent} pending scheduler notification(s)"),
                Err(err) => log::warn!("Scheduler notification retry failed: {err}"),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::job::repository::MockJobRepository;
    use crate::modules::job::scheduler::{MockSchedulerClient, SchedulerError};
    use crate::modules::job::schema::OutboxEntry;

    fn pending_entry(id: i64) -> OutboxEntry {
        OutboxEntry {
            outbox_pk: id,
            command: WAKE_COMMAND.to_string(),
            created_at: chrono::Utc::now(),
            sent_at: None,
        }
    }

    #[actix_web::test]
    async fn test_flush_skips_ping_when_nothing_is_pending() {
        let mut repo = MockJobRepository::new();
        repo.expect_pending_notifications().returning(|| Ok(Vec::new()));
        let mut scheduler = MockSchedulerClient::new();
        scheduler.expect_communicate().never();

        let sent = flush_pending(&repo, &scheduler).await.unwrap();
        assert_eq!(sent, 0);
    }

    #[actix_web::test]
    async fn test_flush_marks_all_pending_rows_after_one_ping() {
        let mut repo = MockJobRepository::new();
        repo.expect_pending_notifications()
            .returning(|| Ok(vec![pending_entry(1), pending_entry(2)]));
        repo.expect_mark_notifications_sent()
            .withf(|ids| *ids == [1, 2])
            .times(1)
            .returning(|_| Ok(()));
        let mut scheduler = MockSchedulerClient::new();
        scheduler.expect_communicate().times(1).returning(|_| Ok(String::new()));

        let sent = flush_pending(&repo, &scheduler).await.unwrap();
        assert_eq!(sent, 2);
    }

    #[actix_web::test]
    async fn test_flush_leaves_rows_pending_when_ping_fails() {
        let mut repo = MockJobRepository::new();
        repo.expect_pending_notifications().returning(|| Ok(vec![pending_entry(1)]));
        repo.expect_mark_notifications_sent().never();
        let mut scheduler = MockSchedulerClient::new();
        scheduler.expect_communicate().returning(|_| {
            Err(SchedulerError::Rejected {
                message: "scheduler error".to_string(),
                output: "scheduler output".to_string(),
            })
        });

        let err = flush_pending(&repo, &scheduler).await.unwrap_err();
        assert!(matches!(
            err,
            error::SystemError::Scheduler(msg) if msg == "scheduler error\nscheduler output"
        ));
    }
}
