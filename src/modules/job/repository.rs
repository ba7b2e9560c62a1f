use crate::api::error;
use crate::modules::job::schema::{JobEntity, JobQueueEntity, OutboxEntry};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait JobRepository {
    async fn create_job(
        &self,
        upload_id: i64,
        job_name: &str,
        user_id: i64,
    ) -> Result<JobEntity, error::SystemError>;

    /// Inserts the queue entry together with its scheduler-outbox row in one
    /// transaction, so a committed entry always has a pending notification.
    async fn create_queue_entry(
        &self,
        job_id: i64,
        queue_name: &str,
        args: &str,
    ) -> Result<JobQueueEntity, error::SystemError>;

    async fn pending_notifications(&self) -> Result<Vec<OutboxEntry>, error::SystemError>;

    async fn mark_notifications_sent(&self, ids: &[i64]) -> Result<(), error::SystemError>;
}
