use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct JobEntity {
    pub job_pk: i64,
    pub job_upload_fk: i64,
    pub job_name: String,
    pub job_user_fk: i64,
    pub job_queued: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct JobQueueEntity {
    pub jq_pk: i64,
    pub jq_job_fk: i64,
    pub jq_type: String,
    pub jq_args: String,
}

/// One wakeup owed to the scheduler. Rows with `sent_at IS NULL` are
/// pending and get retried by the outbox dispatcher.
#[derive(Debug, Clone, FromRow)]
pub struct OutboxEntry {
    pub outbox_pk: i64,
    pub command: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub sent_at: Option<chrono::DateTime<chrono::Utc>>,
}
