use crate::{
    api::error,
    modules::job::{
        repository::JobRepository,
        scheduler::WAKE_COMMAND,
        schema::{JobEntity, JobQueueEntity, OutboxEntry},
    },
};

#[derive(Clone)]
pub struct JobRepositoryPg {
    pool: sqlx::PgPool,
}

impl JobRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl JobRepository for JobRepositoryPg {
    async fn create_job(
        &self,
        upload_id: i64,
        job_name: &str,
        user_id: i64,
    ) -> Result<JobEntity, error::SystemError> {
        let job = sqlx::query_as::<_, JobEntity>(
            r#"
            INSERT INTO job (job_upload_fk, job_name, job_user_fk, job_queued)
            VALUES ($1, $2, $3, now())
            RETURNING *
            "#,
        )
        .bind(upload_id)
        .bind(job_name)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    async fn create_queue_entry(
        &self,
        job_id: i64,
        queue_name: &str,
        args: &str,
    ) -> Result<JobQueueEntity, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let entry = sqlx::query_as::<_, JobQueueEntity>(
            r#"
            INSERT INTO jobqueue (jq_job_fk, jq_type, jq_args)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(queue_name)
        .bind(args)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO scheduler_outbox (command) VALUES ($1)")
            .bind(WAKE_COMMAND)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(entry)
    }

    async fn pending_notifications(&self) -> Result<Vec<OutboxEntry>, error::SystemError> {
        let pending = sqlx::query_as::<_, OutboxEntry>(
            r#"
            SELECT outbox_pk, command, created_at, sent_at
            FROM scheduler_outbox
            WHERE sent_at IS NULL
            ORDER BY outbox_pk
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pending)
    }

    async fn mark_notifications_sent(&self, ids: &[i64]) -> Result<(), error::SystemError> {
        sqlx::query("UPDATE scheduler_outbox SET sent_at = now() WHERE outbox_pk = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
