use std::sync::Arc;

use crate::{
    api::error,
    modules::job::{
        model::EnqueuedDelete, outbox, repository::JobRepository, scheduler::SchedulerClient,
    },
};

/// Queue the delete agent consumes.
const DELETE_QUEUE: &str = "delagent";

#[derive(Clone)]
pub struct JobService<R, S>
where
    R: JobRepository + Send + Sync,
    S: SchedulerClient + Send + Sync,
{
    job_repo: Arc<R>,
    scheduler: Arc<S>,
}

impl<R, S> JobService<R, S>
where
    R: JobRepository + Send + Sync,
    S: SchedulerClient + Send + Sync,
{
    pub fn with_dependencies(job_repo: Arc<R>, scheduler: Arc<S>) -> Self {
        JobService { job_repo, scheduler }
    }

    /// Creates the job record, places the delete command in the job queue
    /// and wakes the scheduler. The queue rows are committed before the
    /// wake; a delivery failure leaves the outbox entry pending for the
    /// dispatcher, so the job is retried-for-notification, never orphaned.
    pub async fn enqueue_upload_delete(
        &self,
        upload_id: i64,
        user_id: i64,
    ) -> Result<EnqueuedDelete, error::SystemError> {
        let job =
            self.job_repo.create_job(upload_id, "Delete", user_id).await.map_err(|err| {
                log::error!("Job record creation failed for upload {upload_id}: {err}");
                error::SystemError::JobQueue("Failed to create job record".into())
            })?;

        let args = format!("DELETE UPLOAD {upload_id}");
        let entry = self
            .job_repo
            .create_queue_entry(job.job_pk, DELETE_QUEUE, &args)
            .await
            .map_err(|err| {
                log::error!("Job queue insert failed for job {}: {err}", job.job_pk);
                error::SystemError::JobQueue("Failed to place delete in job queue".into())
            })?;

        outbox::flush_pending(self.job_repo.as_ref(), self.scheduler.as_ref()).await?;

        Ok(EnqueuedDelete { job_id: job.job_pk, jobqueue_id: entry.jq_pk })
    }
}
