use serde::Serialize;

/// Ids of the rows created by a successful delete enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnqueuedDelete {
    pub job_id: i64,
    pub jobqueue_id: i64,
}
