pub mod model;
pub mod outbox;
pub mod repository;
pub mod repository_pg;
pub mod schema;
pub mod scheduler;
pub mod service;

pub use model::EnqueuedDelete;
pub use repository::JobRepository;
pub use repository_pg::JobRepositoryPg;
pub use scheduler::{SchedulerClient, SchedulerError, TcpSchedulerClient};
pub use service::JobService;
