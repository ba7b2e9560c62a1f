use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    middlewares::authentication,
    modules::{
        clearing::{repository_pg::ClearingRepositoryPg, service::ClearingService},
        copyright::{repository_pg::CopyrightRepositoryPg, service::CopyrightService},
        job::{outbox, repository_pg::JobRepositoryPg, scheduler::TcpSchedulerClient, service::JobService},
        upload::{repository_pg::UploadRepositoryPg, service::UploadService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let upload_repo = Arc::new(UploadRepositoryPg::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepositoryPg::new(db_pool.clone()));
    let copyright_repo = Arc::new(CopyrightRepositoryPg::new(db_pool.clone()));
    let clearing_repo = Arc::new(ClearingRepositoryPg::new(db_pool.clone()));
    let scheduler =
        Arc::new(TcpSchedulerClient::new(ENV.scheduler_host.clone(), ENV.scheduler_port));

    let upload_service = UploadService::with_dependencies(upload_repo.clone());
    let job_service = JobService::with_dependencies(job_repo.clone(), scheduler.clone());
    let copyright_service =
        CopyrightService::with_dependencies(copyright_repo, upload_repo.clone());
    let clearing_service = ClearingService::with_dependencies(clearing_repo, upload_repo);

    outbox::spawn_dispatcher(
        job_repo,
        scheduler,
        std::time::Duration::from_secs(ENV.outbox_flush_secs),
    );

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(upload_service.clone()))
            .app_data(web::Data::new(job_service.clone()))
            .app_data(web::Data::new(copyright_service.clone()))
            .app_data(web::Data::new(clearing_service.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .wrap(from_fn(authentication))
                    .configure(modules::upload::route::configure)
                    .configure(modules::copyright::route::configure)
                    .configure(modules::clearing::route::configure),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
