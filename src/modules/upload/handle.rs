use actix_web::{HttpRequest, delete, get, web};

use crate::{
    api::{error, info},
    middlewares::get_claims,
    modules::{
        job::{JobService, TcpSchedulerClient, repository_pg::JobRepositoryPg},
        upload::{
            model::{FolderResponse, UploadOption},
            repository_pg::UploadRepositoryPg,
            service::UploadService,
        },
    },
};

pub type UploadSvc = UploadService<UploadRepositoryPg>;
pub type JobSvc = JobService<JobRepositoryPg, TcpSchedulerClient>;

#[get("")]
pub async fn list_folders(
    upload_service: web::Data<UploadSvc>,
) -> Result<web::Json<Vec<FolderResponse>>, error::Error> {
    let folders = upload_service.get_folders().await?;
    Ok(web::Json(folders))
}

#[get("/{folder_id}/uploads")]
pub async fn list_folder_uploads(
    upload_service: web::Data<UploadSvc>,
    folder_id: web::Path<i64>,
) -> Result<web::Json<Vec<UploadOption>>, error::Error> {
    let uploads = upload_service.get_folder_uploads(*folder_id).await?;
    Ok(web::Json(uploads))
}

#[delete("/{upload_id}")]
pub async fn delete_upload(
    upload_service: web::Data<UploadSvc>,
    job_service: web::Data<JobSvc>,
    upload_id: web::Path<i64>,
    req: HttpRequest,
) -> Result<info::Info, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let upload = upload_service.get_upload(*upload_id).await?;
    job_service.enqueue_upload_delete(upload.upload_pk, user_id).await?;

    Ok(info::Info::accepted("Deletion added to job queue"))
}
