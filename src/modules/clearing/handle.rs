use actix_web::{get, web};

use crate::{
    api::error,
    modules::{
        clearing::{
            model::FileDecision, repository_pg::ClearingRepositoryPg, service::ClearingService,
        },
        upload::repository_pg::UploadRepositoryPg,
    },
};

pub type ClearingSvc = ClearingService<ClearingRepositoryPg, UploadRepositoryPg>;

#[get("")]
pub async fn get_file_decisions(
    clearing_service: web::Data<ClearingSvc>,
    item_id: web::Path<i64>,
) -> Result<web::Json<Vec<FileDecision>>, error::Error> {
    let decisions = clearing_service.get_file_decisions(*item_id).await?;
    Ok(web::Json(decisions))
}
