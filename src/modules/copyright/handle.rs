use actix_web::{HttpRequest, put, web};

use crate::{
    api::{error, info},
    middlewares::get_claims,
    modules::{
        copyright::{
            model::UpdateCopyrightBody, repository_pg::CopyrightRepositoryPg,
            service::CopyrightService,
        },
        upload::repository_pg::UploadRepositoryPg,
    },
    utils::ValidatedJson,
};

pub type CopyrightSvc = CopyrightService<CopyrightRepositoryPg, UploadRepositoryPg>;

#[put("/{hash}")]
pub async fn update_file_copyrights(
    copyright_service: web::Data<CopyrightSvc>,
    path: web::Path<(i64, String)>,
    body: ValidatedJson<UpdateCopyrightBody>,
    req: HttpRequest,
) -> Result<info::Info, error::Error> {
    let (item_id, hash) = path.into_inner();
    let user_id = get_claims(&req)?.sub;
    copyright_service.update_file_copyright(item_id, &hash, &body.0.content, user_id).await?;

    Ok(info::Info::ok("Successfully updated copyright."))
}
