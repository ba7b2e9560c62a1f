use actix_web::{
    middleware::from_fn,
    web::{ServiceConfig, scope},
};

use crate::middlewares::authorization;
use crate::modules::upload::handle::*;
use crate::utils::UserPermission;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/folders").service(list_folders).service(list_folder_uploads));
    cfg.service(
        scope("/uploads")
            .wrap(from_fn(authorization(UserPermission::Delete)))
            .service(delete_upload),
    );
}
