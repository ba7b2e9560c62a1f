use actix_web::{
    middleware::from_fn,
    web::{ServiceConfig, scope},
};

use crate::middlewares::authorization;
use crate::modules::copyright::handle::*;
use crate::utils::UserPermission;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/items/{item_id}/copyrights")
            .wrap(from_fn(authorization(UserPermission::Write)))
            .service(update_file_copyrights),
    );
}
