use actix_web::web::{ServiceConfig, scope};

use crate::modules::clearing::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/items/{item_id}/clearing-decisions").service(get_file_decisions));
}
