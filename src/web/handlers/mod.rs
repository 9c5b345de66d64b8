pub mod admin_articles;
pub mod admin_courses;
pub mod admin_panel;
pub mod courses_api;
pub mod learn;
pub mod public;
pub mod reviewer;

use actix_web::http::StatusCode;
use actix_web::{error, web};

use crate::web::helpers::plain;

/// Registers every route plus the JSON body settings shared by the API
/// handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    public::configure(cfg);
    courses_api::configure(cfg);
    admin_courses::configure(cfg);
    admin_articles::configure(cfg);
    admin_panel::configure(cfg);
    reviewer::configure(cfg);
    learn::configure(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response = plain(StatusCode::BAD_REQUEST, "Malformed request body");
        error::InternalError::from_response(err, response).into()
    })
}
