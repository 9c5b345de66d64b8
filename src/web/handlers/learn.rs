use actix_web::{get, Responder};

use crate::web::helpers::render;
use crate::web::templates::LearnShellTemplate;

const BUNDLE: &str = "/pkg/coursepress";

/// Shell page for the client app. Every path under `/learn` gets the same
/// document; routing happens in the browser.
#[get("/learn")]
pub async fn learn_root() -> impl Responder {
    render(LearnShellTemplate { bundle: BUNDLE })
}

#[get("/learn/{tail:.*}")]
pub async fn learn_any() -> impl Responder {
    render(LearnShellTemplate { bundle: BUNDLE })
}

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(learn_root).service(learn_any);
}
