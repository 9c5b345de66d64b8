use actix_web::{get, web, Responder};

use crate::db;
use crate::log_err;
use crate::services;
use crate::web::helpers::{internal_error, render};
use crate::web::state::AppState;
use crate::web::templates::ReviewerDashboardTemplate;

#[get("/reviewer")]
pub async fn reviewer_dashboard(state: web::Data<AppState>) -> impl Responder {
    let courses = match db::list_courses(&state.courses).await {
        Ok(courses) => courses,
        Err(e) => {
            log_err!("Failed to read courses", e);
            return internal_error("Failed to read courses");
        }
    };

    let summaries = services::summarize(&courses);
    let flagged_total = summaries.iter().map(|s| s.flagged.len()).sum();

    render(ReviewerDashboardTemplate {
        summaries,
        flagged_total,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(reviewer_dashboard);
}
