use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};

use crate::db;
use crate::log_err;
use crate::services::load_course;
use crate::web::helpers::{internal_error, plain};
use crate::web::state::AppState;

#[get("/api/courses")]
pub async fn list_courses(state: web::Data<AppState>) -> impl Responder {
    match db::list_courses(&state.courses).await {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(e) => {
            log_err!("Failed to read courses", e);
            internal_error("Failed to read courses")
        }
    }
}

/// Point lookup by slug. "Not found" is a 404, distinct from a storage
/// failure.
#[get("/api/courses/{slug}")]
pub async fn get_course(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    match load_course(&state.courses, &state.course_cache, &slug).await {
        Ok(Some(course)) => HttpResponse::Ok().json(course),
        Ok(None) => plain(StatusCode::NOT_FOUND, "Course not found"),
        Err(e) => {
            log_err!("Failed to load course", e);
            internal_error("Failed to load course")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_courses).service(get_course);
}
