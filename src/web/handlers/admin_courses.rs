use actix_web::http::StatusCode;
use actix_web::{get, post, put, web, HttpResponse, Responder};

use crate::common::StoreError;
use crate::db;
use crate::log_err;
use crate::models::{Course, CourseDraft};
use crate::web::helpers::{internal_error, plain};
use crate::web::state::AppState;

#[get("/api/admin/courses")]
pub async fn list_courses(state: web::Data<AppState>) -> impl Responder {
    match db::list_courses(&state.courses).await {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(e) => {
            log_err!("Failed to read courses", e);
            internal_error("Failed to read courses")
        }
    }
}

#[post("/api/admin/courses")]
pub async fn create_course(
    state: web::Data<AppState>,
    body: web::Json<CourseDraft>,
) -> impl Responder {
    match db::create_course(&state.courses, body.into_inner()).await {
        Ok(course) => {
            state.course_cache.invalidate_all();
            log::info!("Created course {} ({})", course.id, course.slug);
            HttpResponse::Ok().json(course)
        }
        Err(e) => {
            log_err!("Failed to create course", e);
            internal_error("Failed to create course")
        }
    }
}

#[put("/api/admin/courses/{id}")]
pub async fn replace_course(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<Course>,
) -> impl Responder {
    let id = path.into_inner();

    match db::replace_course(&state.courses, id, body.into_inner()).await {
        Ok(course) => {
            state.course_cache.invalidate_all();
            log::info!("Replaced course {} ({})", course.id, course.slug);
            HttpResponse::Ok().json(course)
        }
        Err(StoreError::NotFound(_)) => plain(StatusCode::NOT_FOUND, "Course not found"),
        Err(StoreError::SlugTaken(slug)) => plain(
            StatusCode::CONFLICT,
            &format!("Slug {slug:?} already belongs to another course"),
        ),
        Err(e) => {
            log_err!("Failed to replace course", e);
            internal_error("Failed to replace course")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_courses)
        .service(create_course)
        .service(replace_course);
}
