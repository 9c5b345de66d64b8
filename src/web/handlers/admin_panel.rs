use actix_web::{get, post, web, HttpResponse, Responder};

use crate::db;
use crate::log_err;
use crate::web::forms::{AdminArticleForm, AdminCourseForm};
use crate::web::helpers::{internal_error, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminDashboardTemplate;

async fn dashboard(state: &AppState, error: Option<String>) -> HttpResponse {
    let courses = match db::list_courses(&state.courses).await {
        Ok(courses) => courses,
        Err(e) => {
            log_err!("Failed to read courses", e);
            return internal_error("Failed to read courses");
        }
    };
    let articles = match db::list_articles(&state.articles).await {
        Ok(articles) => articles,
        Err(e) => {
            log_err!("Failed to read articles", e);
            return internal_error("Failed to read articles");
        }
    };

    render(AdminDashboardTemplate {
        courses,
        articles,
        error,
    })
}

#[get("/admin")]
pub async fn admin_dashboard(state: web::Data<AppState>) -> impl Responder {
    dashboard(&state, None).await
}

#[post("/admin/courses")]
pub async fn admin_create_course(
    state: web::Data<AppState>,
    form: web::Form<AdminCourseForm>,
) -> impl Responder {
    if form.title.trim().is_empty() {
        return dashboard(&state, Some("Title is required".to_string())).await;
    }

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(message) => return dashboard(&state, Some(message)).await,
    };

    match db::create_course(&state.courses, draft).await {
        Ok(course) => {
            state.course_cache.invalidate_all();
            log::info!("Created course {} ({}) from admin panel", course.id, course.slug);
            see_other("/admin")
        }
        Err(e) => {
            log_err!("Failed to create course", e);
            internal_error("Failed to create course")
        }
    }
}

#[post("/admin/articles")]
pub async fn admin_create_article(
    state: web::Data<AppState>,
    form: web::Form<AdminArticleForm>,
) -> impl Responder {
    if form.title.trim().is_empty() {
        return dashboard(&state, Some("Title is required".to_string())).await;
    }

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(message) => return dashboard(&state, Some(message)).await,
    };

    match db::create_article(&state.articles, draft).await {
        Ok(article) => {
            log::info!("Created article {} from admin panel", article.id);
            see_other("/admin")
        }
        Err(e) => {
            log_err!("Failed to create article", e);
            internal_error("Failed to create article")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard)
        .service(admin_create_course)
        .service(admin_create_article);
}
