use actix_web::http::StatusCode;
use actix_web::{get, web, Responder};

use crate::db;
use crate::log_err;
use crate::services::{self, load_course};
use crate::web::forms::CatalogQuery;
use crate::web::helpers::{internal_error, plain, render};
use crate::web::state::AppState;
use crate::web::templates::{
    ArticleTemplate, BlogTemplate, CatalogTemplate, CourseTemplate, HomeTemplate,
};

const HOME_FEATURED: usize = 6;
const HOME_ARTICLES: usize = 3;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let courses = db::list_courses(&state.courses).await.unwrap_or_else(|e| {
        log_err!("Failed to read courses for home page", e);
        Vec::new()
    });
    let mut articles = db::list_articles_newest_first(&state.articles)
        .await
        .unwrap_or_else(|e| {
            log_err!("Failed to read articles for home page", e);
            Vec::new()
        });
    articles.truncate(HOME_ARTICLES);

    render(HomeTemplate {
        featured: services::featured(&courses, HOME_FEATURED),
        articles,
    })
}

#[get("/courses")]
pub async fn catalog(state: web::Data<AppState>, query: web::Query<CatalogQuery>) -> impl Responder {
    let courses = match db::list_courses(&state.courses).await {
        Ok(courses) => courses,
        Err(e) => {
            log_err!("Failed to read courses", e);
            return internal_error("Failed to read courses");
        }
    };

    let filter = query.to_filter();
    let categories = services::categories(&courses);
    let levels = services::levels(&courses);

    render(CatalogTemplate {
        q: filter.q.clone().unwrap_or_default(),
        category: filter.category.clone().unwrap_or_default(),
        level: filter.level.clone().unwrap_or_default(),
        featured_only: filter.featured == Some(true),
        courses: filter.apply(courses),
        categories,
        levels,
    })
}

#[get("/courses/{slug}")]
pub async fn course_page(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    match load_course(&state.courses, &state.course_cache, &slug).await {
        Ok(Some(course)) => {
            let creator = state.creators.creator_for(&course).cloned();
            render(CourseTemplate { course, creator })
        }
        Ok(None) => plain(StatusCode::NOT_FOUND, "Not found"),
        Err(e) => {
            log_err!("Failed to load course", e);
            internal_error("Failed to load course")
        }
    }
}

#[get("/blog")]
pub async fn blog(state: web::Data<AppState>) -> impl Responder {
    match db::list_articles_newest_first(&state.articles).await {
        Ok(articles) => render(BlogTemplate { articles }),
        Err(e) => {
            log_err!("Failed to read articles", e);
            internal_error("Failed to read articles")
        }
    }
}

#[get("/blog/{id}")]
pub async fn article_page(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    match db::get_article_by_id(&state.articles, path.into_inner()).await {
        Ok(Some(article)) => render(ArticleTemplate { article }),
        Ok(None) => plain(StatusCode::NOT_FOUND, "Not found"),
        Err(e) => {
            log_err!("Failed to read article", e);
            internal_error("Failed to read article")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(catalog)
        .service(course_page)
        .service(blog)
        .service(article_page);
}
