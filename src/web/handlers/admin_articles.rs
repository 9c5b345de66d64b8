use actix_web::{get, post, web, HttpResponse, Responder};

use crate::db;
use crate::log_err;
use crate::models::ArticleDraft;
use crate::web::helpers::internal_error;
use crate::web::state::AppState;

#[get("/api/admin/articles")]
pub async fn list_articles(state: web::Data<AppState>) -> impl Responder {
    match db::list_articles(&state.articles).await {
        Ok(articles) => HttpResponse::Ok().json(articles),
        Err(e) => {
            log_err!("Failed to read articles", e);
            internal_error("Failed to read articles")
        }
    }
}

#[post("/api/admin/articles")]
pub async fn create_article(
    state: web::Data<AppState>,
    body: web::Json<ArticleDraft>,
) -> impl Responder {
    match db::create_article(&state.articles, body.into_inner()).await {
        Ok(article) => {
            log::info!("Created article {}", article.id);
            HttpResponse::Ok().json(article)
        }
        Err(e) => {
            log_err!("Failed to create article", e);
            internal_error("Failed to create article")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_articles).service(create_article);
}
