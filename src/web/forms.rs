use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{ArticleDraft, CourseDraft};
use crate::services::CatalogFilter;

use super::helpers::non_blank;

#[derive(Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub featured: Option<String>,
}

impl CatalogQuery {
    pub fn to_filter(&self) -> CatalogFilter {
        CatalogFilter {
            q: non_blank(&self.q),
            category: non_blank(&self.category),
            level: non_blank(&self.level),
            featured: non_blank(&self.featured).map(|v| v == "true" || v == "on"),
        }
    }
}

#[derive(Deserialize)]
pub struct AdminCourseForm {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub estimated_hours: Option<String>,
    pub featured: Option<String>,
}

impl AdminCourseForm {
    pub fn to_draft(&self) -> Result<CourseDraft, String> {
        let estimated_hours = match non_blank(&self.estimated_hours) {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|h| h.is_finite() && *h >= 0.0)
                    .ok_or_else(|| format!("Estimated hours must be a number, got {raw:?}"))?,
            ),
            None => None,
        };

        Ok(CourseDraft {
            title: Some(self.title.trim().to_string()),
            slug: non_blank(&self.slug),
            description: non_blank(&self.description),
            hero_image: non_blank(&self.hero_image),
            category: non_blank(&self.category),
            level: non_blank(&self.level),
            estimated_hours,
            featured: Some(self.featured.is_some()),
            ..CourseDraft::default()
        })
    }
}

#[derive(Deserialize)]
pub struct AdminArticleForm {
    pub title: String,
    pub author: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub body: Option<String>,
}

impl AdminArticleForm {
    pub fn to_draft(&self) -> Result<ArticleDraft, String> {
        let date = match non_blank(&self.date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| format!("Date must look like 2024-05-31, got {raw:?}"))?,
            ),
            None => None,
        };

        Ok(ArticleDraft {
            title: Some(self.title.trim().to_string()),
            author: non_blank(&self.author),
            date,
            category: non_blank(&self.category),
            image: non_blank(&self.image),
            body: self.body.clone(),
        })
    }
}
