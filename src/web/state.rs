use std::path::PathBuf;

use crate::common::StoreError;
use crate::config::AppConfig;
use crate::db::{ArticleStore, CourseStore};
use crate::services::{CourseCache, CreatorDirectory};

/// Everything a request handler may touch. Built once in `main` and shared
/// through `web::Data`.
pub struct AppState {
    pub courses: CourseStore,
    pub articles: ArticleStore,
    pub course_cache: CourseCache,
    pub creators: CreatorDirectory,
}

impl AppState {
    pub fn new(
        courses_file: impl Into<PathBuf>,
        articles_file: impl Into<PathBuf>,
        creators: CreatorDirectory,
    ) -> Self {
        Self {
            courses: CourseStore::new(courses_file),
            articles: ArticleStore::new(articles_file),
            course_cache: CourseCache::new(),
            creators,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.courses_file,
            &config.articles_file,
            CreatorDirectory::builtin(config.creator_fallback),
        )
    }

    /// Creates missing storage files so a fresh checkout starts with empty
    /// collections instead of failing every read.
    pub async fn ensure_storage(&self) -> Result<(), StoreError> {
        self.courses.ensure_exists().await?;
        self.articles.ensure_exists().await?;
        Ok(())
    }
}
