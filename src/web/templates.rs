use askama::Template;

use crate::models::{Article, Course, Creator};
use crate::services::CourseReviewSummary;

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub featured: Vec<Course>,
    pub articles: Vec<Article>,
}

#[derive(Template)]
#[template(path = "public/catalog.html")]
pub struct CatalogTemplate {
    pub courses: Vec<Course>,
    pub categories: Vec<String>,
    pub levels: Vec<String>,
    pub q: String,
    pub category: String,
    pub level: String,
    pub featured_only: bool,
}

#[derive(Template)]
#[template(path = "public/course.html")]
pub struct CourseTemplate {
    pub course: Course,
    pub creator: Option<Creator>,
}

#[derive(Template)]
#[template(path = "public/blog.html")]
pub struct BlogTemplate {
    pub articles: Vec<Article>,
}

#[derive(Template)]
#[template(path = "public/article.html")]
pub struct ArticleTemplate {
    pub article: Article,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub courses: Vec<Course>,
    pub articles: Vec<Article>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "reviewer/dashboard.html")]
pub struct ReviewerDashboardTemplate {
    pub summaries: Vec<CourseReviewSummary>,
    pub flagged_total: usize,
}

#[derive(Template)]
#[template(path = "learn/shell.html")]
pub struct LearnShellTemplate {
    pub bundle: &'static str,
}
