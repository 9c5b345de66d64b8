#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use coursepress::db::*;
use coursepress::models::*;
use coursepress::services::CreatorDirectory;
use coursepress::web::AppState;

/// A scratch directory holding `courses.json` and `articles.json`.
///
/// The directory is removed when the value is dropped, so keep it alive for
/// the whole test.
pub struct Scratch {
    pub dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn courses_path(&self) -> PathBuf {
        self.dir.path().join("courses.json")
    }

    pub fn articles_path(&self) -> PathBuf {
        self.dir.path().join("articles.json")
    }

    pub fn write_courses(&self, raw: &str) {
        std::fs::write(self.courses_path(), raw).expect("Failed to write courses file");
    }

    pub fn write_articles(&self, raw: &str) {
        std::fs::write(self.articles_path(), raw).expect("Failed to write articles file");
    }

    pub fn seed_courses(&self, courses: &[Course]) {
        let raw = serde_json::to_string_pretty(courses).expect("Failed to serialize courses");
        self.write_courses(&raw);
    }

    pub fn seed_articles(&self, articles: &[Article]) {
        let raw = serde_json::to_string_pretty(articles).expect("Failed to serialize articles");
        self.write_articles(&raw);
    }

    pub fn read_courses_raw(&self) -> String {
        std::fs::read_to_string(self.courses_path()).expect("Failed to read courses file")
    }

    pub fn course_store(&self) -> CourseStore {
        CourseStore::new(self.courses_path())
    }

    pub fn article_store(&self) -> ArticleStore {
        ArticleStore::new(self.articles_path())
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.courses_path(),
            self.articles_path(),
            CreatorDirectory::builtin(CreatorFallback::First),
        )
    }
}

pub fn lesson(id: u64, title: &str, step_order: u32) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        description: format!("About {title}"),
        estimated_time: "20 min".to_string(),
        topics: vec![],
        step_order,
    }
}

pub fn review(id: u64, user_name: &str, rating: f64) -> Review {
    Review {
        id,
        user_name: user_name.to_string(),
        rating,
        comment: String::new(),
    }
}

/// Lessons are deliberately stored out of `step_order`.
pub fn get_seed_course_intro() -> Course {
    Course {
        id: 3,
        title: "Intro".to_string(),
        slug: "intro".to_string(),
        description: "Where everyone starts".to_string(),
        category: "Web Development".to_string(),
        level: "Beginner".to_string(),
        estimated_hours: 4.0,
        rating: 4.5,
        featured: true,
        lessons: vec![
            lesson(10, "Third", 3),
            lesson(11, "First", 1),
            lesson(12, "Second", 2),
        ],
        reviews: vec![review(1, "Sam", 5.0), review(2, "Lee", 1.5)],
        ..Course::default()
    }
}

pub fn get_seed_course_data() -> Course {
    Course {
        id: 7,
        title: "Spreadsheet Analysis".to_string(),
        slug: "spreadsheet-analysis".to_string(),
        description: "Pivot tables and charts".to_string(),
        category: "Data".to_string(),
        level: "Intermediate".to_string(),
        estimated_hours: 8.5,
        rating: 4.1,
        featured: false,
        reviews: vec![review(3, "Mo", 4.0)],
        ..Course::default()
    }
}

pub fn get_seed_article(id: u64, title: &str, date: Option<(i32, u32, u32)>) -> Article {
    Article {
        id,
        title: title.to_string(),
        author: "Ada Park".to_string(),
        date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        category: "Learning".to_string(),
        image: String::new(),
        body: "First paragraph.\n\nSecond paragraph.".to_string(),
    }
}

pub fn draft_titled(title: &str) -> CourseDraft {
    CourseDraft {
        title: Some(title.to_string()),
        ..CourseDraft::default()
    }
}
