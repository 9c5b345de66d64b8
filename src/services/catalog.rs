use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Catalog filters as they arrive in the query string. Empty strings mean
/// "no filter" so that a blank form field does not hide everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    pub q: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub featured: Option<bool>,
}

impl CatalogFilter {
    pub fn is_empty(&self) -> bool {
        non_blank(&self.q).is_none()
            && non_blank(&self.category).is_none()
            && non_blank(&self.level).is_none()
            && self.featured != Some(true)
    }

    pub fn matches(&self, course: &Course) -> bool {
        if let Some(q) = non_blank(&self.q) {
            let q = q.to_lowercase();
            let hit = course.title.to_lowercase().contains(&q)
                || course.description.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }

        if let Some(category) = non_blank(&self.category) {
            if !course.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(level) = non_blank(&self.level) {
            if !course.level.eq_ignore_ascii_case(level) {
                return false;
            }
        }

        self.featured != Some(true) || course.featured
    }

    pub fn apply(&self, courses: Vec<Course>) -> Vec<Course> {
        courses.into_iter().filter(|c| self.matches(c)).collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Sorted distinct non-empty categories.
pub fn categories(courses: &[Course]) -> Vec<String> {
    distinct(courses.iter().map(|c| c.category.as_str()))
}

/// Sorted distinct non-empty levels.
pub fn levels(courses: &[Course]) -> Vec<String> {
    distinct(courses.iter().map(|c| c.level.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Featured courses, best rated first.
pub fn featured(courses: &[Course], limit: usize) -> Vec<Course> {
    let mut out: Vec<Course> = courses.iter().filter(|c| c.featured).cloned().collect();
    out.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    out.truncate(limit);
    out
}
