use serde::{Deserialize, Serialize};

/// Key under which a course is cached, both on the server and in browser
/// local storage.
pub fn course_cache_key(slug: &str) -> String {
    format!("course_{slug}")
}

/// A course as stored in the courses file and served over the API.
///
/// Every field has a serde default so that partially populated records
/// (older seed files, hand edits) still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub hero_image: String,
    pub category: String,
    pub level: String,
    pub estimated_hours: f64,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub students: u64,
    pub rating: f64,
    pub featured: bool,
    pub lessons: Vec<Lesson>,
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<u64>,
}

impl Course {
    /// Sorts lessons by `step_order`, keeping the stored order for ties.
    pub fn sort_lessons(&mut self) {
        self.lessons.sort_by_key(|l| l.step_order);
    }

    pub fn with_sorted_lessons(mut self) -> Self {
        self.sort_lessons();
        self
    }

    pub fn total_lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn hours_display(&self) -> String {
        format!("{:.1}", self.estimated_hours)
    }

    pub fn media_items(&self) -> &[Media] {
        self.media.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub topics: Vec<String>,
    pub step_order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: u64,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub title: String,
}

/// Request body for creating a course. Any field may be omitted; `id` is
/// always assigned by the store and a supplied one is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseDraft {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub estimated_hours: Option<f64>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub students: Option<u64>,
    pub rating: Option<f64>,
    pub featured: Option<bool>,
    pub lessons: Option<Vec<Lesson>>,
    pub reviews: Option<Vec<Review>>,
    pub media: Option<Vec<Media>>,
    pub creator_id: Option<u64>,
}

impl CourseDraft {
    pub fn into_course(self, id: u64, slug: String) -> Course {
        Course {
            id,
            slug,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            hero_image: self.hero_image.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            level: self.level.unwrap_or_default(),
            estimated_hours: self.estimated_hours.unwrap_or_default(),
            requirements: self.requirements.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            students: self.students.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            featured: self.featured.unwrap_or_default(),
            lessons: self.lessons.unwrap_or_default(),
            reviews: self.reviews.unwrap_or_default(),
            media: self.media,
            creator_id: self.creator_id,
        }
    }
}
