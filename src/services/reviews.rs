use serde::Serialize;

use crate::models::{Course, Review};

/// Ratings at or below this are flagged on the reviewer dashboard.
pub const LOW_RATING_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReviewSummary {
    pub course_id: u64,
    pub course_title: String,
    pub course_slug: String,
    pub review_count: usize,
    pub average_rating: Option<f64>,
    pub flagged: Vec<Review>,
    pub reviews: Vec<Review>,
}

impl CourseReviewSummary {
    pub fn from_course(course: &Course) -> Self {
        let review_count = course.reviews.len();
        let average_rating = (review_count > 0).then(|| {
            course.reviews.iter().map(|r| r.rating).sum::<f64>() / review_count as f64
        });

        Self {
            course_id: course.id,
            course_title: course.title.clone(),
            course_slug: course.slug.clone(),
            review_count,
            average_rating,
            flagged: course
                .reviews
                .iter()
                .filter(|r| is_low_rating(r))
                .cloned()
                .collect(),
            reviews: course.reviews.clone(),
        }
    }

    pub fn average_display(&self) -> String {
        self.average_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "n/a".to_string())
    }

    pub fn has_flagged(&self) -> bool {
        !self.flagged.is_empty()
    }
}

impl Review {
    pub fn is_low_rating(&self) -> bool {
        self.rating <= LOW_RATING_THRESHOLD
    }
}

pub fn is_low_rating(review: &Review) -> bool {
    review.is_low_rating()
}

/// One summary per course; courses with flagged reviews first, then by
/// title.
pub fn summarize(courses: &[Course]) -> Vec<CourseReviewSummary> {
    let mut out: Vec<CourseReviewSummary> =
        courses.iter().map(CourseReviewSummary::from_course).collect();

    out.sort_by(|a, b| {
        b.has_flagged()
            .cmp(&a.has_flagged())
            .then_with(|| a.course_title.cmp(&b.course_title))
    });

    out
}
