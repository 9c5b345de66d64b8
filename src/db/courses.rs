use crate::common::StoreError;
use crate::models::{Course, CourseDraft};
use crate::services::{slugify, unique_slug};

use super::json_store::{next_id, JsonStore};

pub type CourseStore = JsonStore<Course>;

pub async fn list_courses(store: &CourseStore) -> Result<Vec<Course>, StoreError> {
    store.load().await
}

/// Point lookup by unique slug. Lessons come back in `step_order`.
pub async fn get_course_by_slug(
    store: &CourseStore,
    slug: &str,
) -> Result<Option<Course>, StoreError> {
    let courses = store.load().await?;

    Ok(courses
        .into_iter()
        .find(|c| c.slug == slug)
        .map(Course::with_sorted_lessons))
}

pub async fn get_course_by_id(store: &CourseStore, id: u64) -> Result<Option<Course>, StoreError> {
    let courses = store.load().await?;
    Ok(courses.into_iter().find(|c| c.id == id))
}

/// Appends a course built from `draft`.
///
/// The id is `1 + max(existing ids)`. The slug comes from `draft.slug` or,
/// failing that, from the title; a taken slug gets `-<id>` appended.
pub async fn create_course(store: &CourseStore, draft: CourseDraft) -> Result<Course, StoreError> {
    store
        .mutate(move |courses| {
            let id = next_id(courses.iter().map(|c| c.id))?;

            let requested = draft
                .slug
                .as_deref()
                .map(slugify)
                .filter(|s| !s.is_empty());
            let base = requested
                .unwrap_or_else(|| slugify(draft.title.as_deref().unwrap_or_default()));
            let slug = unique_slug(&base, "course", id, courses.iter().map(|c| c.slug.as_str()));

            let course = draft.into_course(id, slug);
            courses.push(course.clone());

            Ok(course)
        })
        .await
}

/// Replaces the course with `id` wholesale. The stored id always wins over
/// whatever `replacement.id` says.
pub async fn replace_course(
    store: &CourseStore,
    id: u64,
    mut replacement: Course,
) -> Result<Course, StoreError> {
    store
        .mutate(move |courses| {
            if courses.iter().any(|c| c.id != id && c.slug == replacement.slug) {
                return Err(StoreError::SlugTaken(replacement.slug.clone()));
            }

            let slot = courses
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(StoreError::NotFound(id))?;

            replacement.id = id;
            *slot = replacement.clone();

            Ok(replacement)
        })
        .await
}
