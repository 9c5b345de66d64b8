use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::common::StoreError;
use crate::db::{self, CourseStore};
use crate::models::{course_cache_key as cache_key, Course};

/// Read-through cache of normalized course JSON keyed by
/// [`course_cache_key`](crate::models::course_cache_key).
///
/// Every write bumps `generation`; a fill that started under an older
/// generation is dropped so a slow read can not resurrect stale data.
#[derive(Default)]
pub struct CourseCache {
    entries: RwLock<HashMap<String, String>>,
    generation: AtomicU64,
}

impl CourseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Best-effort read. A malformed entry is logged, evicted and reported as
    /// a miss.
    pub fn get(&self, slug: &str) -> Option<Course> {
        let key = cache_key(slug);
        let raw = {
            let entries = self
                .entries
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            entries.get(&key)?.clone()
        };

        match serde_json::from_str::<Course>(&raw) {
            Ok(course) => Some(course),
            Err(e) => {
                log::warn!("Discarding unreadable cache entry {}: {}", key, e);
                self.entries
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .remove(&key);
                None
            }
        }
    }

    /// Stores `course` unless a write happened since `seen_generation`.
    /// Returns whether the entry was stored.
    pub fn fill(&self, course: &Course, seen_generation: u64) -> bool {
        let raw = match serde_json::to_string(course) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Could not serialize course {} for caching: {}", course.slug, e);
                return false;
            }
        };

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Checked under the write lock so it can not interleave with invalidate_all.
        if self.generation() != seen_generation {
            return false;
        }

        entries.insert(cache_key(&course.slug), raw);
        true
    }

    /// Drops every entry. Called after any course write, since a
    /// replacement may change a slug.
    pub fn invalidate_all(&self) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.generation.fetch_add(1, Ordering::AcqRel);
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Looks a course up through the cache, falling back to the store.
pub async fn load_course(
    store: &CourseStore,
    cache: &CourseCache,
    slug: &str,
) -> Result<Option<Course>, StoreError> {
    if let Some(course) = cache.get(slug) {
        return Ok(Some(course));
    }

    let generation = cache.generation();
    let course = db::get_course_by_slug(store, slug).await?;

    if let Some(course) = &course {
        cache.fill(course, generation);
    }

    Ok(course)
}
