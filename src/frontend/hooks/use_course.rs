use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{course_cache_key, Course};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    Loading,
    Ready,
    NotFound,
    Failed,
}

#[derive(Clone, Copy)]
pub struct CourseHandle {
    pub course: ReadSignal<Option<Course>>,
    pub status: ReadSignal<CourseStatus>,
}

/// Numbers outgoing requests so that only the newest one may publish its
/// result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, request: u64) -> bool {
        self.latest == request
    }
}

/// Parses a cached course. A corrupt entry is logged and ignored.
pub fn decode_cached(slug: &str, raw: &str) -> Option<Course> {
    match serde_json::from_str::<Course>(raw) {
        Ok(course) => Some(course),
        Err(e) => {
            warn!("ignoring unreadable cached course {}: {}", course_cache_key(slug), e);
            None
        }
    }
}

/// Loads the course named by `slug`, painting from local storage first and
/// then replacing it with the server's copy.
///
/// When the slug changes mid-flight the older response is dropped.
pub fn use_course(slug: Signal<String>) -> CourseHandle {
    let (course, set_course) = signal(None::<Course>);
    let (status, set_status) = signal(CourseStatus::Loading);
    let sequence = StoredValue::new(FetchSequence::default());

    Effect::new(move |_| {
        let slug = slug.get();
        let Some(request) = sequence.try_update_value(FetchSequence::begin) else {
            return;
        };

        let cached = read_cached(&slug);
        set_status.set(if cached.is_some() {
            CourseStatus::Ready
        } else {
            CourseStatus::Loading
        });
        set_course.set(cached);

        spawn_local(async move {
            let outcome = fetch_course(&slug).await;

            let current = sequence
                .try_with_value(|s| s.is_current(request))
                .unwrap_or(false);
            if !current {
                return;
            }

            match outcome {
                Ok(Some(fresh)) => {
                    write_cached(&fresh);
                    set_course.set(Some(fresh));
                    set_status.set(CourseStatus::Ready);
                }
                Ok(None) => {
                    set_course.set(None);
                    set_status.set(CourseStatus::NotFound);
                }
                Err(e) => {
                    warn!("failed to fetch course {}: {}", slug, e);
                    set_status.set(CourseStatus::Failed);
                }
            }
        });
    });

    CourseHandle { course, status }
}

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn read_cached(slug: &str) -> Option<Course> {
    let raw = storage()?.get_item(&course_cache_key(slug)).ok().flatten()?;
    decode_cached(slug, &raw)
}

fn write_cached(course: &Course) {
    let Some(storage) = storage() else {
        return;
    };

    match serde_json::to_string(course) {
        Ok(raw) => {
            if storage.set_item(&course_cache_key(&course.slug), &raw).is_err() {
                warn!("could not write cached course {}", course.slug);
            }
        }
        Err(e) => warn!("could not serialize course {}: {}", course.slug, e),
    }
}

async fn fetch_course(slug: &str) -> Result<Option<Course>, reqwest::Error> {
    let url = format!("{}/api/courses/{}", super::origin(), slug);
    let response = reqwest::get(&url).await?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let course = response.error_for_status()?.json::<Course>().await?;
    Ok(Some(course.with_sorted_lessons()))
}
