use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy)]
pub struct CourseListHandle {
    pub courses: ReadSignal<Vec<Course>>,
    pub status: ReadSignal<ListStatus>,
}

/// Fetches the whole catalog once per mount.
pub fn use_course_list() -> CourseListHandle {
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (status, set_status) = signal(ListStatus::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_courses().await {
                Ok(list) => {
                    set_courses.set(list);
                    set_status.set(ListStatus::Ready);
                }
                Err(e) => {
                    warn!("failed to fetch courses: {}", e);
                    set_status.set(ListStatus::Failed);
                }
            }
        });
    });

    CourseListHandle { courses, status }
}

async fn fetch_courses() -> Result<Vec<Course>, reqwest::Error> {
    let url = format!("{}/api/courses", super::origin());
    reqwest::get(&url)
        .await?
        .error_for_status()?
        .json::<Vec<Course>>()
        .await
}
