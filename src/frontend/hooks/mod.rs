//! Data hooks for the client app

mod use_course;
mod use_courses;

pub use use_course::{decode_cached, use_course, CourseHandle, CourseStatus, FetchSequence};
pub use use_courses::{use_course_list, CourseListHandle, ListStatus};

use leptos::prelude::window;

// reqwest needs absolute URLs in the browser.
fn origin() -> String {
    window().location().origin().unwrap_or_default()
}
