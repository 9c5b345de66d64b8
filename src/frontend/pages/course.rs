//! Single course of the client app

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::frontend::components::TransitionLink;
use crate::frontend::hooks::{use_course, CourseStatus};
use crate::models::{Course, Lesson};

use super::NotFound;

#[component]
pub fn CoursePage() -> impl IntoView {
    let params = use_params_map();
    let slug = Signal::derive(move || params.with(|p| p.get("slug")).unwrap_or_default());
    let handle = use_course(slug);

    view! {
        <section class="learn-course">
            <TransitionLink href="/learn" class="back-link">
                "← All courses"
            </TransitionLink>
            {move || match (handle.status.get(), handle.course.get()) {
                (_, Some(course)) => view! { <CourseBody course/> }.into_any(),
                (CourseStatus::NotFound, None) => view! { <NotFound/> }.into_any(),
                (CourseStatus::Failed, None) => {
                    view! { <p class="alert alert-error">"Could not load this course."</p> }
                        .into_any()
                }
                _ => view! { <p class="empty">"Loading course…"</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn CourseBody(course: Course) -> impl IntoView {
    let meta = format!(
        "{} · {} · {} h · {} students",
        course.category,
        course.level,
        course.hours_display(),
        course.students
    );
    let lessons = course
        .lessons
        .into_iter()
        .map(|lesson| view! { <LessonItem lesson/> })
        .collect_view();

    view! {
        <article class="course">
            <h1>{course.title}</h1>
            <p class="lead">{course.description}</p>
            <p class="meta">{meta}</p>
            <h2>"Lessons"</h2>
            <ol class="lessons">{lessons}</ol>
        </article>
    }
}

#[component]
fn LessonItem(lesson: Lesson) -> impl IntoView {
    let topics = lesson.topics.join(", ");

    view! {
        <li>
            <h3>{lesson.title}</h3>
            <p>{lesson.description}</p>
            <span class="meta">{lesson.estimated_time}</span>
            <p class="topics">{topics}</p>
        </li>
    }
}
