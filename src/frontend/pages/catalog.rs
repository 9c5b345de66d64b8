//! Course list of the client app

use leptos::prelude::*;

use crate::frontend::components::TransitionLink;
use crate::frontend::hooks::{use_course_list, ListStatus};
use crate::models::Course;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let list = use_course_list();

    view! {
        <section class="learn-catalog">
            <h1>"Courses"</h1>
            {move || match list.status.get() {
                ListStatus::Loading => view! { <p class="empty">"Loading courses…"</p> }.into_any(),
                ListStatus::Failed => {
                    view! { <p class="alert alert-error">"Could not load courses."</p> }.into_any()
                }
                ListStatus::Ready => {
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || list.courses.get()
                                key=|course: &Course| course.id
                                children=move |course: Course| view! { <CourseCard course/> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    let href = format!("/learn/courses/{}", course.slug);
    let meta = format!("{} · {} · {} ★", course.category, course.level, course.rating_display());

    view! {
        <TransitionLink href=href class="card">
            <h3>{course.title}</h3>
            <p>{course.description}</p>
            <span class="meta">{meta}</span>
        </TransitionLink>
    }
}
