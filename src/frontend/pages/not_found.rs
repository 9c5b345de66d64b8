//! 404 page of the client app

use leptos::prelude::*;

use crate::frontend::components::TransitionLink;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"Page not found"</p>
            <p class="not-found-desc">"The course or page you are looking for does not exist."</p>
            <TransitionLink href="/learn" class="btn-primary">
                "Back to courses"
            </TransitionLink>
        </div>
    }
}
