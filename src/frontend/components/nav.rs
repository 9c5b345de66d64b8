use leptos::prelude::*;

use super::TransitionLink;

/// Top bar of the client app. Links back to server-rendered pages carry
/// `rel="external"` so the router leaves them to the browser.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="site-header">
            <TransitionLink href="/learn" class="brand">
                "CoursePress"
            </TransitionLink>
            <div class="nav-links">
                <TransitionLink href="/learn">"All courses"</TransitionLink>
                <a href="/blog" rel="external">"Blog"</a>
                <a href="/" rel="external">"Home"</a>
            </div>
        </nav>
    }
}
