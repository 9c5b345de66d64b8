pub mod components;
pub mod hooks;
pub mod loading;
pub mod navigation;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use components::{Nav, RouteLoadingOverlay, RouteLoadingProvider};
use pages::{CatalogPage, CoursePage, NotFound};

/// Client app mounted under `/learn`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Learn - CoursePress"/>
        <Meta name="description" content="Step-by-step courses with lessons you can follow at your own pace"/>

        <Router>
            <RouteLoadingProvider>
                <RouteLoadingOverlay/>
                <Nav/>
                <main class="site-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/learn") view=CatalogPage/>
                        <Route path=path!("/learn/courses/:slug") view=CoursePage/>
                    </Routes>
                </main>
            </RouteLoadingProvider>
        </Router>
    }
}
