use leptos::prelude::*;

use super::route_loading::use_route_loading;

/// Attribute values of the overlay for one value of `is_loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayView {
    pub class: &'static str,
    pub aria_hidden: &'static str,
    pub aria_busy: &'static str,
    pub style: &'static str,
}

impl OverlayView {
    pub fn for_state(is_loading: bool) -> Self {
        if is_loading {
            Self {
                class: "route-loading-overlay route-loading-overlay--active",
                aria_hidden: "false",
                aria_busy: "true",
                style: "opacity: 1; pointer-events: auto;",
            }
        } else {
            Self {
                class: "route-loading-overlay",
                aria_hidden: "true",
                aria_busy: "false",
                style: "opacity: 0; pointer-events: none;",
            }
        }
    }
}

/// Full-viewport overlay shown while a route transition is in flight.
/// Rendered once, at the app root.
#[component]
pub fn RouteLoadingOverlay() -> impl IntoView {
    let loading = use_route_loading();
    let overlay = move || OverlayView::for_state(loading.is_loading());

    view! {
        <div
            class=move || overlay().class
            style=move || overlay().style
            aria-hidden=move || overlay().aria_hidden
            aria-busy=move || overlay().aria_busy
        >
            <div class="route-loading-bar"></div>
            <div class="route-loading-spinner" role="status">
                <span class="sr-only">"Loading…"</span>
            </div>
        </div>
    }
}
