use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::frontend::navigation::{should_start_loading, LinkClick};

use super::route_loading::use_route_loading;

/// An `<a>` that switches the route loading overlay on before the router
/// takes over the click.
///
/// A caller-supplied `on_click` runs first; if it calls `prevent_default`
/// the link leaves the loading state alone.
///
/// The listener sits on the anchor itself. Delegated `on:click` handlers run
/// from a `window` listener registered after the router's own click
/// handler, which has already called `prevent_default` by then.
#[component]
pub fn TransitionLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] download: bool,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let loading = use_route_loading();
    let click_href = href.clone();
    let click_target = target.clone();

    let handle_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click {
            on_click.run(ev.clone());
        }

        let click = LinkClick {
            button: ev.button(),
            meta_key: ev.meta_key(),
            ctrl_key: ev.ctrl_key(),
            shift_key: ev.shift_key(),
            alt_key: ev.alt_key(),
            default_prevented: ev.default_prevented(),
            href: &click_href,
            target: click_target.as_deref(),
            download,
        };

        if should_start_loading(&click) {
            loading.start_loading();
        }
    };

    view! {
        <a
            href=href
            target=target
            class=class
            download=download.then_some("")
            on:click=handle_click
        >
            {children()}
        </a>
    }
}
