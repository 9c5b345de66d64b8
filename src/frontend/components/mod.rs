//! Reusable UI components for the client app

mod loading_overlay;
mod nav;
mod route_loading;
mod transition_link;

pub use loading_overlay::{OverlayView, RouteLoadingOverlay};
pub use nav::Nav;
pub use route_loading::{use_route_loading, RouteLoadingContext, RouteLoadingProvider};
pub use transition_link::TransitionLink;
