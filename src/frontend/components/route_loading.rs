use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::frontend::loading::{RouteKey, RouteLoadingMachine, TimerCommand, TimerTicket};

/// Handle to the route loading state, available to every component under
/// [`RouteLoadingProvider`].
#[derive(Clone, Copy)]
pub struct RouteLoadingContext {
    machine: RwSignal<RouteLoadingMachine>,
    timer: StoredValue<Option<(TimerTicket, TimeoutHandle)>>,
}

impl RouteLoadingContext {
    fn new() -> Self {
        Self {
            machine: RwSignal::new(RouteLoadingMachine::new()),
            timer: StoredValue::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.machine
            .try_with(RouteLoadingMachine::is_loading)
            .unwrap_or(false)
    }

    pub fn start_loading(&self) {
        if let Some(commands) = self.machine.try_update(|m| m.start_loading()) {
            self.run(commands);
        }
    }

    fn route_changed(&self, route: RouteKey) {
        if let Some(commands) = self.machine.try_update(|m| m.observe_route(route)) {
            self.run(commands);
        }
    }

    fn timer_fired(&self, ticket: TimerTicket) {
        self.timer.try_update_value(|slot| {
            if matches!(*slot, Some((t, _)) if t == ticket) {
                *slot = None;
            }
        });
        self.machine.try_update(|m| m.timer_fired(ticket));
    }

    fn shutdown(&self) {
        if let Some(commands) = self.machine.try_update_untracked(|m| m.shutdown()) {
            self.run(commands);
        }
    }

    fn run(&self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::Cancel(ticket) => self.cancel(ticket),
                TimerCommand::Arm { ticket, after } => self.arm(ticket, after),
            }
        }
    }

    fn cancel(&self, ticket: TimerTicket) {
        let handle = self
            .timer
            .try_update_value(|slot| match *slot {
                Some((t, handle)) if t == ticket => {
                    *slot = None;
                    Some(handle)
                }
                _ => None,
            })
            .flatten();

        if let Some(handle) = handle {
            handle.clear();
        }
    }

    fn arm(&self, ticket: TimerTicket, after: Duration) {
        let ctx = *self;

        match set_timeout_with_handle(move || ctx.timer_fired(ticket), after) {
            Ok(handle) => {
                self.timer.try_set_value(Some((ticket, handle)));
            }
            Err(e) => {
                leptos::logging::warn!("could not arm route loading fallback timer: {:?}", e);
            }
        }
    }
}

pub fn use_route_loading() -> RouteLoadingContext {
    expect_context::<RouteLoadingContext>()
}

/// Tracks route transitions for everything below it. Must sit inside the
/// `Router`.
#[component]
pub fn RouteLoadingProvider(children: Children) -> impl IntoView {
    let ctx = RouteLoadingContext::new();
    provide_context(ctx);

    let location = use_location();
    Effect::new(move |_| {
        let route = RouteKey::new(location.pathname.get(), location.search.get());
        ctx.route_changed(route);
    });

    on_cleanup(move || ctx.shutdown());

    children()
}
