//! Route-transition loading state.
//!
//! [`RouteLoadingMachine`] owns the `is_loading` flag and decides when the
//! fallback timer must be armed or cancelled. It never touches a clock
//! itself: every transition returns the [`TimerCommand`]s the caller has to
//! carry out, which keeps the machine usable both from the browser provider
//! and from plain tests.
//!
//! Each armed timer is identified by a [`TimerTicket`]. Only the ticket of
//! the current loading session can clear the flag, so a callback that
//! slipped past cancellation is a no-op.

use std::time::Duration;

/// How long a loading session may last without a route change.
pub const LOADING_FALLBACK: Duration = Duration::from_millis(8000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Arm { ticket: TimerTicket, after: Duration },
    Cancel(TimerTicket),
}

/// Pathname plus serialized query string; a change in either counts as a
/// completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteKey {
    pub pathname: String,
    pub search: String,
}

impl RouteKey {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Idle,
    Loading { ticket: TimerTicket },
}

#[derive(Debug, Clone)]
pub struct RouteLoadingMachine {
    phase: LoadingPhase,
    last_ticket: u64,
    route: Option<RouteKey>,
}

impl Default for RouteLoadingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteLoadingMachine {
    pub fn new() -> Self {
        Self {
            phase: LoadingPhase::Idle,
            last_ticket: 0,
            route: None,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadingPhase::Loading { .. })
    }

    pub fn pending_ticket(&self) -> Option<TimerTicket> {
        match self.phase {
            LoadingPhase::Idle => None,
            LoadingPhase::Loading { ticket } => Some(ticket),
        }
    }

    /// Enters `Loading` with a fresh fallback window. Calling it while
    /// already loading restarts the window instead of extending it.
    pub fn start_loading(&mut self) -> Vec<TimerCommand> {
        let mut commands = Vec::with_capacity(2);

        if let Some(previous) = self.pending_ticket() {
            commands.push(TimerCommand::Cancel(previous));
        }

        self.last_ticket += 1;
        let ticket = TimerTicket(self.last_ticket);
        self.phase = LoadingPhase::Loading { ticket };

        commands.push(TimerCommand::Arm {
            ticket,
            after: LOADING_FALLBACK,
        });

        commands
    }

    /// The fallback timer for `ticket` fired. Returns whether that cleared
    /// the flag; stale tickets change nothing.
    pub fn timer_fired(&mut self, ticket: TimerTicket) -> bool {
        if self.pending_ticket() == Some(ticket) {
            self.phase = LoadingPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Records the current route. The first observation only remembers it;
    /// any later change ends the loading session.
    pub fn observe_route(&mut self, route: RouteKey) -> Vec<TimerCommand> {
        let changed = self.route.as_ref().is_some_and(|r| *r != route);
        self.route = Some(route);

        if changed {
            self.finish()
        } else {
            Vec::new()
        }
    }

    /// The owner is going away: cancel whatever is pending.
    pub fn shutdown(&mut self) -> Vec<TimerCommand> {
        self.finish()
    }

    fn finish(&mut self) -> Vec<TimerCommand> {
        let pending = self.pending_ticket();
        self.phase = LoadingPhase::Idle;
        pending.map(TimerCommand::Cancel).into_iter().collect()
    }
}
