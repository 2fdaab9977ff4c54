//! Round-robin progress tracking across routes.
//!
//! Pure state machine, no I/O: each tick advances every non-completed route
//! by exactly one waypoint and reports what should be sent. The caller does
//! the packet generation, the POST, and the one-second pacing.

use crate::flight_plan::LoadedRoute;

/// Per-route cursor into its waypoint sequence.
#[derive(Debug, Clone, Copy)]
pub struct RouteProgress {
    /// Index of the next waypoint to send.
    pub cursor: usize,
    pub completed: bool,
}

/// One send produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickItem {
    pub route_index: usize,
    pub waypoint_index: usize,
    /// True when this is the route's final waypoint; the route is already
    /// marked completed by the time the caller sees the item.
    pub route_completed: bool,
}

/// Interleaved scheduler over a fixed set of loaded routes.
pub struct RoundRobin {
    routes: Vec<LoadedRoute>,
    progress: Vec<RouteProgress>,
}

impl RoundRobin {
    pub fn new(routes: Vec<LoadedRoute>) -> Self {
        let progress = routes
            .iter()
            .map(|route| RouteProgress {
                cursor: 0,
                // A plan with no usable rows has nothing to send; completing
                // it here keeps the loop from spinning on it forever.
                completed: route.waypoints.is_empty(),
            })
            .collect();

        Self { routes, progress }
    }

    pub fn route(&self, index: usize) -> &LoadedRoute {
        &self.routes[index]
    }

    pub fn progress(&self, index: usize) -> RouteProgress {
        self.progress[index]
    }

    pub fn all_complete(&self) -> bool {
        self.progress.iter().all(|p| p.completed)
    }

    /// Advance every active route by one waypoint.
    ///
    /// Returns one item per non-completed route, in route declaration order.
    /// The cursor moves unconditionally; whether the subsequent send
    /// succeeds does not matter to the schedule (a failed send still counts
    /// as processed and is never retried).
    pub fn tick(&mut self) -> Vec<TickItem> {
        let mut items = Vec::new();

        for (route_index, route) in self.routes.iter().enumerate() {
            let progress = &mut self.progress[route_index];
            if progress.completed {
                continue;
            }

            let waypoint_index = progress.cursor;
            progress.cursor += 1;
            if progress.cursor >= route.waypoints.len() {
                progress.completed = true;
            }

            items.push(TickItem {
                route_index,
                waypoint_index,
                route_completed: progress.completed,
            });
        }

        items
    }
}
