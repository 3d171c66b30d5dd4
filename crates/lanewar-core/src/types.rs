//! Fundamental geometric, identity and timing types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the battlefield (map units).
/// x runs along the lane from the order base to the chaos base, y is across it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Step toward `target` by at most `max_step`, never overshooting it.
    pub fn step_towards(&self, target: &Position, max_step: f64) -> Position {
        let delta = target.as_vec() - self.as_vec();
        let dist = delta.length();
        if dist <= max_step || dist == 0.0 {
            return *target;
        }
        (self.as_vec() + delta / dist * max_step).into()
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Stable identifier of a unit. Assigned in spawn order and never reused,
/// so ordering by id is ordering by insertion into the store.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Stable identifier of an in-flight projectile, assigned in spawn order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks advanced so far.
    pub tick: u64,
    /// Session clock in milliseconds, as passed to the last tick.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick to the given session clock.
    pub fn advance(&mut self, now_ms: f64) {
        self.tick += 1;
        self.elapsed_ms = now_ms;
    }
}

/// A repeating session deadline (minion waves, passive gold).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub next_at_ms: f64,
    pub interval_ms: f64,
}

impl Deadline {
    pub fn new(first_at_ms: f64, interval_ms: f64) -> Self {
        Self {
            next_at_ms: first_at_ms,
            interval_ms,
        }
    }

    /// Returns true at most once per call when `now_ms` has passed the deadline,
    /// and moves the deadline forward by one interval.
    ///
    /// The deadline stays on its own grid. If the clock has run more than a full
    /// interval past it, the grid restarts at `now_ms + interval`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if now_ms <= self.next_at_ms {
            return false;
        }
        self.next_at_ms += self.interval_ms;
        if self.next_at_ms <= now_ms {
            self.next_at_ms = now_ms + self.interval_ms;
        }
        true
    }
}
