//! Cost model for the broadcast tree.
//!
//! Transmit power follows `a * r^b` with `a = 1` and `b = 2`, so the power a node
//! needs to reach another one is the squared distance between them. All costs are
//! expressed in squared world units; no square root is ever taken.

use super::types::Point;

/// Default tolerance (per coordinate) under which two positions denote the same node.
pub const MATCH_TOLERANCE: f64 = 1e-4;

/// Squared Euclidean distance in world units.
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Power a silent node needs to reach `target` directly.
pub fn link_cost(from: &Point, target: &Point) -> f64 {
    distance2(from, target)
}

/// Additional power a transmitter already running at `current_power` needs to reach `target`.
///
/// # Parameters
///
/// * `transmitter` - Position of the transmitting node
/// * `current_power` - Power the node already emits (squared radius)
/// * `target` - Position of the node to reach
///
/// # Returns
///
/// `link_cost(transmitter, target) - current_power`. Not clamped: a target
/// already inside the current radius yields a non-positive cost.
pub fn incremental_cost(transmitter: &Point, current_power: f64, target: &Point) -> f64 {
    link_cost(transmitter, target) - current_power
}

/// Power a relay (currently at power 0) needs to start transmitting and reach `target`.
pub fn promotion_cost(relay: &Point, target: &Point) -> f64 {
    link_cost(relay, target)
}

impl Point {
    /// Coordinate-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}
