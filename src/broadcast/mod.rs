//! Broadcast Incremental Power (BIP) core.
//!
//! Starting from the source, the tree grows one node per round by choosing the
//! cheapest of two moves: raise the power of a node that already transmits, or
//! make a covered but silent node start transmitting.
//!
//! ## Module Organization
//!
//! - `types`: Shared data structures (points, candidates, path log, snapshots)
//! - `geometry`: Squared-distance cost model
//! - `catalog`: Node positions keyed by load-time id
//! - `partition`: Transmitting / relay / uncovered node sets
//! - `candidates`: Per-round candidate enumeration
//! - `selector`: Stable argmin over the candidates
//! - `updater`: Applies the winner to the partition
//! - `driver`: The round loop (`Simulation`)

pub mod candidates;
pub mod catalog;
pub mod driver;
pub mod geometry;
pub mod partition;
pub mod selector;
pub mod types;
pub mod updater;

pub use driver::{RoundObserver, Simulation};
pub use geometry::MATCH_TOLERANCE;
pub use types::{BroadcastTree, Point, RoundSnapshot};
