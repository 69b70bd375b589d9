//! Type definitions for the broadcast tree computation.
//!
//! Contains the data structures passed between the round-loop stages:
//! - Node positions and stable node identifiers
//! - Candidates produced by the generator and consumed by the selector
//! - The transmission path log and per-round snapshots
//! - The final broadcast tree handed to the reporters

use serde::Serialize;
use std::fmt;

/// Stable node identifier, assigned at load time in input order. The source is always `0`.
pub type NodeId = usize;

/// Identifier of the broadcast source.
pub const SOURCE_NODE: NodeId = 0;

/// Simple 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How a candidate extends coverage by one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Raise the power of a node that already transmits.
    ExtendTransmitter,
    /// Turn a covered, silent relay into a transmitter.
    PromoteRelay,
}

/// One way of covering one uncovered node, with its cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Power that must be added at `source` to reach `target`.
    pub cost: f64,
    pub source: NodeId,
    pub target: NodeId,
    pub kind: CandidateKind,
}

/// A node together with its position, as seen in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodePosition {
    pub id: NodeId,
    pub position: Point,
}

/// A transmitting node with its current power (squared radius).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransmitterState {
    pub id: NodeId,
    pub position: Point,
    pub power: f64,
}

/// Entry of the transmission path log: which node raised its power, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransmissionStep {
    /// 1-based round in which the step was applied.
    pub stage: usize,
    pub source: NodeId,
    /// Position of the node whose power increased.
    pub position: Point,
    pub power_delta: f64,
    pub kind: CandidateKind,
    /// The node covered by this step.
    pub target: NodePosition,
}

/// State of the coverage partition at the end of a round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub round: usize,
    pub transmitters: Vec<TransmitterState>,
    pub relays: Vec<NodePosition>,
    pub uncovered: Vec<NodePosition>,
}

/// Final result of a completed computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastTree {
    /// Transmitting nodes in the order they started transmitting.
    pub transmitters: Vec<TransmitterState>,
    pub path: Vec<TransmissionStep>,
    /// Sum of all transmitter powers.
    pub total_cost: f64,
    pub rounds: usize,
}
