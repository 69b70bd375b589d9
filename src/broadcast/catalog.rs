//! Node positions, indexed by the stable id assigned at load time.

use crate::error::{BroadcastError, Result};

use super::types::{NodeId, NodePosition, Point, SOURCE_NODE};

/// Immutable collection of node positions. Node `i` is the `i`-th location read.
#[derive(Debug, Clone)]
pub struct NodeCatalog {
    positions: Vec<Point>,
    tolerance: f64,
}

impl NodeCatalog {
    /// Build a catalog from locations in input order. The first location is the source.
    ///
    /// # Errors
    ///
    /// `MissingSource` if `locations` is empty.
    pub fn new(locations: Vec<Point>, tolerance: f64) -> Result<Self> {
        if locations.is_empty() {
            return Err(BroadcastError::MissingSource);
        }
        Ok(Self {
            positions: locations,
            tolerance,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn source(&self) -> NodeId {
        SOURCE_NODE
    }

    /// Position of a node. Ids always come from this catalog, so indexing cannot fail.
    pub fn position(&self, id: NodeId) -> Point {
        self.positions[id]
    }

    pub fn node(&self, id: NodeId) -> NodePosition {
        NodePosition {
            id,
            position: self.positions[id],
        }
    }

    /// Pairs `(earlier, later)` of distinct nodes sharing a position within tolerance.
    pub fn coincident_pairs(&self) -> Vec<(NodeId, NodeId)> {
        let mut pairs = Vec::new();
        for (later, position) in self.positions.iter().enumerate() {
            if let Some(earlier) = self.positions[..later].iter().position(|p| p.approx_eq(position, self.tolerance)) {
                pairs.push((earlier, later));
            }
        }
        pairs
    }
}
