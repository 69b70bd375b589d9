//! Three-way coverage partition maintained by the round loop.
//!
//! Every node belongs to exactly one of:
//! - `transmitting`: covered and emitting, with a current power
//! - `relays`: covered but silent (power 0), eligible for promotion
//! - `uncovered`: not reachable by the tree yet
//!
//! Each set is an ordered mapping keyed by `NodeId` that also keeps its own
//! insertion-order sequence, because candidate enumeration order (and thus
//! tie-breaking) follows the order nodes entered each set.

use std::collections::HashMap;

use crate::error::{BroadcastError, Result};

use super::types::NodeId;

/// Ordered mapping from node id to a per-node value, iterated in insertion order.
#[derive(Debug, Clone)]
struct OrderedNodes<V> {
    order: Vec<NodeId>,
    values: HashMap<NodeId, V>,
}

impl<V: Copy> OrderedNodes<V> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// Append a node. Returns `false` (and changes nothing) if it is already present.
    fn insert(&mut self, id: NodeId, value: V) -> bool {
        if self.values.contains_key(&id) {
            return false;
        }
        self.values.insert(id, value);
        self.order.push(id);
        true
    }

    /// Remove a node, keeping the relative order of the remaining ones.
    fn remove(&mut self, id: NodeId) -> Option<V> {
        let value = self.values.remove(&id)?;
        if let Some(index) = self.order.iter().position(|&n| n == id) {
            self.order.remove(index);
        }
        Some(value)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.values.get_mut(&id)
    }

    fn iter(&self) -> impl Iterator<Item = (NodeId, V)> + '_ {
        self.order.iter().map(move |id| (*id, self.values[id]))
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Coverage partition over nodes `0..node_count`.
#[derive(Debug, Clone)]
pub struct CoveragePartition {
    transmitting: OrderedNodes<f64>,
    relays: OrderedNodes<()>,
    uncovered: OrderedNodes<()>,
}

impl CoveragePartition {
    /// Initial partition: `source` transmits with power 0, every other node is uncovered.
    pub fn new(node_count: usize, source: NodeId) -> Self {
        let mut transmitting = OrderedNodes::new();
        transmitting.insert(source, 0.0);
        let mut uncovered = OrderedNodes::new();
        for id in (0..node_count).filter(|&id| id != source) {
            uncovered.insert(id, ());
        }
        Self {
            transmitting,
            relays: OrderedNodes::new(),
            uncovered,
        }
    }

    /// Transmitting nodes with their power, in the order they started transmitting.
    pub fn transmitters(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.transmitting.iter()
    }

    /// Covered silent nodes, in the order they were covered.
    pub fn relays(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.relays.iter().map(|(id, _)| id)
    }

    /// Uncovered nodes, in load order minus the ones already covered.
    pub fn uncovered(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.uncovered.iter().map(|(id, _)| id)
    }

    pub fn transmitting_count(&self) -> usize {
        self.transmitting.len()
    }

    pub fn relay_count(&self) -> usize {
        self.relays.len()
    }

    /// True once every node is covered.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Sum of all transmitter powers.
    pub fn total_power(&self) -> f64 {
        self.transmitting.iter().map(|(_, power)| power).sum()
    }

    /// Raise the power of a transmitting node by `delta`.
    pub(super) fn extend_power(&mut self, id: NodeId, delta: f64) -> Result<()> {
        let power = self
            .transmitting
            .get_mut(id)
            .ok_or_else(|| BroadcastError::AlgorithmInvariant(format!("node {} is not transmitting", id)))?;
        *power += delta;
        Ok(())
    }

    /// Move a relay into the transmitting set with the given initial power.
    pub(super) fn promote(&mut self, id: NodeId, power: f64) -> Result<()> {
        self.relays
            .remove(id)
            .ok_or_else(|| BroadcastError::AlgorithmInvariant(format!("node {} is not a relay", id)))?;
        self.transmitting.insert(id, power);
        Ok(())
    }

    /// Move an uncovered node into the relay set.
    pub(super) fn cover(&mut self, id: NodeId) -> Result<()> {
        self.uncovered
            .remove(id)
            .ok_or_else(|| BroadcastError::AlgorithmInvariant(format!("node {} is not uncovered", id)))?;
        self.relays.insert(id, ());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_partition_has_only_source_transmitting() {
        let partition = CoveragePartition::new(4, 0);
        assert_eq!(partition.transmitters().collect::<Vec<_>>(), vec![(0, 0.0)]);
        assert_eq!(partition.relay_count(), 0);
        assert_eq!(partition.uncovered().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!partition.is_complete());
    }

    #[test]
    fn single_node_partition_is_complete() {
        let partition = CoveragePartition::new(1, 0);
        assert!(partition.is_complete());
        assert_eq!(partition.total_power(), 0.0);
    }

    #[test]
    fn cover_then_promote_moves_node_across_sets() {
        let mut partition = CoveragePartition::new(3, 0);
        partition.cover(2).unwrap();
        assert_eq!(partition.relays().collect::<Vec<_>>(), vec![2]);
        assert_eq!(partition.uncovered().collect::<Vec<_>>(), vec![1]);

        partition.promote(2, 1.5).unwrap();
        assert_eq!(partition.relay_count(), 0);
        assert_eq!(partition.transmitters().collect::<Vec<_>>(), vec![(0, 0.0), (2, 1.5)]);
    }

    #[test]
    fn removal_keeps_insertion_order() {
        let mut partition = CoveragePartition::new(5, 0);
        partition.cover(2).unwrap();
        assert_eq!(partition.uncovered().collect::<Vec<_>>(), vec![1, 3, 4]);
        partition.cover(4).unwrap();
        partition.cover(1).unwrap();
        assert_eq!(partition.relays().collect::<Vec<_>>(), vec![2, 4, 1]);
        partition.promote(4, 1.0).unwrap();
        assert_eq!(partition.relays().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn extend_power_accumulates() {
        let mut partition = CoveragePartition::new(2, 0);
        partition.extend_power(0, 1.0).unwrap();
        partition.extend_power(0, 3.0).unwrap();
        assert_eq!(partition.transmitters().collect::<Vec<_>>(), vec![(0, 4.0)]);
        assert_eq!(partition.total_power(), 4.0);
    }

    #[test]
    fn moving_a_node_from_the_wrong_set_is_an_invariant_violation() {
        let mut partition = CoveragePartition::new(3, 0);
        assert!(matches!(partition.extend_power(1, 1.0), Err(BroadcastError::AlgorithmInvariant(_))));
        assert!(matches!(partition.promote(1, 1.0), Err(BroadcastError::AlgorithmInvariant(_))));
        assert!(matches!(partition.cover(0), Err(BroadcastError::AlgorithmInvariant(_))));
        partition.cover(1).unwrap();
        assert!(matches!(partition.cover(1), Err(BroadcastError::AlgorithmInvariant(_))));
    }
}
