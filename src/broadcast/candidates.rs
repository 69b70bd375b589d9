//! Candidate generation for one round.
//!
//! Every (transmitter, uncovered) pair and every (relay, uncovered) pair is a
//! candidate; nothing is filtered out. Enumeration order is fixed because the
//! selector breaks cost ties by first occurrence:
//! 1. extension candidates, then promotion candidates
//! 2. within a group, sources in set order (outer loop)
//! 3. for each source, uncovered targets in set order (inner loop)

use super::catalog::NodeCatalog;
use super::geometry::{incremental_cost, promotion_cost};
use super::partition::CoveragePartition;
use super::types::{Candidate, CandidateKind};

/// Enumerate all candidates for the current partition.
///
/// # Parameters
///
/// * `catalog` - Node positions by id
/// * `partition` - Current coverage partition
///
/// # Returns
///
/// `(|transmitting| + |relays|) * |uncovered|` candidates in enumeration order:
/// every extension first, then every promotion. Empty once nothing is uncovered.
pub fn generate_candidates(catalog: &NodeCatalog, partition: &CoveragePartition) -> Vec<Candidate> {
    let uncovered: Vec<_> = partition.uncovered().map(|id| (id, catalog.position(id))).collect();
    let sources = partition.transmitting_count() + partition.relay_count();
    let mut candidates = Vec::with_capacity(sources * uncovered.len());

    for (source, power) in partition.transmitters() {
        let origin = catalog.position(source);
        for (target, position) in &uncovered {
            candidates.push(Candidate {
                cost: incremental_cost(&origin, power, position),
                source,
                target: *target,
                kind: CandidateKind::ExtendTransmitter,
            });
        }
    }

    for relay in partition.relays() {
        let origin = catalog.position(relay);
        for (target, position) in &uncovered {
            candidates.push(Candidate {
                cost: promotion_cost(&origin, position),
                source: relay,
                target: *target,
                kind: CandidateKind::PromoteRelay,
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::geometry::MATCH_TOLERANCE;
    use crate::broadcast::types::Point;

    fn catalog(points: &[(f64, f64)]) -> NodeCatalog {
        NodeCatalog::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect(), MATCH_TOLERANCE).unwrap()
    }

    #[test]
    fn first_round_has_only_extension_candidates() {
        let catalog = catalog(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let partition = CoveragePartition::new(catalog.len(), 0);
        let candidates = generate_candidates(&catalog, &partition);

        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.kind == CandidateKind::ExtendTransmitter && c.source == 0));
        assert_eq!(candidates[0].target, 1);
        assert_eq!(candidates[0].cost, 1.0);
        assert_eq!(candidates[1].target, 2);
        assert_eq!(candidates[1].cost, 4.0);
    }

    #[test]
    fn enumeration_order_is_extensions_then_promotions() {
        let catalog = catalog(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let mut partition = CoveragePartition::new(catalog.len(), 0);
        partition.extend_power(0, 1.0).unwrap();
        partition.cover(1).unwrap();

        let candidates = generate_candidates(&catalog, &partition);
        let order: Vec<_> = candidates.iter().map(|c| (c.kind, c.source, c.target)).collect();
        assert_eq!(
            order,
            vec![
                (CandidateKind::ExtendTransmitter, 0, 2),
                (CandidateKind::ExtendTransmitter, 0, 3),
                (CandidateKind::PromoteRelay, 1, 2),
                (CandidateKind::PromoteRelay, 1, 3),
            ]
        );
        // Extension pays only the increment over the current power
        assert_eq!(candidates[0].cost, 3.0);
        assert_eq!(candidates[1].cost, 8.0);
        // Promotion pays the full link cost
        assert_eq!(candidates[2].cost, 1.0);
        assert_eq!(candidates[3].cost, 4.0);
    }

    #[test]
    fn complete_partition_yields_no_candidates() {
        let catalog = catalog(&[(0.0, 0.0)]);
        let partition = CoveragePartition::new(catalog.len(), 0);
        assert!(generate_candidates(&catalog, &partition).is_empty());
    }
}
