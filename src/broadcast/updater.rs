//! Application of a round's winning candidate.
//!
//! This is the only place where the coverage partition is mutated once the
//! computation has started.

use crate::error::Result;

use super::catalog::NodeCatalog;
use super::partition::CoveragePartition;
use super::types::{Candidate, CandidateKind, TransmissionStep};

/// Apply `winner` to the partition and append the matching step to `path`.
///
/// - `ExtendTransmitter`: the source's power grows by the candidate cost.
/// - `PromoteRelay`: the source leaves the relay set and starts transmitting at the candidate cost.
///
/// In both cases the target moves from uncovered to relay.
///
/// # Parameters
///
/// * `catalog` - Node positions, used to record the step
/// * `partition` - Partition to update
/// * `path` - Transmission log; receives one step with the next stage number
/// * `winner` - Candidate chosen by the selector this round
///
/// # Returns
///
/// `Ok(())` once the partition is updated and the step appended.
///
/// # Errors
///
/// `AlgorithmInvariant` if the candidate does not match the partition (source not
/// in the expected set, or target already covered). `path` is left untouched.
pub fn apply_candidate(catalog: &NodeCatalog, partition: &mut CoveragePartition, path: &mut Vec<TransmissionStep>, winner: &Candidate) -> Result<()> {
    match winner.kind {
        CandidateKind::ExtendTransmitter => partition.extend_power(winner.source, winner.cost)?,
        CandidateKind::PromoteRelay => partition.promote(winner.source, winner.cost)?,
    }
    partition.cover(winner.target)?;

    path.push(TransmissionStep {
        stage: path.len() + 1,
        source: winner.source,
        position: catalog.position(winner.source),
        power_delta: winner.cost,
        kind: winner.kind,
        target: catalog.node(winner.target),
    });
    Ok(())
}
