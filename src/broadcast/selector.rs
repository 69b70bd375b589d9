//! Round winner selection.

use crate::error::{BroadcastError, Result};

use super::types::Candidate;

/// Cheapest candidate of the round, ties broken by first occurrence.
///
/// # Parameters
///
/// * `candidates` - Candidates in enumeration order
///
/// # Returns
///
/// A copy of the lowest-cost candidate. Among equal costs the earliest one wins.
///
/// # Errors
///
/// `AlgorithmInvariant` if `candidates` is empty: the driver only asks for a
/// winner while uncovered nodes remain, and the source always transmits.
pub fn select_cheapest(candidates: &[Candidate]) -> Result<Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates {
        // Strict comparison keeps the earliest of equal-cost candidates
        if best.is_none_or(|b| candidate.cost < b.cost) {
            best = Some(candidate);
        }
    }
    best.copied()
        .ok_or_else(|| BroadcastError::AlgorithmInvariant("no candidate available while nodes remain uncovered".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::types::CandidateKind;

    fn candidate(cost: f64, source: usize, target: usize, kind: CandidateKind) -> Candidate {
        Candidate { cost, source, target, kind }
    }

    #[test]
    fn picks_minimum_cost() {
        let candidates = vec![
            candidate(3.0, 0, 2, CandidateKind::ExtendTransmitter),
            candidate(1.0, 1, 2, CandidateKind::PromoteRelay),
            candidate(2.0, 0, 3, CandidateKind::ExtendTransmitter),
        ];
        let winner = select_cheapest(&candidates).unwrap();
        assert_eq!(winner.kind, CandidateKind::PromoteRelay);
        assert_eq!(winner.cost, 1.0);
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        let candidates = vec![
            candidate(4.0, 0, 1, CandidateKind::ExtendTransmitter),
            candidate(1.0, 0, 2, CandidateKind::ExtendTransmitter),
            candidate(1.0, 3, 2, CandidateKind::PromoteRelay),
            candidate(1.0, 0, 4, CandidateKind::ExtendTransmitter),
        ];
        let winner = select_cheapest(&candidates).unwrap();
        assert_eq!((winner.source, winner.target, winner.kind), (0, 2, CandidateKind::ExtendTransmitter));
    }

    #[test]
    fn negative_cost_wins() {
        let candidates = vec![
            candidate(0.5, 0, 1, CandidateKind::ExtendTransmitter),
            candidate(-1e-12, 0, 2, CandidateKind::ExtendTransmitter),
        ];
        assert_eq!(select_cheapest(&candidates).unwrap().target, 2);
    }

    #[test]
    fn empty_collection_is_an_invariant_violation() {
        assert!(matches!(select_cheapest(&[]), Err(BroadcastError::AlgorithmInvariant(_))));
    }
}
