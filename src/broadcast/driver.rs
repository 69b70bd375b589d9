//! Round loop driving the broadcast tree construction.
//!
//! Each round:
//! 1) generate every candidate for the current partition
//! 2) select the cheapest one (first occurrence on ties)
//! 3) apply it, which covers exactly one more node
//! 4) publish a snapshot of the partition to the observer
//!
//! The loop stops when no node is left uncovered, i.e. after exactly `n - 1`
//! rounds for `n` nodes.

use crate::error::Result;

use super::candidates::generate_candidates;
use super::catalog::NodeCatalog;
use super::partition::CoveragePartition;
use super::selector::select_cheapest;
use super::types::{BroadcastTree, Point, RoundSnapshot, TransmissionStep, TransmitterState};
use super::updater::apply_candidate;

/// Receives the partition state at the end of every round.
pub trait RoundObserver {
    fn round_completed(&mut self, snapshot: &RoundSnapshot) -> Result<()>;
}

impl RoundObserver for Vec<RoundSnapshot> {
    fn round_completed(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// State of one broadcast tree computation.
pub struct Simulation {
    catalog: NodeCatalog,
    partition: CoveragePartition,
    path: Vec<TransmissionStep>,
    round: usize,
}

impl Simulation {
    /// Start a computation over `locations`; the first location is the source.
    ///
    /// # Errors
    ///
    /// `MissingSource` if `locations` is empty.
    pub fn new(locations: Vec<Point>, tolerance: f64) -> Result<Self> {
        let catalog = NodeCatalog::new(locations, tolerance)?;
        for (earlier, later) in catalog.coincident_pairs() {
            log::warn!(
                "Node {} at {} coincides with node {}; both are kept as separate nodes",
                later,
                catalog.position(later),
                earlier
            );
        }
        let partition = CoveragePartition::new(catalog.len(), catalog.source());
        Ok(Self {
            catalog,
            partition,
            path: Vec::new(),
            round: 0,
        })
    }

    /// Run a single round. Returns `None` without doing anything once every node is covered.
    pub fn step(&mut self) -> Result<Option<RoundSnapshot>> {
        if self.partition.is_complete() {
            return Ok(None);
        }
        self.round += 1;

        let candidates = generate_candidates(&self.catalog, &self.partition);
        log::trace!("Round {}: {} candidates", self.round, candidates.len());
        let winner = select_cheapest(&candidates)?;
        log::debug!(
            "Round {}: {:?} node {} -> node {} (cost {})",
            self.round,
            winner.kind,
            winner.source,
            winner.target,
            winner.cost
        );
        apply_candidate(&self.catalog, &mut self.partition, &mut self.path, &winner)?;

        Ok(Some(self.snapshot()))
    }

    /// Run rounds until every node is covered, publishing each round to `observer`.
    pub fn run<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) -> Result<BroadcastTree> {
        while let Some(snapshot) = self.step()? {
            observer.round_completed(&snapshot)?;
        }
        let tree = self.tree();
        log::info!("Broadcast tree complete after {} rounds, total cost {}", tree.rounds, tree.total_cost);
        Ok(tree)
    }

    /// Current state of the partition.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round,
            transmitters: self.transmitters(),
            relays: self.partition.relays().map(|id| self.catalog.node(id)).collect(),
            uncovered: self.partition.uncovered().map(|id| self.catalog.node(id)).collect(),
        }
    }

    /// Transmitters, path log and total cost accumulated so far.
    pub fn tree(&self) -> BroadcastTree {
        BroadcastTree {
            transmitters: self.transmitters(),
            path: self.path.clone(),
            total_cost: self.partition.total_power(),
            rounds: self.round,
        }
    }

    fn transmitters(&self) -> Vec<TransmitterState> {
        self.partition
            .transmitters()
            .map(|(id, power)| TransmitterState {
                id,
                position: self.catalog.position(id),
                power,
            })
            .collect()
    }
}
