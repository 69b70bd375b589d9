//! JSON report, written as one document when the computation is complete.

use serde::Serialize;
use std::io::Write;

use crate::broadcast::{BroadcastTree, RoundObserver, RoundSnapshot};
use crate::error::Result;

use super::Report;

#[derive(Serialize)]
struct JsonDocument<'a> {
    rounds: &'a [RoundSnapshot],
    result: &'a BroadcastTree,
}

/// Buffers round snapshots until `finish`, then writes them with the result.
pub struct JsonReport<W: Write> {
    out: W,
    report_rounds: bool,
    rounds: Vec<RoundSnapshot>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W, report_rounds: bool) -> Self {
        Self {
            out,
            report_rounds,
            rounds: Vec::new(),
        }
    }
}

impl<W: Write> RoundObserver for JsonReport<W> {
    fn round_completed(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        if self.report_rounds {
            self.rounds.push(snapshot.clone());
        }
        Ok(())
    }
}

impl<W: Write> Report for JsonReport<W> {
    fn finish(&mut self, tree: &BroadcastTree) -> Result<()> {
        let document = JsonDocument {
            rounds: &self.rounds,
            result: tree,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
