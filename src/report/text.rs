//! Console report.

use std::io::Write;

use crate::broadcast::{BroadcastTree, RoundObserver, RoundSnapshot};
use crate::error::Result;

use super::Report;

pub struct TextReport<W: Write> {
    out: W,
    report_rounds: bool,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W, report_rounds: bool) -> Self {
        Self { out, report_rounds }
    }
}

impl<W: Write> RoundObserver for TextReport<W> {
    fn round_completed(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        if !self.report_rounds {
            return Ok(());
        }
        writeln!(self.out, "At the end of round {}:", snapshot.round)?;
        for t in &snapshot.transmitters {
            writeln!(self.out, "Transmitting node: Node ({},{}), with a power of: {}", t.position.x, t.position.y, t.power)?;
        }
        for n in &snapshot.uncovered {
            writeln!(self.out, "Uncovered node: {}, {}", n.position.x, n.position.y)?;
        }
        Ok(())
    }
}

impl<W: Write> Report for TextReport<W> {
    fn finish(&mut self, tree: &BroadcastTree) -> Result<()> {
        writeln!(self.out, "======================== Final Results ========================")?;
        writeln!(self.out, "Transmitting nodes (at the end):")?;
        for t in &tree.transmitters {
            writeln!(self.out, "Node {}, transmitting with a power of: {}", t.position, t.power)?;
        }
        writeln!(self.out, "Transmission path:")?;
        for step in &tree.path {
            writeln!(self.out, "Stage{}: Node {}, increases its power by: {}", step.stage, step.position, step.power_delta)?;
        }
        writeln!(self.out, "Total transmission cost is: {}", tree.total_cost)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::types::{NodePosition, TransmitterState};
    use crate::broadcast::{MATCH_TOLERANCE, Point, Simulation};

    fn render(report_rounds: bool) -> String {
        let locations = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let mut simulation = Simulation::new(locations, MATCH_TOLERANCE).unwrap();
        let mut buffer = Vec::new();
        {
            let mut report = TextReport::new(&mut buffer, report_rounds);
            let tree = simulation.run(&mut report).unwrap();
            report.finish(&tree).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_rounds_and_final_results() {
        let output = render(true);
        let expected = "\
At the end of round 1:
Transmitting node: Node (0,0), with a power of: 1
Uncovered node: 2, 0
At the end of round 2:
Transmitting node: Node (0,0), with a power of: 1
Transmitting node: Node (1,0), with a power of: 1
======================== Final Results ========================
Transmitting nodes (at the end):
Node (0, 0), transmitting with a power of: 1
Node (1, 0), transmitting with a power of: 1
Transmission path:
Stage1: Node (0, 0), increases its power by: 1
Stage2: Node (1, 0), increases its power by: 1
Total transmission cost is: 2
";
        assert_eq!(output, expected);
    }

    #[test]
    fn round_lines_print_fractional_coordinates_unpadded() {
        let snapshot = RoundSnapshot {
            round: 3,
            transmitters: vec![TransmitterState {
                id: 0,
                position: Point::new(-1.5, 2.25),
                power: 0.5,
            }],
            relays: Vec::new(),
            uncovered: vec![NodePosition {
                id: 4,
                position: Point::new(3.0, -0.75),
            }],
        };
        let mut buffer = Vec::new();
        TextReport::new(&mut buffer, true).round_completed(&snapshot).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "At the end of round 3:\nTransmitting node: Node (-1.5,2.25), with a power of: 0.5\nUncovered node: 3, -0.75\n"
        );
    }

    #[test]
    fn round_dump_can_be_disabled() {
        let output = render(false);
        assert!(!output.contains("At the end of round"));
        assert!(output.contains("Total transmission cost is: 2"));
    }
}
