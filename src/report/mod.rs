//! Reporting of round snapshots and of the final broadcast tree.
//!
//! - `text`: human-readable console dump
//! - `json`: a single JSON document written once the tree is complete

pub mod json;
pub mod text;

use std::io::Write;

use crate::broadcast::{BroadcastTree, RoundObserver};
use crate::common::config::{OutputFormat, RunConfig};
use crate::error::Result;

pub use json::JsonReport;
pub use text::TextReport;

/// Round observer that also renders the final result.
pub trait Report: RoundObserver {
    fn finish(&mut self, tree: &BroadcastTree) -> Result<()>;
}

/// Reporter selected by the run configuration.
pub fn reporter_for<'a>(config: &RunConfig, out: Box<dyn Write + 'a>) -> Box<dyn Report + 'a> {
    match config.output {
        OutputFormat::Text => Box::new(TextReport::new(out, config.report_rounds)),
        OutputFormat::Json => Box::new(JsonReport::new(out, config.report_rounds)),
    }
}
