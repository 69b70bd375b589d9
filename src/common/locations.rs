//! Node locations loading and parsing.
//!
//! The locations file holds one node per line as a parenthesized pair:
//!
//! ```text
//! (0,0)
//! (3.5,4)
//! (-1.25,7e2)
//! ```
//!
//! Blank lines are skipped. The first node is the broadcast source.

use std::fs;
use std::path::Path;

use crate::broadcast::Point;
use crate::error::{BroadcastError, Result};

/// Load node locations from a file.
///
/// A file that cannot be read yields no locations; the caller then fails with
/// `MissingSource` when it looks for the source node.
///
/// # Errors
///
/// `InputFormat` for the first malformed line.
pub fn load_locations(path: &Path) -> Result<Vec<Point>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to read locations file {}: {}", path.display(), e);
            return Ok(Vec::new());
        }
    };
    let locations = parse_locations(&data)?;
    log::info!("Loaded {} node locations from {}", locations.len(), path.display());
    Ok(locations)
}

/// Parse the content of a locations file.
pub fn parse_locations(data: &str) -> Result<Vec<Point>> {
    data.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_location(line).map_err(|reason| input_error(index + 1, line, reason)))
        .collect()
}

/// Parse a single `(x,y)` line. Splits on the first comma.
fn parse_location(line: &str) -> std::result::Result<Point, String> {
    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| "expected a parenthesized pair like (x,y)".to_string())?;
    let (x, y) = inner.split_once(',').ok_or_else(|| "missing ',' between coordinates".to_string())?;
    Ok(Point::new(parse_coordinate(x, "x")?, parse_coordinate(y, "y")?))
}

fn parse_coordinate(field: &str, axis: &str) -> std::result::Result<f64, String> {
    let field = field.trim();
    let value: f64 = field.parse().map_err(|_| format!("{} coordinate {:?} is not a number", axis, field))?;
    if !value.is_finite() {
        return Err(format!("{} coordinate {:?} is not finite", axis, field));
    }
    Ok(value)
}

fn input_error(line: usize, content: &str, reason: String) -> BroadcastError {
    BroadcastError::InputFormat {
        line,
        content: content.to_string(),
        reason,
    }
}
