//! Single-item reservoir sampling.
//!
//! Item `i` (0-based) replaces the current pick with probability `1/(i+1)`,
//! which leaves every item equally likely once the stream ends. Only the
//! current pick is held, so sources of any length can be streamed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::error::LinesError;

/// Whether the item at `index` takes over the reservoir.
fn replaces<R: Rng + ?Sized>(index: usize, rng: &mut R) -> bool {
    let u: f64 = rng.random();
    u < 1.0 / (index + 1) as f64
}

/// Pick one item uniformly at random. `None` for an empty sequence.
pub fn pick_line<I, R>(lines: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut chosen = None;
    for (index, line) in lines.into_iter().enumerate() {
        if replaces(index, rng) {
            chosen = Some(line);
        }
    }
    chosen
}

/// Pick one line from a buffered reader, without its line terminator.
pub fn pick_line_from_reader<B, R>(reader: B, rng: &mut R) -> Result<Option<String>, LinesError>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let mut chosen = None;
    let mut count = 0usize;
    for line in reader.lines() {
        let line = line?;
        if replaces(count, rng) {
            chosen = Some(line);
        }
        count += 1;
    }
    debug!(lines = count, "sampled line stream");
    Ok(chosen)
}

/// Pick one line from a text file.
pub fn pick_line_from_file<R>(path: &Path, rng: &mut R) -> Result<Option<String>, LinesError>
where
    R: Rng + ?Sized,
{
    debug!(path = %path.display(), "opening line source");
    let file =
        File::open(path).map_err(|e| LinesError::Io(format!("{}: {e}", path.display())))?;
    pick_line_from_reader(BufReader::new(file), rng)
}
