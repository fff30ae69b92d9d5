//! Uniform random selection of one line from a stream.
//!
//! Works over any iterator, any `BufRead`, or a file path. The RNG is
//! always supplied by the caller so results are reproducible under a seed.

pub mod error;
pub mod reservoir;

pub use error::LinesError;
pub use reservoir::{pick_line, pick_line_from_file, pick_line_from_reader};
