use anyhow::{Context, Result};
use tracing::warn;

use lunar_lines::pick_line_from_file;

use crate::cli::PickLineArgs;
use crate::config::LunarConfig;
use crate::convert::make_rng;

/// Print one uniformly random line of a file.
pub fn run(args: PickLineArgs, config: &LunarConfig) -> Result<()> {
    let mut rng = make_rng(args.seed.or(config.lines.seed));
    let line = pick_line_from_file(&args.file, &mut rng)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    match line {
        Some(line) => println!("{line}"),
        None => warn!(path = %args.file.display(), "file has no lines"),
    }
    Ok(())
}
