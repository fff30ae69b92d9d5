use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

use lunar_phase::PhaseWrap;
use lunar_time::CalendarDateTime;

/// Parses a wrap mode name into the corresponding enum variant.
pub fn parse_wrap(s: &str) -> Result<PhaseWrap> {
    match s {
        "single-cycle" => Ok(PhaseWrap::SingleCycle),
        "floored" => Ok(PhaseWrap::Floored),
        other => bail!("unknown wrap mode: {other:?} (expected \"single-cycle\" or \"floored\")"),
    }
}

/// Resolves the wrap mode from config, with `--floored` taking precedence.
pub fn resolve_wrap(configured: &str, floored: bool) -> Result<PhaseWrap> {
    if floored {
        Ok(PhaseWrap::Floored)
    } else {
        parse_wrap(configured)
    }
}

/// Parses a date/time argument, validating ranges when `validate` is set.
pub fn parse_datetime(s: &str, validate: bool) -> Result<CalendarDateTime> {
    let dt = if validate {
        s.parse::<CalendarDateTime>()
    } else {
        CalendarDateTime::parse_unchecked(s)
    };
    dt.with_context(|| format!("invalid date/time: {s}"))
}

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
