use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use rand::Rng;
use tracing::{debug, info};

use lunar_lines::pick_line_from_file;
use lunar_phase::{PhaseInfo, phase_tonight};
use lunar_time::CalendarDateTime;

use crate::cli::TonightArgs;
use crate::config::LunarConfig;
use crate::convert::{make_rng, parse_datetime, resolve_wrap};

/// Print tonight's phase, decorated with a random exclamation and quote.
pub fn run(args: TonightArgs, config: &LunarConfig) -> Result<()> {
    let wrap = resolve_wrap(&config.phase.wrap, args.floored)?;
    let today = match args.date.as_deref() {
        Some(s) => parse_datetime(s, config.phase.validate)?,
        None => today_utc()?,
    };
    let tonight = phase_tonight(&today, wrap);
    info!(
        today = %today,
        jd = tonight.julian_date,
        phase = tonight.name(),
        "tonight's phase"
    );

    let (exclamation, quote) = if args.plain {
        (None, None)
    } else {
        let mut rng = make_rng(args.seed.or(config.lines.seed));
        (
            pick_optional(config.lines.exclamations.as_deref(), &mut rng)?,
            pick_optional(config.lines.quotes.as_deref(), &mut rng)?,
        )
    };

    print!(
        "{}",
        render(&today, &tonight, exclamation.as_deref(), quote.as_deref())
    );
    Ok(())
}

/// The current UTC calendar day at midnight.
fn today_utc() -> Result<CalendarDateTime> {
    let now = Utc::now().date_naive();
    debug!(%now, "using current UTC date");
    CalendarDateTime::date(now.year(), now.month(), now.day())
        .context("current date out of range")
}

fn pick_optional<R: Rng + ?Sized>(path: Option<&Path>, rng: &mut R) -> Result<Option<String>> {
    let Some(path) = path else { return Ok(None) };
    pick_line_from_file(path, rng)
        .with_context(|| format!("failed to pick a line from {}", path.display()))
}

fn render(
    today: &CalendarDateTime,
    tonight: &PhaseInfo,
    exclamation: Option<&str>,
    quote: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(e) = exclamation {
        out.push_str(e);
        out.push('\n');
    }
    out.push_str(&format!(
        "Tonight ({}): {} [{}]\n",
        today.date_string(),
        tonight.name(),
        tonight.icon()
    ));
    if let Some(q) = quote {
        out.push_str(&format!("\"{q}\"\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunar_phase::PhaseWrap;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn render_plain() {
        let today = CalendarDateTime::date(2024, 1, 24).unwrap();
        let tonight = phase_tonight(&today, PhaseWrap::SingleCycle);
        assert_eq!(
            render(&today, &tonight, None, None),
            "Tonight (2024-01-24): Full Moon [fullMoon.svg]\n"
        );
    }

    #[test]
    fn render_decorated() {
        let today = CalendarDateTime::date(2000, 1, 5).unwrap();
        let tonight = phase_tonight(&today, PhaseWrap::SingleCycle);
        let out = render(&today, &tonight, Some("Wow!"), Some("Hello moon"));
        assert_eq!(
            out,
            "Wow!\nTonight (2000-01-05): New Moon [newMoon.svg]\n\"Hello moon\"\n"
        );
    }

    #[test]
    fn render_negative_year_matches_display() {
        let today = CalendarDateTime::date(-44, 3, 15).unwrap();
        let tonight = phase_tonight(&today, PhaseWrap::SingleCycle);
        let out = render(&today, &tonight, None, None);
        assert!(out.starts_with("Tonight (-0044-03-15): "), "{out}");
        assert!(today.to_string().starts_with("-0044-03-15"));
    }

    #[test]
    fn pick_optional_none_without_path() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_optional(None, &mut rng).unwrap(), None);
    }

    #[test]
    fn pick_optional_reads_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        std::fs::write(&path, "only line\n").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_optional(Some(path.as_path()), &mut rng).unwrap().as_deref(),
            Some("only line")
        );
    }

    #[test]
    fn pick_optional_missing_file_has_context() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = pick_optional(Some(Path::new("/nonexistent/q.txt")), &mut rng).unwrap_err();
        assert!(format!("{err:#}").contains("failed to pick a line"));
    }
}
