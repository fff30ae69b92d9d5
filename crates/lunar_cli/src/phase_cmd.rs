use anyhow::Result;
use tracing::info;

use lunar_phase::{PhaseInfo, phase_info, phase_on};

use crate::cli::{JdArgs, PhaseArgs};
use crate::config::LunarConfig;
use crate::convert::{parse_datetime, resolve_wrap};

/// Print the JDN and JD of a calendar date/time.
pub fn run_jd(args: JdArgs, config: &LunarConfig) -> Result<()> {
    let dt = parse_datetime(&args.datetime, config.phase.validate)?;
    println!("Date: {dt}");
    println!("JDN:  {}", dt.julian_day_number());
    println!("JD:   {:.6}", dt.julian_date());
    Ok(())
}

/// Print the phase at a calendar date/time or Julian Date.
pub fn run_phase(args: PhaseArgs, config: &LunarConfig) -> Result<()> {
    let wrap = resolve_wrap(&config.phase.wrap, args.floored)?;
    let info = match (args.jd, args.datetime.as_deref()) {
        (Some(jd), _) => phase_info(jd, wrap),
        (None, Some(s)) => phase_on(&parse_datetime(s, config.phase.validate)?, wrap),
        (None, None) => anyhow::bail!("either a date/time or --jd is required"),
    };
    info!(bucket = info.bucket, phase = info.name(), "phase computed");
    print!("{}", render_phase(&info));
    Ok(())
}

pub(crate) fn render_phase(info: &PhaseInfo) -> String {
    format!(
        "JD:     {:.6}\nCycle:  {:.4} days\nBucket: {}\nPhase:  {}\nIcon:   {}\n",
        info.julian_date,
        info.days_into_cycle,
        info.bucket,
        info.name(),
        info.icon()
    )
}
