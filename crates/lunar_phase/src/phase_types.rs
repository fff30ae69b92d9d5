//! Types for lunar phase classification.

use crate::phase::LunarPhase;

/// How a Julian Date before the epoch new moon is folded into the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseWrap {
    /// Add one synodic month to a negative offset, then take the floored
    /// remainder. Offsets always end up in `[0, SYNODIC_MONTH)`.
    #[default]
    SingleCycle,
    /// Floored (Euclidean) remainder straight away, without the one-cycle
    /// shift.
    Floored,
}

impl PhaseWrap {
    /// Config/CLI spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleCycle => "single-cycle",
            Self::Floored => "floored",
        }
    }
}

/// Full classification result for one Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseInfo {
    /// The Julian Date that was classified.
    pub julian_date: f64,
    /// Days into the synodic cycle after wrapping.
    pub days_into_cycle: f64,
    /// Raw classification bucket (0-8; 8 is the trailing New Moon half).
    pub bucket: u8,
    /// Logical phase for the bucket.
    pub phase: LunarPhase,
}

impl PhaseInfo {
    /// Display name of the phase.
    pub fn name(&self) -> &'static str {
        self.phase.name()
    }

    /// Icon file name of the phase.
    pub fn icon(&self) -> &'static str {
        self.phase.icon()
    }
}
