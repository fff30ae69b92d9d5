//! The eight logical lunar phases with their display names and icons.
//!
//! Classification yields a bucket 0-8. Buckets 0 and 8 are the two halves
//! of the New Moon straddling the start and end of the cycle, so every
//! lookup here treats 8, and any other unknown value, as New Moon.

/// The eight lunar phases in cycle order, starting from New Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All 8 phases in order (index 0 = New Moon).
pub const ALL_PHASES: [LunarPhase; 8] = [
    LunarPhase::NewMoon,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::FullMoon,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    /// Phase for a classification bucket. Bucket 8 and unknown values are New Moon.
    pub const fn from_bucket(bucket: u8) -> Self {
        match bucket {
            1 => Self::WaxingCrescent,
            2 => Self::FirstQuarter,
            3 => Self::WaxingGibbous,
            4 => Self::FullMoon,
            5 => Self::WaningGibbous,
            6 => Self::LastQuarter,
            7 => Self::WaningCrescent,
            _ => Self::NewMoon,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent Moon",
            Self::FirstQuarter => "First Quarter Moon",
            Self::WaxingGibbous => "Waxing Gibbous Moon",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous Moon",
            Self::LastQuarter => "Last Quarter Moon",
            Self::WaningCrescent => "Waning Crescent Moon",
        }
    }

    /// Icon file name.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::NewMoon => "newMoon.svg",
            Self::WaxingCrescent => "waxingCrescent.svg",
            Self::FirstQuarter => "firstQuarter.svg",
            Self::WaxingGibbous => "waxingGibbous.svg",
            Self::FullMoon => "fullMoon.svg",
            Self::WaningGibbous => "waningGibbous.svg",
            Self::LastQuarter => "lastQuarter.svg",
            Self::WaningCrescent => "waningCrescent.svg",
        }
    }

    /// 0-based index (New Moon=0 .. Waning Crescent=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// All 8 phases in order.
    pub const fn all() -> &'static [LunarPhase; 8] {
        &ALL_PHASES
    }
}

/// Name of the phase for a classification bucket.
pub const fn phase_name(bucket: u8) -> &'static str {
    LunarPhase::from_bucket(bucket).name()
}

/// Icon key of the phase for a classification bucket.
pub const fn phase_icon_key(bucket: u8) -> &'static str {
    LunarPhase::from_bucket(bucket).icon()
}
