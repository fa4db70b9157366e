//! Tailwind-style breakpoints

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Named viewport-width thresholds, ordered narrowest first
#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Always matches (0px)
    Base,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl Display for Breakpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| format!("unknown breakpoint {s:?}"))
    }
}

/// Minimum widths in logical pixels for `sm`/`md`/`lg`/`xl`; `base` is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakpointTable {
    /// Small breakpoint (`sm`) - 640px
    pub sm: u32,
    /// Medium breakpoint (`md`) - 768px
    pub md: u32,
    /// Large breakpoint (`lg`) - 1024px
    pub lg: u32,
    /// Extra large breakpoint (`xl`) - 1280px
    pub xl: u32,
}

impl BreakpointTable {
    pub const DEFAULT: Self = Self {
        sm: 640,
        md: 768,
        lg: 1024,
        xl: 1280,
    };

    /// Custom table; `None` unless `0 < sm < md < lg < xl`.
    pub fn new(sm: u32, md: u32, lg: u32, xl: u32) -> Option<Self> {
        (0 < sm && sm < md && md < lg && lg < xl).then_some(Self { sm, md, lg, xl })
    }

    pub fn min_width(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Base => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// `(breakpoint, min width)` pairs, ascending
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .map(move |bp| (bp, self.min_width(bp)))
    }

    /// Widest breakpoint whose minimum width is `<= width`
    pub fn breakpoint_for_width(&self, width: u32) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|bp| self.min_width(*bp) <= width)
            .unwrap_or(Breakpoint::Base)
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
