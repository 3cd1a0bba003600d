//! DMX cue number value type
//!
//! Disguise encodes DMX-triggered cues as three two-digit components
//! `XX.YY.ZZ`. The first two components together form the whole cue
//! number (XX * 100 + YY), the third is the fractional part.

use crate::error::{DisguiseToolError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static FORMAT_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d\d)\.(\d\d)\.(\d\d)$").expect("valid regex"));

/// Maximum whole cue number (XX * 100 + YY)
pub const CUE_WHOLE_MAX: u32 = 9999;
/// Maximum value of any single component
pub const CUE_PART_MAX: u32 = 99;

/// A DMX cue number in disguise's XX.YY.ZZ format.
///
/// Field order matches numeric significance, so the derived ordering is
/// the numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DmxCueNumber {
    cue_x: u32,
    cue_y: u32,
    cue_z: u32,
}

impl DmxCueNumber {
    /// Parse from the canonical `XX.YY.ZZ` rendering.
    pub fn parse(value: &str) -> Result<Self> {
        let captures = FORMAT_EXPRESSION
            .captures(value)
            .ok_or_else(|| DisguiseToolError::CueNumberFormat(value.to_string()))?;

        let component = |index: usize| {
            captures[index]
                .parse::<u32>()
                .map_err(|_| DisguiseToolError::CueNumberFormat(value.to_string()))
        };
        Self::new(component(1)?, component(2)?, component(3)?)
    }

    /// Build from a whole cue number (0..=9999) and fractional part (0..=99).
    pub fn from_cue(cue: u32, fractional_cue: u32) -> Result<Self> {
        if cue > CUE_WHOLE_MAX {
            return Err(DisguiseToolError::CueNumberOutOfRange {
                component: "cue",
                value: cue,
                max: CUE_WHOLE_MAX,
            });
        }
        Self::new(cue / 100, cue % 100, fractional_cue)
    }

    /// Build from the three components, each 0..=99.
    pub fn new(cue_x: u32, cue_y: u32, cue_z: u32) -> Result<Self> {
        for (component, value) in [("cue X", cue_x), ("cue Y", cue_y), ("cue Z", cue_z)] {
            if value > CUE_PART_MAX {
                return Err(DisguiseToolError::CueNumberOutOfRange {
                    component,
                    value,
                    max: CUE_PART_MAX,
                });
            }
        }
        Ok(Self {
            cue_x,
            cue_y,
            cue_z,
        })
    }

    pub fn cue_x(&self) -> u32 {
        self.cue_x
    }

    pub fn cue_y(&self) -> u32 {
        self.cue_y
    }

    pub fn cue_z(&self) -> u32 {
        self.cue_z
    }

    /// Numeric cue value: whole cue number plus fractional hundredths.
    pub fn value(&self) -> f64 {
        (self.cue_x * 100 + self.cue_y) as f64 + self.cue_z as f64 * 0.01
    }
}

impl fmt::Display for DmxCueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:02}", self.cue_x, self.cue_y, self.cue_z)
    }
}
