//! Duration classification
//!
//! Every contribution in the program grid is rendered according to its
//! length. The lengths are quantized against the configured default slot,
//! and anything outside the known multiples is a data error.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::Category;

/// Slot lengths in minutes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SlotLengths {
    /// Default talk length (15 or 20 minutes)
    pub default: i64,
    /// Plenary and Prandtl lecture length
    pub plenary: i64,
    /// Minisymposium talk length; 1.5x default when unset
    pub minisymposium: Option<i64>,
}

impl Default for SlotLengths {
    fn default() -> Self {
        Self {
            default: 15,
            plenary: 60,
            minisymposium: None,
        }
    }
}

impl SlotLengths {
    /// Topical speaker slots
    pub fn double(&self) -> i64 {
        2 * self.default
    }

    /// Prize lecture and minisymposium talks, rounded down
    pub fn three_half(&self) -> i64 {
        self.default * 3 / 2
    }

    pub fn minisymposium(&self) -> i64 {
        self.minisymposium.unwrap_or_else(|| self.three_half())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default <= 0 {
            return Err(ConfigError::InvalidSlots(format!(
                "default slot length must be positive, got {}",
                self.default
            )));
        }
        if self.minisymposium() <= 0 {
            return Err(ConfigError::InvalidSlots(format!(
                "minisymposium slot length must be positive, got {}",
                self.minisymposium()
            )));
        }
        Ok(())
    }
}

/// How one contribution is rendered in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotCase {
    /// Full-length lecture in a single cell
    Plenary,
    /// Merged cell over two columns
    DoubleSlot,
    /// Prize lecture, masked until announced
    PrizeLectureSlot,
    /// Talk inside a nested minisymposium table
    MinisymposiumSlot,
    /// Regular talk, subject to the gap rule
    DefaultSlot,
    /// Zero-length poster entry
    PosterSlot,
    /// Length in minutes matching no rule
    Unrecognized(i64),
}

impl SlotCase {
    /// Classify a contribution length within a session of the given category
    pub fn classify(duration: i64, category: Category, lengths: &SlotLengths) -> Self {
        if duration == lengths.plenary {
            SlotCase::Plenary
        } else if duration == lengths.double() {
            SlotCase::DoubleSlot
        } else if category.is_minisymposium() && duration == lengths.minisymposium() {
            SlotCase::MinisymposiumSlot
        } else if duration == lengths.three_half() {
            if category == Category::PrizeLecture {
                SlotCase::PrizeLectureSlot
            } else {
                SlotCase::MinisymposiumSlot
            }
        } else if duration == lengths.default {
            SlotCase::DefaultSlot
        } else if duration == 0 {
            SlotCase::PosterSlot
        } else {
            SlotCase::Unrecognized(duration)
        }
    }
}
