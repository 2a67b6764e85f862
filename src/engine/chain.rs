//! Swap and cascade results.
//!
//! The engine resolves a whole cascade in one call. Presentation code replays
//! `ResolutionChain::steps` one at a time: clear `cleared`, animate `falls`,
//! drop in `refills`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Position;
use crate::grid::{Refill, TileFall};

/// One clear → gravity → refill cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    /// 0 for the clear caused by the swap, +1 for each cascade after it.
    pub combo_depth: u32,

    /// Cells cleared this step, row-major.
    pub cleared: SmallVec<[Position; 8]>,

    /// Tiles moved by gravity, per column bottom-up.
    pub falls: Vec<TileFall>,

    /// New tiles, per column top-down.
    pub refills: Vec<Refill>,

    /// One point per cleared cell.
    pub points: u32,

    /// Combo bonus added on top of `points`.
    pub bonus: u32,
}

impl ResolutionStep {
    /// Points plus bonus.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points + self.bonus
    }
}

/// Full outcome of one cascade.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionChain {
    pub steps: Vec<ResolutionStep>,

    /// Sum of every step's `total()`.
    pub total_points: u32,

    /// Depth of the last step; 0 when there was no cascade.
    pub final_combo_depth: u32,

    /// The settled board had no moves and was replaced by a fresh grid.
    pub regenerated: bool,
}

impl ResolutionChain {
    /// True when nothing was cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total cells cleared across all steps.
    #[must_use]
    pub fn cleared_count(&self) -> usize {
        self.steps.iter().map(|s| s.cleared.len()).sum()
    }

    pub(crate) fn push(&mut self, step: ResolutionStep) {
        self.total_points += step.total();
        self.final_combo_depth = step.combo_depth;
        self.steps.push(step);
    }
}

/// Outcome of a swap attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapResult {
    /// No match; the swap was reverted.
    Rejected,
    /// The swap matched and the cascade was resolved.
    Accepted(ResolutionChain),
}

impl SwapResult {
    /// Check whether the swap was kept.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SwapResult::Accepted(_))
    }

    /// The resolved chain, if the swap was accepted.
    #[must_use]
    pub fn chain(&self) -> Option<&ResolutionChain> {
        match self {
            SwapResult::Accepted(chain) => Some(chain),
            SwapResult::Rejected => None,
        }
    }

    /// Points scored; 0 for a rejected swap.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.chain().map_or(0, |c| c.total_points)
    }
}
