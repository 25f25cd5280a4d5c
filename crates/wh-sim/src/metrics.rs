//! Cell-conflict metrics.
//!
//! A conflict is a tick at whose end both agents, neither finished, occupy
//! the same non-depot cell.  It is counted independently of right-of-way
//! blocking: a clash that blocking prevents is never counted, while agents
//! that meet without a detectable clash (e.g. one dwelling beside a shelf
//! when the other passes) are.

use std::collections::BTreeMap;

use wh_agent::Agent;
use wh_core::Pos;

/// Ticks a fresh conflict stays highlighted for viewers.
pub const FLASH_FRAMES: u32 = 12;

#[derive(Clone, Debug, Default)]
pub struct MetricsTracker {
    conflicts:     u64,
    conflict_cell: Option<Pos>,
    flash_timer:   u32,
    /// Conflicts per cell over the whole run.
    heat:          BTreeMap<Pos, u64>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check for a conflict after both agents stepped.  Returns `true` if one
    /// was recorded.
    pub fn update(&mut self, a: &Agent, b: &Agent, depot: Pos) -> bool {
        if a.is_done() || b.is_done() {
            return false;
        }
        let pos = a.pos();
        if pos != b.pos() || pos == depot {
            return false;
        }
        self.conflicts += 1;
        self.conflict_cell = Some(pos);
        self.flash_timer = FLASH_FRAMES;
        *self.heat.entry(pos).or_insert(0) += 1;
        true
    }

    /// Decay the highlight timer by one.
    pub fn tick_flash(&mut self) {
        self.flash_timer = self.flash_timer.saturating_sub(1);
    }

    #[inline]
    pub fn conflicts(&self) -> u64 {
        self.conflicts
    }

    /// Cell of the most recent conflict.
    #[inline]
    pub fn conflict_cell(&self) -> Option<Pos> {
        self.conflict_cell
    }

    #[inline]
    pub fn flash_timer(&self) -> u32 {
        self.flash_timer
    }

    /// `true` while the last conflict should still be highlighted.
    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0
    }

    #[inline]
    pub fn heat_map(&self) -> &BTreeMap<Pos, u64> {
        &self.heat
    }

    /// The cell with the most conflicts; the lowest position wins ties.
    pub fn hottest_cell(&self) -> Option<(Pos, u64)> {
        self.heat
            .iter()
            .fold(None, |best: Option<(Pos, u64)>, (&pos, &n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((pos, n)),
            })
    }
}
