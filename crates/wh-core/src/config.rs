//! Run configuration.
//!
//! Typically built in code by an optimizer loop, or loaded from a JSON file by
//! the application crate (with the `serde` feature, every struct accepts
//! partial input and fills the rest from `Default`).

use crate::{CoreError, CoreResult};

/// Seconds in one hour; task durations are configured in hours.
const SECS_PER_HOUR: f64 = 3_600.0;

// ── LayoutConfig ──────────────────────────────────────────────────────────────

/// Warehouse geometry.  Validated by `wh_spatial::Grid::new`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub rows: u32,
    pub cols: u32,
    /// Walking aisle width between shelf blocks, in columns.
    pub aisle_width: u32,
    /// Width of the main vertical centre aisle.  Must be odd.
    pub centre_aisle_width: u32,
    /// Depot row.  `None` = 0 (top row).
    pub depot_row: Option<i32>,
    /// Depot column.  `None` = `cols / 2`.
    pub depot_col: Option<i32>,
    /// First shelf row.  `None` = 1.  Clamped into `[1, rows - 2]`.
    pub shelf_start_row: Option<i32>,
    /// Last shelf row.  `None` = `rows - 2`.  Clamped into `[1, rows - 2]`.
    pub shelf_end_row: Option<i32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows:               15,
            cols:               17,
            aisle_width:        2,
            centre_aisle_width: 3,
            depot_row:          None,
            depot_col:          None,
            shelf_start_row:    None,
            shelf_end_row:      None,
        }
    }
}

// ── TaskConfig ────────────────────────────────────────────────────────────────

/// Per-task costs and quotas applied to every agent.
///
/// Durations accrue onto the agent's work/rest ledger in hours; tick counts
/// govern how long the agent visibly dwells.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TaskConfig {
    /// Work time accrued per walking tick (moving, pausing, or blocked).
    pub walk_time_h: f64,
    /// Work time accrued per pickup dwell tick.
    pub pickup_time_h: f64,
    /// Rest time accrued per depot visit.
    pub rest_time_h: f64,
    /// Nominal pickup dwell before fatigue/experience scaling (`Do`).
    pub pickup_base_ticks: u32,
    /// Ticks a right-of-way loser waits.
    pub blocked_wait_ticks: u32,
    /// Orders each agent completes before finishing.
    pub order_quota: u32,
    /// Whether fatigue can make a walking agent pause.  Disable for
    /// deterministic distance measurements.
    pub walk_pauses: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            walk_time_h:        1.0 / SECS_PER_HOUR,
            pickup_time_h:      10.0 / SECS_PER_HOUR,
            rest_time_h:        30.0 / SECS_PER_HOUR,
            pickup_base_ticks:  5,
            blocked_wait_ticks: 3,
            order_quota:        20,
            walk_pauses:        true,
        }
    }
}

impl TaskConfig {
    /// Reject durations the ledger cannot accrue and a zero pickup baseline.
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("walk_time_h", self.walk_time_h),
            ("pickup_time_h", self.pickup_time_h),
            ("rest_time_h", self.rest_time_h),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidDuration { field, value });
            }
        }
        if self.pickup_base_ticks == 0 {
            return Err(CoreError::Config("pickup_base_ticks must be at least 1".into()));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub layout: LayoutConfig,
    pub task: TaskConfig,

    /// Tick ceiling.  A run that reaches it reports `completed = false`.
    pub max_ticks: u64,

    /// Run seed.  The same seed always produces identical results; `None`
    /// draws one from entropy.
    pub seed: Option<u64>,

    /// Simulated seconds per tick.  Default: 1.
    pub tick_duration_secs: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            layout:             LayoutConfig::default(),
            task:               TaskConfig::default(),
            max_ticks:          100_000,
            seed:               None,
            tick_duration_secs: 1,
        }
    }
}

impl SimConfig {
    /// Copy of `self` with a fixed seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed: Some(seed), ..self.clone() }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be at least 1".into()));
        }
        self.task.validate()
    }
}
