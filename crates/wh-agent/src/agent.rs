//! The `Agent` struct and its per-tick step.

use tracing::{debug, info, warn};
use wh_core::{AgentId, AgentRng, Pos, TaskConfig};
use wh_fatigue::{prior_experience_hours, HumanFactors, WorkLedger};
use wh_spatial::{Grid, Route, Router};

use crate::AgentState;

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One pick worker.
///
/// Owns its position, trip plan, work/rest ledger and RNG.  It holds no
/// reference to the grid or to the other agent; both are passed into
/// [`step`](Agent::step) for the duration of one tick.
///
/// # Path cursor
///
/// `path` stores the whole route including the cell the trip started from.
/// `cursor` indexes the next cell to enter and starts at 0: the first
/// walking tick of every trip re-enters the start cell, so a trip costs one
/// walking tick and one unit of `distance` per path cell.
#[derive(Clone, Debug)]
pub struct Agent {
    id:                      AgentId,
    pos:                     Pos,
    state:                   AgentState,
    target:                  Option<Pos>,
    path:                    Vec<Pos>,
    cursor:                  usize,
    pickup_ticks_remaining:  u32,
    blocked_ticks_remaining: u32,
    ledger:                  WorkLedger,
    prior_experience_h:      f64,
    distance:                u64,
    orders_completed:        u32,
    blocked_count:           u32,
    unreachable_targets:     u32,
    task:                    TaskConfig,
    factors:                 HumanFactors,
    rng:                     AgentRng,
}

impl Agent {
    /// Place a fresh agent on the depot of `grid`.
    ///
    /// Prior experience comes from the agent's identity (see
    /// [`prior_experience_hours`]).  Task costs and human factors start at
    /// their defaults.
    pub fn new(grid: &Grid, id: AgentId, rng: AgentRng) -> Self {
        Self {
            id,
            pos: grid.depot(),
            state: AgentState::Waiting,
            target: None,
            path: Vec::new(),
            cursor: 0,
            pickup_ticks_remaining: 0,
            blocked_ticks_remaining: 0,
            ledger: WorkLedger::new(),
            prior_experience_h: prior_experience_hours(id),
            distance: 0,
            orders_completed: 0,
            blocked_count: 0,
            unreachable_targets: 0,
            task: TaskConfig::default(),
            factors: HumanFactors::default(),
            rng,
        }
    }

    pub fn with_task(mut self, task: TaskConfig) -> Self {
        self.task = task;
        self
    }

    pub fn with_factors(mut self, factors: HumanFactors) -> Self {
        self.factors = factors;
        self
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this agent by exactly one tick.
    ///
    /// `grid` is mutable only so a completed pickup can empty its shelf.
    pub fn step<R: Router + ?Sized>(&mut self, grid: &mut Grid, router: &R) {
        match self.state {
            AgentState::Waiting => self.choose_target(grid, router),
            AgentState::ToItem | AgentState::ToDepot => self.walk(),
            AgentState::PickingUp => self.pick(grid, router),
            AgentState::Resting => self.rest(grid, router),
            AgentState::AllDone => {}
        }
    }

    fn walk(&mut self) {
        if self.blocked_ticks_remaining > 0 {
            self.blocked_ticks_remaining -= 1;
            self.accrue_work(self.task.walk_time_h);
            return;
        }

        if self.task.walk_pauses {
            let p = self.factors.pause_probability(self.ledger.fatigue());
            if self.rng.gen_bool(p) {
                self.accrue_work(self.task.walk_time_h);
                return;
            }
        }

        match self.path.get(self.cursor).copied() {
            Some(next) => {
                self.pos = next;
                self.cursor += 1;
                self.distance += 1;
                self.accrue_work(self.task.walk_time_h);
            }
            None => self.arrive(),
        }
    }

    fn arrive(&mut self) {
        match self.state {
            AgentState::ToItem => {
                let fatigue = self.ledger.fatigue();
                self.pickup_ticks_remaining = self.factors.adjusted_pickup_ticks(
                    fatigue,
                    self.experience_factor(),
                    self.task.pickup_base_ticks,
                );
                self.state = AgentState::PickingUp;
                debug!(
                    agent = %self.id,
                    pos = %self.pos,
                    fatigue,
                    pickup_ticks = self.pickup_ticks_remaining,
                    "reached shelf"
                );
            }
            AgentState::ToDepot => {
                self.state = AgentState::Resting;
                debug!(agent = %self.id, "back at depot");
            }
            _ => {}
        }
    }

    fn pick<R: Router + ?Sized>(&mut self, grid: &mut Grid, router: &R) {
        self.pickup_ticks_remaining = self.pickup_ticks_remaining.saturating_sub(1);
        self.accrue_work(self.task.pickup_time_h);
        if self.pickup_ticks_remaining > 0 {
            return;
        }

        if let Some(target) = self.target {
            if !grid.remove_item(target) {
                debug!(agent = %self.id, %target, "shelf already emptied; order still counts");
            }
        }
        self.orders_completed += 1;
        debug!(
            agent = %self.id,
            orders = self.orders_completed,
            fatigue = self.ledger.fatigue(),
            experience = self.experience_factor(),
            "picked item"
        );

        let depot = grid.depot();
        let route = router.shortest_path(grid, self.pos, depot);
        if route.is_empty() {
            warn!(agent = %self.id, pos = %self.pos, "no route back to depot; agent stranded");
            self.finish();
            return;
        }
        self.follow(route, AgentState::ToDepot);
    }

    fn rest<R: Router + ?Sized>(&mut self, grid: &Grid, router: &R) {
        self.ledger.add_rest(self.task.rest_time_h, &self.factors);
        debug!(agent = %self.id, fatigue = self.ledger.fatigue(), "rested at depot");

        if self.orders_completed >= self.task.order_quota {
            info!(agent = %self.id, orders = self.orders_completed, "quota reached");
            self.finish();
        } else {
            self.choose_target(grid, router);
        }
    }

    /// Pick a stocked shelf uniformly at random and plan a route beside it.
    ///
    /// Shelves with no reachable neighbor are dropped from the draw and
    /// counted; when nothing reachable is left the agent finishes.
    fn choose_target<R: Router + ?Sized>(&mut self, grid: &Grid, router: &R) {
        let mut candidates = grid.item_positions();
        while !candidates.is_empty() {
            let idx = self.rng.gen_range(0..candidates.len());
            let target = candidates.swap_remove(idx);
            let route = router.shortest_path_to_adjacent(grid, self.pos, target);
            if route.is_empty() {
                self.unreachable_targets += 1;
                warn!(agent = %self.id, %target, "item unreachable; choosing another");
                continue;
            }
            self.target = Some(target);
            debug!(
                agent = %self.id,
                %target,
                label = grid.label(target).unwrap_or("?"),
                steps = route.steps(),
                "heading to item"
            );
            self.follow(route, AgentState::ToItem);
            return;
        }

        info!(
            agent = %self.id,
            orders = self.orders_completed,
            quota = self.task.order_quota,
            "no reachable items left; finishing below quota"
        );
        self.finish();
    }

    fn follow(&mut self, route: Route, state: AgentState) {
        self.path = route.cells;
        self.cursor = 0;
        self.state = state;
    }

    fn finish(&mut self) {
        self.state = AgentState::AllDone;
        self.target = None;
        self.path.clear();
        self.cursor = 0;
        self.blocked_ticks_remaining = 0;
    }

    fn accrue_work(&mut self, hours: f64) {
        self.ledger.add_work(hours, &self.factors);
    }

    // ── Right-of-way surface ──────────────────────────────────────────────

    /// The cell this agent would enter on its next move.
    ///
    /// `None` unless walking with cells left and not currently blocked.
    pub fn peek_next_pos(&self) -> Option<Pos> {
        if !self.state.is_walking() || self.blocked_ticks_remaining > 0 {
            return None;
        }
        self.path.get(self.cursor).copied()
    }

    /// Hold this agent for `wait_ticks` walking ticks.
    ///
    /// Returns `true` (and counts a blocking event) only when the agent was
    /// not already blocked.
    pub fn block(&mut self, wait_ticks: u32) -> bool {
        let fresh = self.blocked_ticks_remaining == 0 && wait_ticks > 0;
        if fresh {
            self.blocked_count += 1;
        }
        self.blocked_ticks_remaining = wait_ticks;
        fresh
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == AgentState::AllDone
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked_ticks_remaining > 0
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// The shelf of the current (or last) order.
    #[inline]
    pub fn target(&self) -> Option<Pos> {
        self.target
    }

    /// The current trip, start cell included.
    #[inline]
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cells of the current trip not yet entered.
    pub fn remaining_path(&self) -> &[Pos] {
        self.path.get(self.cursor..).unwrap_or(&[])
    }

    #[inline]
    pub fn fatigue(&self) -> f64 {
        self.ledger.fatigue()
    }

    #[inline]
    pub fn work_time_h(&self) -> f64 {
        self.ledger.work_time_h()
    }

    #[inline]
    pub fn rest_time_h(&self) -> f64 {
        self.ledger.rest_time_h()
    }

    #[inline]
    pub fn prior_experience_h(&self) -> f64 {
        self.prior_experience_h
    }

    /// Current experience factor `E` given prior plus accrued work.
    pub fn experience_factor(&self) -> f64 {
        self.factors.experience_factor(self.ledger.work_time_h(), self.prior_experience_h)
    }

    /// Path cells entered so far, start cells of trips included.
    #[inline]
    pub fn distance(&self) -> u64 {
        self.distance
    }

    #[inline]
    pub fn orders_completed(&self) -> u32 {
        self.orders_completed
    }

    /// Distinct right-of-way losses.
    #[inline]
    pub fn blocked_count(&self) -> u32 {
        self.blocked_count
    }

    /// Target draws skipped because no neighbor of the shelf was reachable.
    #[inline]
    pub fn unreachable_targets(&self) -> u32 {
        self.unreachable_targets
    }

    #[inline]
    pub fn pickup_ticks_remaining(&self) -> u32 {
        self.pickup_ticks_remaining
    }

    #[inline]
    pub fn blocked_ticks_remaining(&self) -> u32 {
        self.blocked_ticks_remaining
    }

    #[inline]
    pub fn task(&self) -> &TaskConfig {
        &self.task
    }

    #[inline]
    pub fn factors(&self) -> &HumanFactors {
        &self.factors
    }
}
