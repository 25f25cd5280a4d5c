//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! `wh-agent` plans every trip through the [`Router`] trait, so callers can
//! swap in a different search (e.g. congestion-aware costs) without touching
//! the agent state machine.  The default [`AStarRouter`] searches the 4-connected
//! walkable floor with unit step cost.
//!
//! # Adjacent-goal pathing
//!
//! Items sit on shelves, which are never walkable.  A pick trip therefore
//! targets the closest walkable cell *beside* the shelf:
//! [`Router::shortest_path_to_adjacent`] runs one search per orthogonal
//! neighbor of the shelf and keeps the shortest.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wh_core::Pos;

use crate::Grid;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: every cell from start to goal inclusive.
///
/// An empty route means the goal is unreachable.  A single-cell route means
/// start and goal coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<Pos>,
}

impl Route {
    /// The unreachable route.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Number of cells, including start and goal.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no path exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Moves needed to walk the route (cells minus the start cell).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Final cell, if any.
    #[inline]
    pub fn destination(&self) -> Option<Pos> {
        self.cells.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.  Queries never mutate the grid.
///
/// Implementations must be `Send + Sync` so one router can serve runs on
/// several Rayon workers.
pub trait Router: Send + Sync {
    /// Shortest walkable route from `start` to `goal`.
    ///
    /// The goal itself is exempt from the walkability check (it may be a
    /// shelf) but must lie inside the grid.
    fn shortest_path(&self, grid: &Grid, start: Pos, goal: Pos) -> Route;

    /// Shortest route from `start` to any walkable orthogonal neighbor of
    /// `goal`.
    ///
    /// Neighbors are tried up, down, left, right; on equal length the earlier
    /// neighbor wins.  Returns an empty route if no neighbor is reachable.
    fn shortest_path_to_adjacent(&self, grid: &Grid, start: Pos, goal: Pos) -> Route {
        goal.neighbors()
            .into_iter()
            .filter(|&n| grid.is_walkable(n))
            .map(|n| self.shortest_path(grid, start, n))
            .filter(|route| !route.is_empty())
            .fold(Route::unreachable(), |best, route| {
                if best.is_empty() || route.len() < best.len() {
                    route
                } else {
                    best
                }
            })
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the 4-connected walkable floor with a Manhattan heuristic.
///
/// With unit step cost the Manhattan distance is admissible and consistent,
/// so the first time the goal is popped its route is optimal.  The open set is
/// a min-heap keyed `(f, g, pos)`, which makes tie-breaking between equally
/// short routes deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn shortest_path(&self, grid: &Grid, start: Pos, goal: Pos) -> Route {
        astar(grid, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(grid: &Grid, start: Pos, goal: Pos) -> Route {
    if start == goal {
        return Route { cells: vec![start] };
    }
    let (Some(start_idx), Some(_)) = (grid.index(start), grid.index(goal)) else {
        return Route::unreachable();
    };

    let n = grid.rows() as usize * grid.cols() as usize;
    // g[i] = fewest steps found so far to reach cell i.
    let mut g = vec![u32::MAX; n];
    // came_from[i] = predecessor on the best known route to cell i.
    let mut came_from: Vec<Option<Pos>> = vec![None; n];

    g[start_idx] = 0;

    // Reverse makes BinaryHeap (max) behave as a min-heap.
    let mut open: BinaryHeap<Reverse<(u32, u32, Pos)>> = BinaryHeap::new();
    open.push(Reverse((start.manhattan(goal), 0, start)));

    while let Some(Reverse((_, steps, current))) = open.pop() {
        if current == goal {
            return reconstruct(grid, &came_from, goal);
        }

        let Some(current_idx) = grid.index(current) else { continue };
        // Skip stale heap entries.
        if steps > g[current_idx] {
            continue;
        }

        for neighbor in current.neighbors() {
            if neighbor != goal && !grid.is_walkable(neighbor) {
                continue;
            }
            let Some(idx) = grid.index(neighbor) else { continue };

            let new_steps = steps + 1;
            if new_steps < g[idx] {
                g[idx] = new_steps;
                came_from[idx] = Some(current);
                open.push(Reverse((new_steps + neighbor.manhattan(goal), new_steps, neighbor)));
            }
        }
    }

    Route::unreachable()
}

fn reconstruct(grid: &Grid, came_from: &[Option<Pos>], goal: Pos) -> Route {
    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(prev) = grid.index(cur).and_then(|i| came_from[i]) {
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();
    Route { cells }
}
