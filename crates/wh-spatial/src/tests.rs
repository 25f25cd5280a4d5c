//! Unit tests for wh-spatial.
//!
//! Most tests use the reference 15×17 layout: shelf columns
//! `{1, 2, 5, 6, 10, 11, 14, 15}` over rows 1..=13, centre aisle 7..=9, depot
//! at (0, 8).

#[cfg(test)]
mod helpers {
    use wh_core::LayoutConfig;

    use crate::Grid;

    pub fn default_grid() -> Grid {
        Grid::new(&LayoutConfig::default()).unwrap()
    }

    /// Zero-width aisles: shelf blocks merge into solid racks at cols 1..=6 and
    /// 10..=15, so interior shelf cells have no walkable neighbor.
    pub fn solid_rack_grid() -> Grid {
        Grid::new(&LayoutConfig { aisle_width: 0, ..LayoutConfig::default() }).unwrap()
    }
}

// ── Grid layout ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use std::collections::BTreeSet;

    use wh_core::{LayoutConfig, Pos};

    use crate::{CellKind, Grid};

    use super::helpers::default_grid;

    #[test]
    fn reference_shelf_columns() {
        let grid = default_grid();
        let expected: BTreeSet<i32> = [1, 2, 5, 6, 10, 11, 14, 15].into_iter().collect();
        assert_eq!(grid.shelf_cols(), &expected);
        assert_eq!(grid.shelf_rows(), (1, 13));
    }

    #[test]
    fn every_shelf_starts_stocked() {
        let grid = default_grid();
        assert_eq!(grid.items_remaining(), 8 * 13);
        assert_eq!(grid.item_positions().len(), 8 * 13);
        assert_eq!(grid.kind(Pos::new(1, 1)), Some(CellKind::Item));
        assert_eq!(grid.kind(Pos::new(13, 15)), Some(CellKind::Item));
    }

    #[test]
    fn depot_defaults_to_top_centre() {
        let grid = default_grid();
        assert_eq!(grid.depot(), Pos::new(0, 8));
        assert_eq!(grid.kind(grid.depot()), Some(CellKind::Depot));
        assert!(grid.is_walkable(grid.depot()));
    }

    #[test]
    fn centre_aisle_and_border_stay_clear() {
        let grid = default_grid();
        for row in 0..grid.rows() {
            for col in [0, 7, 8, 9, 16] {
                let pos = Pos::new(row, col);
                assert!(grid.is_walkable(pos), "{pos} should be walkable");
            }
        }
        for col in 0..grid.cols() {
            assert!(grid.is_walkable(Pos::new(0, col)));
            assert!(grid.is_walkable(Pos::new(14, col)));
        }
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let grid = default_grid();
        for pos in [Pos::new(-1, 0), Pos::new(0, -1), Pos::new(15, 0), Pos::new(0, 17)] {
            assert!(!grid.is_walkable(pos), "{pos}");
            assert_eq!(grid.kind(pos), None);
        }
    }

    #[test]
    fn items_listed_row_major() {
        let items = default_grid().item_positions();
        assert_eq!(items[0], Pos::new(1, 1));
        assert_eq!(items[1], Pos::new(1, 2));
        assert!(items.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn shelf_band_limits_stock() {
        let layout = LayoutConfig {
            shelf_start_row: Some(3),
            shelf_end_row: Some(10),
            ..LayoutConfig::default()
        };
        let grid = Grid::new(&layout).unwrap();
        assert_eq!(grid.shelf_rows(), (3, 10));
        assert!(grid.is_walkable(Pos::new(2, 1)));
        assert!(grid.is_walkable(Pos::new(11, 1)));
        assert_eq!(grid.kind(Pos::new(3, 1)), Some(CellKind::Item));
        assert_eq!(grid.items_remaining(), 8 * 8);
    }

    #[test]
    fn shelf_rows_are_clamped() {
        let layout = LayoutConfig {
            shelf_start_row: Some(-4),
            shelf_end_row: Some(99),
            ..LayoutConfig::default()
        };
        let grid = Grid::new(&layout).unwrap();
        assert_eq!(grid.shelf_rows(), (1, 13));
    }

    #[test]
    fn depot_overrides_shelf_cell() {
        let layout = LayoutConfig {
            depot_row: Some(5),
            depot_col: Some(1),
            ..LayoutConfig::default()
        };
        let grid = Grid::new(&layout).unwrap();
        assert_eq!(grid.kind(Pos::new(5, 1)), Some(CellKind::Depot));
        assert!(grid.is_walkable(Pos::new(5, 1)));
        assert_eq!(grid.items_remaining(), 8 * 13 - 1);
    }

    #[test]
    fn wider_aisles_spread_shelves() {
        let layout = LayoutConfig { cols: 21, aisle_width: 3, ..LayoutConfig::default() };
        let grid = Grid::new(&layout).unwrap();
        // centre 10, half 1: left blocks at 7 and 2; right blocks at 12 and 17.
        let expected: BTreeSet<i32> = [2, 3, 7, 8, 12, 13, 17, 18].into_iter().collect();
        assert_eq!(grid.shelf_cols(), &expected);
    }
}

// ── Grid validation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use wh_core::LayoutConfig;

    use crate::{Grid, SpatialError};

    #[test]
    fn even_centre_aisle_rejected() {
        let layout = LayoutConfig { centre_aisle_width: 4, ..LayoutConfig::default() };
        assert!(matches!(Grid::new(&layout), Err(SpatialError::EvenCentreAisle(4))));
    }

    #[test]
    fn narrow_grid_rejected() {
        let layout = LayoutConfig { cols: 5, ..LayoutConfig::default() };
        assert!(matches!(Grid::new(&layout), Err(SpatialError::TooNarrow { cols: 5, .. })));
    }

    #[test]
    fn inverted_shelf_rows_rejected() {
        let layout = LayoutConfig {
            shelf_start_row: Some(10),
            shelf_end_row: Some(5),
            ..LayoutConfig::default()
        };
        assert!(matches!(
            Grid::new(&layout),
            Err(SpatialError::InvertedShelfRows { start: 10, end: 5 })
        ));
    }

    #[test]
    fn too_few_rows_rejected() {
        let layout = LayoutConfig { rows: 2, ..LayoutConfig::default() };
        assert!(matches!(Grid::new(&layout), Err(SpatialError::InvertedShelfRows { .. })));
    }

    #[test]
    fn depot_outside_grid_rejected() {
        let layout = LayoutConfig { depot_row: Some(15), ..LayoutConfig::default() };
        assert!(matches!(Grid::new(&layout), Err(SpatialError::DepotOutOfBounds { .. })));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = SpatialError::EvenCentreAisle(2);
        assert_eq!(err.to_string(), "centre_aisle_width must be odd (got 2)");
    }
}

// ── Items & labels ────────────────────────────────────────────────────────────

#[cfg(test)]
mod items {
    use wh_core::Pos;

    use crate::CellKind;
    use crate::grid::column_letter;

    use super::helpers::default_grid;

    #[test]
    fn remove_item_is_idempotent() {
        let mut grid = default_grid();
        let shelf = Pos::new(4, 5);
        assert!(grid.remove_item(shelf));
        assert_eq!(grid.kind(shelf), Some(CellKind::Shelf));
        assert_eq!(grid.items_remaining(), 8 * 13 - 1);

        assert!(!grid.remove_item(shelf));
        assert_eq!(grid.kind(shelf), Some(CellKind::Shelf));
        assert_eq!(grid.items_remaining(), 8 * 13 - 1);
        assert!(!grid.item_positions().contains(&shelf));
    }

    #[test]
    fn emptied_shelf_stays_unwalkable() {
        let mut grid = default_grid();
        let shelf = Pos::new(4, 5);
        grid.remove_item(shelf);
        assert!(!grid.is_walkable(shelf));
    }

    #[test]
    fn remove_item_ignores_floor_and_depot() {
        let mut grid = default_grid();
        assert!(!grid.remove_item(Pos::new(0, 0)));
        assert!(!grid.remove_item(grid.depot()));
        assert!(!grid.remove_item(Pos::new(-1, -1)));
        assert_eq!(grid.kind(Pos::new(0, 0)), Some(CellKind::Empty));
        assert_eq!(grid.kind(grid.depot()), Some(CellKind::Depot));
    }

    #[test]
    fn shelf_labels() {
        let grid = default_grid();
        assert_eq!(grid.label(Pos::new(1, 1)), Some("A1"));
        assert_eq!(grid.label(Pos::new(3, 2)), Some("B3"));
        assert_eq!(grid.label(Pos::new(13, 15)), Some("H13"));
        assert_eq!(grid.label(Pos::new(0, 8)), None);
    }

    #[test]
    fn column_letters_roll_over() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use wh_core::{LayoutConfig, Pos};

    use crate::{AStarRouter, Grid, Route, Router};

    use super::helpers::{default_grid, solid_rack_grid};

    #[test]
    fn start_equals_goal_is_single_cell() {
        let grid = default_grid();
        let route = AStarRouter.shortest_path(&grid, Pos::new(0, 8), Pos::new(0, 8));
        assert_eq!(route.cells, vec![Pos::new(0, 8)]);
        assert_eq!(route.steps(), 0);
    }

    #[test]
    fn open_floor_route_is_manhattan() {
        let grid = default_grid();
        // Row 0, column 0 and row 14 are all open floor, so a monotone route
        // always exists between these pairs.
        let pairs = [
            (Pos::new(0, 0), Pos::new(0, 16)),
            (Pos::new(0, 3), Pos::new(14, 0)),
            (Pos::new(14, 16), Pos::new(0, 8)),
            (Pos::new(5, 8), Pos::new(14, 12)),
        ];
        for (start, goal) in pairs {
            let route = AStarRouter.shortest_path(&grid, start, goal);
            assert_eq!(route.len(), start.manhattan(goal) as usize + 1, "{start} → {goal}");
            assert_eq!(route.cells.first(), Some(&start));
            assert_eq!(route.destination(), Some(goal));
        }
    }

    #[test]
    fn route_is_contiguous_and_walkable() {
        let grid = default_grid();
        let route = AStarRouter.shortest_path(&grid, Pos::new(7, 3), Pos::new(7, 12));
        assert!(!route.is_empty());
        for pair in route.cells.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
        assert!(route.cells.iter().all(|&c| grid.is_walkable(c)));
    }

    #[test]
    fn shelves_force_a_detour() {
        let grid = default_grid();
        // Shelf columns 1..=2 separate (1, 0) from (1, 3); the way round is row 0.
        let route = AStarRouter.shortest_path(&grid, Pos::new(1, 0), Pos::new(1, 3));
        assert_eq!(route.steps(), 5);
        assert!(route.cells.contains(&Pos::new(0, 1)));
    }

    #[test]
    fn goal_may_be_a_shelf() {
        let grid = default_grid();
        let route = AStarRouter.shortest_path(&grid, Pos::new(0, 1), Pos::new(1, 1));
        assert_eq!(route.cells, vec![Pos::new(0, 1), Pos::new(1, 1)]);
    }

    #[test]
    fn goal_outside_grid_is_unreachable() {
        let grid = default_grid();
        let route = AStarRouter.shortest_path(&grid, Pos::new(0, 0), Pos::new(-1, 0));
        assert_eq!(route, Route::unreachable());
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let grid = solid_rack_grid();
        let route = AStarRouter.shortest_path(&grid, grid.depot(), Pos::new(5, 3));
        assert!(route.is_empty());
    }

    #[test]
    fn adjacent_prefers_shortest_neighbor() {
        let grid = default_grid();
        // (5, 6) is boxed in on three sides; only (5, 7) is open.
        let route = AStarRouter.shortest_path_to_adjacent(&grid, grid.depot(), Pos::new(5, 6));
        assert_eq!(route.destination(), Some(Pos::new(5, 7)));
        assert_eq!(route.len(), 7);
    }

    #[test]
    fn adjacent_tie_goes_to_up() {
        let grid = default_grid();
        // (1, 6): up (0, 6) and right (1, 7) are both two steps from the depot.
        let route = AStarRouter.shortest_path_to_adjacent(&grid, grid.depot(), Pos::new(1, 6));
        assert_eq!(route.destination(), Some(Pos::new(0, 6)));
        assert_eq!(route.steps(), 2);
    }

    #[test]
    fn adjacent_never_lands_on_goal() {
        let grid = default_grid();
        for item in grid.item_positions() {
            let route = AStarRouter.shortest_path_to_adjacent(&grid, grid.depot(), item);
            let end = route.destination().unwrap();
            assert_ne!(end, item);
            assert_eq!(end.manhattan(item), 1);
            assert!(grid.is_walkable(end));
        }
    }

    #[test]
    fn adjacent_unreachable_inside_solid_rack() {
        let grid = solid_rack_grid();
        let route = AStarRouter.shortest_path_to_adjacent(&grid, grid.depot(), Pos::new(5, 3));
        assert!(route.is_empty());
    }

    #[test]
    fn route_spans_a_large_grid() {
        let layout = LayoutConfig { rows: 401, cols: 401, ..LayoutConfig::default() };
        let grid = Grid::new(&layout).unwrap();
        let far = Pos::new(400, 400);
        let route = AStarRouter.shortest_path(&grid, Pos::new(0, 0), far);
        assert_eq!(route.len(), 801);
        assert_eq!(route.destination(), Some(far));
    }

    #[test]
    fn routing_never_mutates_grid() {
        let grid = default_grid();
        let before = grid.item_positions();
        let _ = AStarRouter.shortest_path_to_adjacent(&grid, grid.depot(), Pos::new(9, 14));
        assert_eq!(grid.item_positions(), before);
    }
}
