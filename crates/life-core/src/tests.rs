//! Unit tests for life-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, LifeError};

    #[test]
    fn numeric_forms() {
        assert_eq!(Cell::Alive.as_u8(), 1);
        assert_eq!(Cell::Dead.as_u8(), 0);
        assert_eq!(Cell::try_from(1u8).unwrap(), Cell::Alive);
        assert_eq!(Cell::try_from(0u8).unwrap(), Cell::Dead);
        assert_eq!(Cell::try_from(2u8), Err(LifeError::InvalidCell(2)));
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert!(!bool::from(Cell::Dead));
        assert_eq!(Cell::Alive.flipped(), Cell::Dead);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Grid, LifeError};

    #[test]
    fn from_u8_rows_keeps_shape() {
        let g = Grid::from_u8_rows(vec![vec![0, 1, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(g.dims(), (2, 3));
        assert_eq!(g.cell(0, 1), Cell::Alive);
        assert_eq!(g.cell(1, 2), Cell::Dead);
        assert_eq!(g.live_count(), 3);
        assert_eq!(g.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 0]]);
    }

    #[test]
    fn empty_grids_rejected() {
        assert_eq!(Grid::from_u8_rows(vec![]), Err(LifeError::EmptyGrid));
        assert_eq!(Grid::from_u8_rows(vec![vec![], vec![]]), Err(LifeError::EmptyGrid));
        assert_eq!(Grid::dead(0, 4), Err(LifeError::EmptyGrid));
        assert_eq!(Grid::dead(4, 0), Err(LifeError::EmptyGrid));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_rows(vec![vec![true, false], vec![true], vec![false, false]]);
        assert_eq!(err, Err(LifeError::Ragged { row: 1, expected: 2, got: 1 }));
    }

    #[test]
    fn invalid_cell_value_rejected() {
        let err = Grid::from_u8_rows(vec![vec![0, 7]]);
        assert_eq!(err, Err(LifeError::InvalidCell(7)));
    }

    #[test]
    fn get_is_bounds_checked() {
        let g = Grid::dead(2, 2).unwrap();
        assert_eq!(g.get(1, 1), Some(Cell::Dead));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 2), None);
    }

    #[test]
    fn set_and_toggle() {
        let mut g = Grid::dead(3, 3).unwrap();
        g.set(2, 2, Cell::Alive).unwrap();
        assert_eq!(g.toggle(2, 2).unwrap(), Cell::Dead);
        assert_eq!(g.toggle(0, 0).unwrap(), Cell::Alive);
        assert!(matches!(g.set(3, 0, Cell::Alive), Err(LifeError::OutOfBounds { .. })));
        assert!(g.toggle(0, 3).is_err());
        assert_eq!(g.live_count(), 1);
    }

    #[test]
    fn display_matches_dump_format() {
        let g = Grid::from_u8_rows(vec![vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
        assert_eq!(g.to_string(), " 0 1 0\n 1 0 1\n");
    }

    #[test]
    fn parse_plaintext() {
        let g: Grid = "!Name: blinker\n.....\n.OOO.\n.....\n".parse().unwrap();
        assert_eq!(g.dims(), (3, 5));
        assert_eq!(g.live_count(), 3);
        assert_eq!(g.cell(1, 1), Cell::Alive);
    }

    #[test]
    fn display_parses_back() {
        let g = Grid::from_u8_rows(vec![vec![1, 0], vec![0, 1], vec![1, 1]]).unwrap();
        let back: Grid = g.to_string().parse().unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("..\n.x\n".parse::<Grid>(), Err(LifeError::Parse { line: 2, .. })));
        assert!(matches!("...\n..\n".parse::<Grid>(), Err(LifeError::Parse { line: 2, .. })));
        assert_eq!("! only a comment\n".parse::<Grid>(), Err(LifeError::EmptyGrid));
    }

    #[test]
    fn ragged_text_reports_source_line() {
        let err = "!c\n!c\n...\n..\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, LifeError::Parse { line: 4, .. }), "{err:?}");
        let err = "...\n\n!c\n....\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, LifeError::Parse { line: 4, .. }), "{err:?}");
    }

    #[test]
    fn extinct() {
        assert!(Grid::dead(4, 4).unwrap().is_extinct());
        assert!(!Grid::from_u8_rows(vec![vec![0, 1]]).unwrap().is_extinct());
    }
}

#[cfg(test)]
mod rule {
    use crate::patterns::{BLINKER, BLOCK, GLIDER};
    use crate::{Cell, Grid, count_live_neighbors, is_fixed_point, next_cell_state, step, step_with_stats};

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_u8_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn corner_sees_at_most_three_neighbors() {
        let full = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        assert_eq!(count_live_neighbors(&full, 0, 0), 3);
        assert_eq!(count_live_neighbors(&full, 2, 2), 3);
        assert_eq!(count_live_neighbors(&full, 0, 1), 5);
        assert_eq!(count_live_neighbors(&full, 1, 1), 8);
    }

    #[test]
    fn lone_corner_cell_has_no_neighbors() {
        let g = grid(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        assert_eq!(count_live_neighbors(&g, 0, 0), 0);
        assert_eq!(count_live_neighbors(&g, 1, 1), 1);
        assert_eq!(count_live_neighbors(&g, 2, 2), 0);
    }

    #[test]
    fn single_row_grid() {
        let g = grid(&[&[1, 1, 1]]);
        assert_eq!(count_live_neighbors(&g, 0, 1), 2);
        assert_eq!(count_live_neighbors(&g, 0, 0), 1);
    }

    #[test]
    fn transition_table() {
        for n in 0..=8u8 {
            let survive = matches!(n, 2 | 3);
            assert_eq!(next_cell_state(Cell::Alive, n).is_alive(), survive, "alive with {n}");
            assert_eq!(next_cell_state(Cell::Dead, n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let g = grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert!(step(&g).is_extinct());
    }

    #[test]
    fn dead_grid_stays_dead() {
        let g = Grid::dead(3, 3).unwrap();
        assert_eq!(step(&g), g);
        assert!(is_fixed_point(&g));
    }

    #[test]
    fn step_does_not_mutate_input() {
        let g = BLINKER.centered(5, 5).unwrap();
        let before = g.clone();
        let _ = step(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn block_is_still_life() {
        let g = BLOCK.centered(4, 4).unwrap();
        assert_eq!(step(&g), g);
        assert!(is_fixed_point(&g));
    }

    #[test]
    fn blinker_has_period_two() {
        let g0 = BLINKER.centered(5, 5).unwrap();
        let g1 = step(&g0);
        let g2 = step(&g1);
        assert_ne!(g1, g0);
        assert_eq!(g2, g0);
        // Horizontal → vertical through the center.
        assert_eq!(g1.to_rows()[1], vec![0, 0, 1, 0, 0]);
        assert_eq!(g1.to_rows()[2], vec![0, 0, 1, 0, 0]);
        assert_eq!(g1.to_rows()[3], vec![0, 0, 1, 0, 0]);
        assert!(!is_fixed_point(&g0));
    }

    #[test]
    fn glider_translates_diagonally() {
        let mut start = Grid::dead(10, 10).unwrap();
        GLIDER.stamp(&mut start, (1, 1)).unwrap();
        let mut expected = Grid::dead(10, 10).unwrap();
        GLIDER.stamp(&mut expected, (2, 2)).unwrap();

        let mut g = start;
        for _ in 0..4 {
            g = step(&g);
        }
        assert_eq!(g, expected);
    }

    #[test]
    fn edges_are_hard() {
        // A blinker flush against the top edge loses its upper arm.
        let g = grid(&[&[1, 1, 1], &[0, 0, 0], &[0, 0, 0]]);
        let next = step(&g);
        assert_eq!(next.to_rows(), vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn step_is_deterministic() {
        let g = crate::random_grid(16, 16, 0.4, 9).unwrap();
        assert_eq!(step(&g), step(&g));
    }

    #[test]
    fn stats_count_births_and_deaths() {
        let g0 = BLINKER.centered(5, 5).unwrap();
        let (g1, stats) = step_with_stats(&g0);
        assert_eq!(g1, step(&g0));
        assert_eq!(stats.births, 2);
        assert_eq!(stats.deaths, 2);
        assert_eq!(stats.live, 3);
        assert!(!stats.is_unchanged());

        let block = BLOCK.centered(4, 4).unwrap();
        assert!(step_with_stats(&block).1.is_unchanged());
    }
}

#[cfg(test)]
mod patterns {
    use crate::patterns::{BEACON, BLOCK, GLIDER, GOSPER_GLIDER_GUN, TOAD};
    use crate::{Grid, LifeError, PATTERNS, Pattern, random_grid, step};

    #[test]
    fn lookup_by_name() {
        assert_eq!(Pattern::by_name("Glider").unwrap().name, "glider");
        assert!(matches!(Pattern::by_name("nope"), Err(LifeError::UnknownPattern(_))));
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn bounds() {
        assert_eq!(GLIDER.bounds(), (3, 3));
        assert_eq!(TOAD.bounds(), (2, 4));
        assert_eq!(GOSPER_GLIDER_GUN.bounds(), (9, 36));
        assert_eq!(GOSPER_GLIDER_GUN.cells.len(), 36);
    }

    #[test]
    fn stamp_out_of_bounds_writes_nothing() {
        let mut g = Grid::dead(3, 3).unwrap();
        assert!(BEACON.stamp(&mut g, (0, 0)).is_err());
        assert!(g.is_extinct());
    }

    #[test]
    fn stamp_far_origin_is_out_of_bounds() {
        let mut g = Grid::dead(4, 4).unwrap();
        assert!(matches!(BLOCK.stamp(&mut g, (usize::MAX, 0)), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(BLOCK.stamp(&mut g, (0, usize::MAX - 1)), Err(LifeError::OutOfBounds { .. })));
        assert!(g.is_extinct());
    }

    #[test]
    fn period_two_oscillators() {
        for p in [&TOAD, &BEACON] {
            let g0 = p.centered(8, 8).unwrap();
            let g1 = step(&g0);
            assert_ne!(g1, g0, "{}", p.name);
            assert_eq!(step(&g1), g0, "{}", p.name);
        }
    }

    #[test]
    fn random_is_reproducible() {
        let a = random_grid(12, 20, 0.3, 42).unwrap();
        let b = random_grid(12, 20, 0.3, 42).unwrap();
        let c = random_grid(12, 20, 0.3, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_density_extremes() {
        assert!(random_grid(5, 5, 0.0, 1).unwrap().is_extinct());
        assert_eq!(random_grid(5, 5, 1.0, 1).unwrap().live_count(), 25);
        assert!(matches!(random_grid(5, 5, 1.5, 1), Err(LifeError::Config(_))));
    }

    #[test]
    fn appending_rows_keeps_existing_rows() {
        let small = random_grid(4, 10, 0.5, 7).unwrap();
        let large = random_grid(8, 10, 0.5, 7).unwrap();
        for r in 0..4 {
            assert_eq!(small.row(r), large.row(r));
        }
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{EngineConfig, Generation};

    #[test]
    fn generation_counter() {
        assert_eq!(Generation::ZERO.next(), Generation(1));
        assert_eq!(Generation(12).to_string(), "G12");
    }

    #[test]
    fn default_config_ticks_every_second() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.tick_period, Duration::from_secs(1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_period_rejected() {
        let cfg = EngineConfig { tick_period: Duration::ZERO, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use std::time::Duration;

    use crate::{EngineConfig, Grid};

    #[test]
    fn grid_json_shape() {
        let g = Grid::from_u8_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":2,"cells":[[0,1],[1,0]]}"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_json_revalidated() {
        let ragged = r#"{"rows":2,"cols":2,"cells":[[0,1],[1]]}"#;
        assert!(serde_json::from_str::<Grid>(ragged).is_err());
        let mislabelled = r#"{"rows":3,"cols":2,"cells":[[0,1],[1,0]]}"#;
        assert!(serde_json::from_str::<Grid>(mislabelled).is_err());
    }

    #[test]
    fn config_period_in_millis() {
        let cfg = EngineConfig { tick_period: Duration::from_millis(250), ..EngineConfig::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""tick_period":250"#));
        assert_eq!(serde_json::from_str::<EngineConfig>(&json).unwrap(), cfg);
    }
}
