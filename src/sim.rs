// Copyright (c) 2026 glyphrain developers

use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};

use crate::grid::{GlyphGrid, RainCell};

/// Brightness of a streak head the instant it is set.
pub const HEAD_BRIGHTNESS: u8 = 255;

/// A fading cell above this brightness may still flicker its glyph.
const FLICKER_FLOOR: u8 = 64;

#[derive(Clone, Copy, Debug)]
pub struct RainParams {
    /// Brightness lost per step, floored at 0.
    pub decay: u8,
    /// Chance per step that a bright cell swaps its glyph.
    pub flip_rate: f32,
    /// Top-row cells at or below this brightness may start a new streak.
    pub fill_start: u8,
    /// Chance per step that an eligible top-row cell starts a streak.
    pub fill_rate: f32,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            decay: 6,
            flip_rate: 0.001,
            fill_start: 100,
            fill_rate: 0.05,
        }
    }
}

/// Advances a [`GlyphGrid`] one discrete step per frame. Owns the RNG, so a
/// fixed seed replays the same rain.
pub struct RainSimulator {
    params: RainParams,
    chars: Vec<char>,
    rng: StdRng,
    rand_chance: Uniform<f32>,
    rand_glyph: Uniform<usize>,
}

impl RainSimulator {
    pub fn new(chars: Vec<char>, params: RainParams, seed: u64) -> Self {
        let chars = if chars.is_empty() {
            vec!['0', '1']
        } else {
            chars
        };
        let rand_glyph = Uniform::new(0, chars.len()).expect("valid range");
        Self {
            params,
            chars,
            rng: StdRng::seed_from_u64(seed),
            rand_chance: Uniform::new(0.0f32, 1.0).expect("valid range"),
            rand_glyph,
        }
    }

    fn random_glyph(&mut self) -> char {
        self.chars[self.rand_glyph.sample(&mut self.rng)]
    }

    fn chance(&mut self) -> f32 {
        self.rand_chance.sample(&mut self.rng)
    }

    /// Puts every cell of the active region back to a dormant random glyph.
    pub fn reseed(&mut self, grid: &mut GlyphGrid) {
        for i in 0..grid.len() {
            let glyph = self.random_glyph();
            grid.set_cell(
                i,
                RainCell {
                    glyph,
                    brightness: 0,
                },
            );
        }
    }

    /// Applies a new extent. A column-count change scrambles the row-major
    /// mapping of the surviving buffer, so the whole region is reseeded;
    /// pure row growth reseeds only the newly exposed rows.
    pub fn resize(&mut self, grid: &mut GlyphGrid, columns: usize, rows: usize) {
        let (columns, rows) = GlyphGrid::clamp_extent(columns, rows);
        let old_columns = grid.columns();
        let old_rows = grid.rows();
        if columns == old_columns && rows == old_rows {
            return;
        }

        grid.set_extent(columns, rows);
        if columns != old_columns {
            self.reseed(grid);
        } else if rows > old_rows {
            for i in old_rows * columns..rows * columns {
                let glyph = self.random_glyph();
                grid.set_cell(
                    i,
                    RainCell {
                        glyph,
                        brightness: 0,
                    },
                );
            }
        }
    }

    /// One simulation step over the active region.
    ///
    /// The sweep runs from the highest index down. A cell's downward
    /// neighbor sits at a higher index and has therefore already been
    /// visited, so a head written into it this step cannot cascade further
    /// within the same step.
    pub fn step(&mut self, grid: &mut GlyphGrid) {
        let columns = grid.columns();
        let total = grid.len();
        if grid.is_empty() {
            return;
        }

        for i in (0..total).rev() {
            // Pre-decay read: only a head set exactly this-or-last moment
            // (brightness still 255) pushes the streak one row down.
            if i + columns < total && grid.brightness(i) == HEAD_BRIGHTNESS {
                let glyph = self.random_glyph();
                grid.set_cell(
                    i + columns,
                    RainCell {
                        glyph,
                        brightness: HEAD_BRIGHTNESS,
                    },
                );
            }

            if grid.brightness(i) > FLICKER_FLOOR && self.chance() < self.params.flip_rate {
                let glyph = self.random_glyph();
                grid.set_glyph(i, glyph);
            }

            let b = grid.brightness(i);
            grid.set_brightness(i, b.saturating_sub(self.params.decay));

            // Top row only: once faded enough, maybe start a new streak.
            if i < columns
                && grid.brightness(i) <= self.params.fill_start
                && self.chance() < self.params.fill_rate
            {
                let glyph = self.random_glyph();
                grid.set_cell(
                    i,
                    RainCell {
                        glyph,
                        brightness: HEAD_BRIGHTNESS,
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_params() -> RainParams {
        RainParams {
            flip_rate: 0.0,
            fill_rate: 0.0,
            ..RainParams::default()
        }
    }

    fn make_sim(params: RainParams, seed: u64) -> RainSimulator {
        RainSimulator::new(vec!['0', '1', 'ラ', 'ン'], params, seed)
    }

    fn make_grid(sim: &mut RainSimulator, columns: usize, rows: usize) -> GlyphGrid {
        let mut grid = GlyphGrid::new();
        grid.set_extent(columns, rows);
        sim.reseed(&mut grid);
        grid
    }

    #[test]
    fn single_head_scenario_3x2() {
        let mut sim = make_sim(quiet_params(), 7);
        let mut grid = make_grid(&mut sim, 3, 2);
        grid.set_brightness(0, 255);

        sim.step(&mut grid);

        assert_eq!(grid.brightness(0), 249);
        assert_eq!(grid.brightness(3), 255);
        for i in [1, 2, 4, 5] {
            assert_eq!(grid.brightness(i), 0, "cell {} should stay dormant", i);
        }
    }

    #[test]
    fn decay_is_monotone_without_triggers() {
        let mut sim = make_sim(quiet_params(), 7);
        // Single row: nothing can propagate into it.
        let mut grid = make_grid(&mut sim, 8, 1);
        let before = [0u8, 1, 5, 6, 7, 64, 200, 254];
        for (i, &b) in before.iter().enumerate() {
            grid.set_brightness(i, b);
        }

        sim.step(&mut grid);

        for (i, &b) in before.iter().enumerate() {
            assert_eq!(grid.brightness(i), b.saturating_sub(6));
        }
    }

    #[test]
    fn every_head_with_a_row_below_propagates() {
        let mut sim = make_sim(quiet_params(), 9);
        let mut grid = make_grid(&mut sim, 4, 4);
        // Heads in assorted rows, including the last (no row below).
        let heads = [1, 6, 11, 13];
        for &i in &heads {
            grid.set_brightness(i, 255);
        }

        sim.step(&mut grid);

        for &i in &heads {
            assert_eq!(grid.brightness(i), 249);
            if i + grid.columns() < grid.len() {
                assert_eq!(grid.brightness(i + grid.columns()), 255);
            }
        }
    }

    #[test]
    fn propagation_moves_one_row_per_step() {
        let mut sim = make_sim(quiet_params(), 3);
        let mut grid = make_grid(&mut sim, 1, 4);
        grid.set_brightness(0, 255);

        sim.step(&mut grid);
        assert_eq!(
            [
                grid.brightness(0),
                grid.brightness(1),
                grid.brightness(2),
                grid.brightness(3)
            ],
            [249, 255, 0, 0]
        );

        sim.step(&mut grid);
        assert_eq!(
            [
                grid.brightness(0),
                grid.brightness(1),
                grid.brightness(2),
                grid.brightness(3)
            ],
            [243, 249, 255, 0]
        );
    }

    #[test]
    fn spawns_are_confined_to_the_top_row() {
        let mut sim = make_sim(
            RainParams {
                fill_rate: 1.0,
                flip_rate: 0.0,
                ..RainParams::default()
            },
            11,
        );
        let mut grid = make_grid(&mut sim, 4, 3);

        sim.step(&mut grid);

        for i in 0..grid.columns() {
            assert_eq!(grid.brightness(i), 255);
        }
        for i in grid.columns()..grid.len() {
            assert_eq!(grid.brightness(i), 0);
        }
    }

    #[test]
    fn flicker_swaps_glyphs_only_above_64() {
        let mut sim = RainSimulator::new(
            vec!['0', '1'],
            RainParams {
                flip_rate: 1.0,
                fill_rate: 0.0,
                ..RainParams::default()
            },
            13,
        );
        // Single row, glyphs outside the alphabet so any swap is visible.
        let mut grid = GlyphGrid::new();
        grid.set_extent(3, 1);
        for (i, &b) in [10u8, 64, 200].iter().enumerate() {
            grid.set_cell(
                i,
                RainCell {
                    glyph: 'x',
                    brightness: b,
                },
            );
        }

        sim.step(&mut grid);

        // At or below the flicker floor the glyph stays put.
        assert_eq!(grid.cell(0).glyph, 'x');
        assert_eq!(grid.cell(1).glyph, 'x');
        // Above it the glyph swaps; brightness still only decays.
        assert!(['0', '1'].contains(&grid.cell(2).glyph));
        assert_eq!(grid.brightness(2), 194);
    }

    #[test]
    fn faded_head_does_not_propagate() {
        let mut sim = make_sim(quiet_params(), 5);
        let mut grid = make_grid(&mut sim, 1, 3);
        // Bright but no longer exactly 255: the streak head has passed.
        grid.set_brightness(0, 249);

        sim.step(&mut grid);

        assert_eq!(grid.brightness(0), 243);
        assert_eq!(grid.brightness(1), 0);
    }

    #[test]
    fn brightness_stays_on_the_decay_lattice() {
        let mut sim = make_sim(RainParams::default(), 42);
        let mut grid = make_grid(&mut sim, 10, 8);

        for _ in 0..300 {
            sim.step(&mut grid);
        }

        // With decay 6 every reachable value is 255 minus a multiple of 6,
        // or 0 once the tail bottoms out.
        for i in 0..grid.len() {
            let b = grid.brightness(i);
            assert!(b == 0 || (255 - b) % 6 == 0, "unexpected brightness {}", b);
        }
    }

    #[test]
    fn same_seed_replays_the_same_rain() {
        let mut a = make_sim(RainParams::default(), 1234);
        let mut b = make_sim(RainParams::default(), 1234);
        let mut ga = make_grid(&mut a, 12, 6);
        let mut gb = make_grid(&mut b, 12, 6);

        for _ in 0..50 {
            a.step(&mut ga);
            b.step(&mut gb);
        }

        for i in 0..ga.len() {
            assert_eq!(ga.cell(i), gb.cell(i));
        }
    }

    #[test]
    fn reseed_leaves_all_cells_dormant() {
        let mut sim = make_sim(RainParams::default(), 2);
        let grid = make_grid(&mut sim, 6, 4);
        for i in 0..grid.len() {
            let cell = grid.cell(i);
            assert_eq!(cell.brightness, 0);
            assert!(['0', '1', 'ラ', 'ン'].contains(&cell.glyph));
        }
    }

    #[test]
    fn row_growth_reseeds_only_new_rows() {
        let mut sim = make_sim(quiet_params(), 8);
        let mut grid = make_grid(&mut sim, 5, 3);
        for i in 0..grid.len() {
            grid.set_brightness(i, 99);
        }

        sim.resize(&mut grid, 5, 5);

        for i in 0..5 * 3 {
            assert_eq!(grid.brightness(i), 99);
        }
        for i in 5 * 3..5 * 5 {
            assert_eq!(grid.brightness(i), 0);
        }
    }

    #[test]
    fn column_change_reseeds_everything() {
        let mut sim = make_sim(quiet_params(), 8);
        let mut grid = make_grid(&mut sim, 5, 3);
        for i in 0..grid.len() {
            grid.set_brightness(i, 99);
        }

        sim.resize(&mut grid, 7, 3);

        assert_eq!(grid.columns(), 7);
        for i in 0..grid.len() {
            assert_eq!(grid.brightness(i), 0);
        }
    }
}
