//! Game configuration - grid dimensions and simulation rates

use crate::types::{FALL_SPEED, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_DIM, TICKS_PER_SECOND};

/// Fixed parameters of a game. `Default` uses the workspace constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub ticks_per_second: u32,
    /// Cells fallen per second by gravity.
    pub fall_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH as usize,
            height: GRID_HEIGHT as usize,
            ticks_per_second: TICKS_PER_SECOND,
            fall_speed: FALL_SPEED,
        }
    }
}

impl GameConfig {
    /// Config with a custom grid size and default rates.
    pub fn with_grid(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the gravity rate.
    pub fn with_fall_speed(mut self, fall_speed: u32) -> Self {
        self.fall_speed = fall_speed;
        self
    }

    /// Ticks between gravity steps: `round(ticks_per_second / fall_speed)`, at least 1.
    pub fn gravity_interval(&self) -> u32 {
        let fps = self.ticks_per_second;
        let speed = self.fall_speed.max(1);
        ((2 * fps + speed) / (2 * speed)).max(1)
    }

    /// Milliseconds between ticks.
    pub fn tick_ms(&self) -> u64 {
        1000 / u64::from(self.ticks_per_second.max(1))
    }

    /// Column that horizontally centers a shape `cols` wide: `round((width - cols) / 2)`.
    pub fn spawn_x(&self, cols: usize) -> i32 {
        let free = self.width as i32 - cols as i32;
        if free >= 0 {
            (free + 1) / 2
        } else {
            0
        }
    }

    pub(crate) fn validate(&self) {
        assert!(
            (1..=MAX_GRID_DIM).contains(&self.width) && (1..=MAX_GRID_DIM).contains(&self.height),
            "grid dimensions {}x{} out of range",
            self.width,
            self.height
        );
        assert!(self.ticks_per_second > 0, "ticks_per_second must be positive");
    }
}
