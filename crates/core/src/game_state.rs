//! Game state module - owns the complete game state
//!
//! This module ties together the grid, the active and held pieces, scoring
//! and the mode flag. All mutation happens in two places: [`GameState::tick`]
//! (the fixed-rate transition function) and [`GameState::apply_command`] (the
//! input interpreter). Both take `&mut self`, so a tick and an input handler
//! can never interleave.

use tracing::{debug, error, info};

use crate::catalog::{PieceSource, RandomSource};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::{HeldPiece, Piece};
use crate::scoring::calculate_score;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Mode, HOLD_COOLDOWN, UNHOLD_COOLDOWN};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    /// A new active piece was spawned.
    pub spawned: bool,
    pub lines_cleared: u32,
    /// The active piece was locked into the grid.
    pub locked: bool,
    /// The game ended and was reset into the help screen.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    config: GameConfig,
    grid: Grid,
    active: Option<Piece>,
    held: Option<HeldPiece>,
    score: u32,
    /// Consecutive ticks with at least one cleared line.
    combo: u32,
    /// Gates storing a piece into the empty hold slot.
    hold_cooldown: u8,
    /// Gates retrieving the held piece.
    unhold_cooldown: u8,
    mode: Mode,
    /// Ticks processed since creation, in every mode.
    frame: u64,
    source: S,
}

impl GameState<RandomSource> {
    /// Create a new game on the default grid with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameConfig::default(), RandomSource::new(seed))
    }
}

impl Default for GameState<RandomSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game with an explicit config and piece source.
    ///
    /// # Panics
    ///
    /// Panics if the config's grid dimensions are out of range.
    pub fn with_source(config: GameConfig, source: S) -> Self {
        config.validate();
        Self {
            config,
            grid: Grid::new(config.width, config.height),
            active: None,
            held: None,
            score: 0,
            combo: 0,
            hold_cooldown: 0,
            unhold_cooldown: 0,
            mode: Mode::ShowingHelp,
            frame: 0,
            source,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn show_help(&self) -> bool {
        self.mode == Mode::ShowingHelp
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn hold_cooldown(&self) -> u8 {
        self.hold_cooldown
    }

    pub fn unhold_cooldown(&self) -> u8 {
        self.unhold_cooldown
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups (puzzles, tests).
    ///
    /// Callers must not fill cells under the active piece.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn held(&self) -> Option<&HeldPiece> {
        self.held.as_ref()
    }

    /// Leave the help screen and start (or resume) playing.
    pub fn start(&mut self) {
        self.mode = Mode::Playing;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.active.clone_from(&self.active);
        out.held.clone_from(&self.held);
        out.score = self.score;
        out.combo = self.combo;
        out.show_help = self.show_help();
    }

    /// Render snapshot. `high_score` is left at 0 for the caller to fill in.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.config.width, self.config.height);
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by one tick.
    ///
    /// While the help screen is showing nothing but the frame counter moves.
    /// While playing, the sub-steps run in a fixed order: spawn, line clear,
    /// scoring, gravity, clamp, lock.
    pub fn tick(&mut self) -> TickSummary {
        let mut summary = TickSummary::default();
        if self.mode == Mode::Playing {
            self.step(&mut summary);
        }
        self.frame = self.frame.wrapping_add(1);
        summary
    }

    fn step(&mut self, summary: &mut TickSummary) {
        if self.active.is_none() {
            summary.spawned = true;
            if !self.spawn_piece() {
                self.game_over();
                summary.game_over = true;
                return;
            }
        }

        // Clears see the grid as it stood before this tick's lock.
        let lines = self.grid.clear_complete_lines();
        let result = calculate_score(lines, self.combo);
        self.score = self.score.saturating_add(result.total);
        self.combo = result.combo;
        summary.lines_cleared = lines as u32;
        if lines > 0 {
            debug!(lines, combo = self.combo, score = self.score, "lines cleared");
        } else if result.combo_bonus > 0 {
            debug!(bonus = result.combo_bonus, score = self.score, "combo paid");
        }

        let Some(mut piece) = self.active.take() else {
            return;
        };
        // Rows shifted down by the clear can land on a piece spawned near the top.
        if !self.fits_clamped(&piece) {
            debug!("cleared rows collapsed onto the active piece");
            self.game_over();
            summary.game_over = true;
            return;
        }
        let (width, height) = (self.config.width, self.config.height);

        if self.frame % u64::from(self.config.gravity_interval()) == 0
            && !self.must_lock(&piece.clamped(width, height))
        {
            piece.y += 1;
        }

        let piece = piece.clamped(width, height);

        if !self.must_lock(&piece) {
            self.active = Some(piece);
            return;
        }

        if piece.y == 0 {
            self.game_over();
            summary.game_over = true;
            return;
        }

        match self.grid.place(&piece) {
            Ok(()) => {
                debug!(x = piece.x, y = piece.y, "piece locked");
                summary.locked = true;
            }
            Err(err) => {
                error!(%err, x = piece.x, y = piece.y, "lock rejected by grid");
                if cfg!(debug_assertions) {
                    panic!("lock rejected by grid: {err}");
                }
                self.game_over();
                summary.game_over = true;
            }
        }
    }

    /// Draw and position a new active piece, ticking the hold cooldowns.
    ///
    /// Returns false if the spawned piece overlaps locked cells (top-out).
    fn spawn_piece(&mut self) -> bool {
        let spawn = self.source.draw();
        let x = self.config.spawn_x(spawn.shape.cols());
        let piece = Piece::new(spawn.shape, spawn.color, x, 0);

        self.hold_cooldown = self.hold_cooldown.saturating_sub(1);
        self.unhold_cooldown = self.unhold_cooldown.saturating_sub(1);

        if !self.grid.fits(&piece) {
            return false;
        }

        debug!(x, cols = piece.width(), rows = piece.height(), "piece spawned");
        self.active = Some(piece);
        true
    }

    /// True if any occupied cell has the grid floor or a filled cell directly below it.
    fn must_lock(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .any(|(row, col)| self.grid.is_blocked(row + 1, col))
    }

    /// Reset into the help screen: empty grid, no pieces, score 0.
    ///
    /// The combo and both hold cooldowns are zeroed too, so the next game
    /// starts from a clean slate.
    fn game_over(&mut self) {
        info!(score = self.score, "game over");
        self.active = None;
        self.held = None;
        self.grid.reset();
        self.score = 0;
        self.combo = 0;
        self.hold_cooldown = 0;
        self.unhold_cooldown = 0;
        self.mode = Mode::ShowingHelp;
    }

    /// Apply one input command. Returns true if the state changed.
    ///
    /// On the help screen every command only dismisses the screen.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.mode == Mode::ShowingHelp {
            self.mode = Mode::Playing;
            return true;
        }

        match command {
            Command::MoveLeft => self.try_transform(|p| p.shifted(-1, 0)),
            Command::MoveRight => self.try_transform(|p| p.shifted(1, 0)),
            Command::SoftDrop => self.try_transform(|p| p.shifted(0, 1)),
            Command::RotateCw => self.try_transform(|p| p.with_shape(p.shape.rotate_cw())),
            Command::RotateCcw => self.try_transform(|p| p.with_shape(p.shape.rotate_ccw())),
            Command::HardDrop => self.hard_drop(),
            Command::Hold => self.hold(),
            Command::Pause => {
                self.mode = Mode::ShowingHelp;
                true
            }
            Command::AnyKey => false,
        }
    }

    /// Replace the active piece with `f(active)`.
    ///
    /// The result is stored unclamped; the next tick clamps it. It is rejected
    /// if its clamped placement would overlap locked cells.
    fn try_transform(&mut self, f: impl FnOnce(&Piece) -> Piece) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let candidate = f(active);
        if !self.fits_clamped(&candidate) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    fn fits_clamped(&self, piece: &Piece) -> bool {
        self.grid
            .fits(&piece.clamped(self.config.width, self.config.height))
    }

    /// Drop the active piece to the lowest row it fits. The next tick locks it.
    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let mut piece = active.clamped(self.config.width, self.config.height);
        while !self.must_lock(&piece) {
            piece.y += 1;
        }
        self.active = Some(piece);
        true
    }

    /// Store the active piece, or retrieve the held one.
    ///
    /// Storing needs an empty slot and `hold_cooldown == 0`; the active piece
    /// goes away and a new one spawns next tick. Retrieving needs
    /// `unhold_cooldown == 0`; the held shape and color replace the active
    /// piece's at its current position and the slot empties.
    fn hold(&mut self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        match self.held.as_ref() {
            None => {
                if self.hold_cooldown != 0 {
                    return false;
                }
                self.held = self.active.take().map(HeldPiece::from);
                self.unhold_cooldown = UNHOLD_COOLDOWN;
                true
            }
            Some(held) => {
                if self.unhold_cooldown != 0 {
                    return false;
                }
                let candidate = Piece::new(held.shape.clone(), held.color, active.x, active.y);
                if !self.fits_clamped(&candidate) {
                    return false;
                }
                self.active = Some(candidate);
                self.held = None;
                self.hold_cooldown = HOLD_COOLDOWN;
                true
            }
        }
    }
}
