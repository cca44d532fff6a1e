// controller.rs - Edit/Running state machine that drives a LifeBoard from input events

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::grid::Cell;
use crate::{BoardConfig, BoardError, ConfigError, LifeBoard, Pattern};

pub const WINDOW_TITLE: &str = "Conway's Game of Life";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Cells can be edited; no automatic stepping.
    #[default]
    Edit,
    /// One generation per tick interval; edits are ignored.
    Running,
}

/// Owns the board and turns clicks, start/pause presses and timer ticks into
/// board operations, one at a time.
#[derive(Debug, Clone)]
pub struct Controller {
    board: LifeBoard,
    state: RunState,
    tick_interval: Duration,
    last_tick: Instant,
}

impl Controller {
    pub fn new(board: LifeBoard, tick_interval: Duration) -> Self {
        Self {
            board,
            state: RunState::Edit,
            tick_interval,
            last_tick: Instant::now(),
        }
    }

    /// Builds the board described by `config`, stamping its initial pattern if any.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        let mut board = LifeBoard::new(config.width, config.height)?;
        if let Some(name) = &config.initial_pattern {
            let pattern = Pattern::by_name(name)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown pattern '{name}'")))?;
            pattern.apply(&mut board, (0, 0))?;
        }
        Ok(Self::new(board, config.tick_interval()))
    }

    pub fn board(&self) -> &LifeBoard {
        &self.board
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Enters `Running`; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.last_tick = now;
        info!(generation = self.board.generation(), "simulation started");
    }

    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = RunState::Edit;
        info!(generation = self.board.generation(), "simulation paused");
    }

    /// Start/pause key handler.
    pub fn toggle_running(&mut self, now: Instant) {
        match self.state {
            RunState::Edit => self.start(now),
            RunState::Running => self.pause(),
        }
    }

    /// Toggles a cell if the board is being edited.
    ///
    /// Returns whether the cell was flipped. Out-of-bounds coordinates are an
    /// error in either state.
    pub fn click(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if !self.board.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                height: self.board.height(),
                width: self.board.width(),
            });
        }
        if self.is_running() {
            warn!(row, col, "ignoring cell edit while running");
            return Ok(false);
        }
        self.board.toggle(row, col)?;
        Ok(true)
    }

    /// Stamps a built-in pattern at `origin` while editing.
    pub fn load_pattern(&mut self, pattern: &Pattern, origin: Cell) -> Result<bool, BoardError> {
        if self.is_running() {
            warn!(pattern = pattern.name, "ignoring pattern load while running");
            return Ok(false);
        }
        pattern.apply(&mut self.board, origin)?;
        info!(pattern = pattern.name, ?origin, "loaded pattern");
        Ok(true)
    }

    /// Steps the board once if running and a full interval has passed since
    /// the previous step. Returns the cells that changed.
    pub fn tick(&mut self, now: Instant) -> Option<Vec<Cell>> {
        if !self.is_running() || now.saturating_duration_since(self.last_tick) < self.tick_interval {
            return None;
        }
        let changed = self.board.step();
        self.last_tick = now;
        Some(changed)
    }

    /// How long until the next tick is due, or `None` while editing.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last_tick);
        Some(self.tick_interval.saturating_sub(elapsed))
    }

    pub fn title(&self) -> String {
        format!("{WINDOW_TITLE} - Step {}", self.board.generation())
    }
}
