//! A bounded Conway's Game of Life engine.
//!
//! [`LifeBoard`] holds the cells and applies the transition rule;
//! [`Controller`] wraps it in the Edit/Running state machine that a UI drives
//! with clicks, a start/pause key and a repeating timer.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;

pub use config::BoardConfig;
pub use controller::{Controller, RunState};
pub use error::{BoardError, ConfigError};
pub use grid::{Cell, LifeBoard};
pub use patterns::Pattern;
