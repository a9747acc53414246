//! Core engine types: state, actions, RNG, configuration.
//!
//! This module contains the values a host holds and dispatches. The rules
//! that decide how they change live in `rules` and `reducer`.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Action, Move, Transition};
pub use config::{DrawMode, GameConfig};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{Board, GameState, GameStateBuilder};
