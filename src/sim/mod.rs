//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness; enemies follow fixed scripts
//! - Stable iteration order (by enemy ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod maze;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Bounded, MoveResult, any_overlap, first_overlap, overlaps, resolve_move};
pub use entity::{Direction, Enemy, Movable, Pickup, Player, ScriptStep, Wall};
pub use rect::Rect;
pub use state::{GamePhase, GameState, SimConfig};
pub use tick::{InputEvent, Key, TickInput, TickReport, tick};
