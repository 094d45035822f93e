//! Vaxman - A maze-chase arcade game where the ghosts multiply
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, mutation)
//! - `renderer`: Read-only frame snapshots and a text renderer
//! - `platform`: Input sources, fixed-rate clock and the game loop
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 10;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 606;
    pub const SCREEN_HEIGHT: i32 = 606;

    /// Grid cell size; one key press moves the player one cell per tick
    pub const CELL_SIZE: i32 = 30;
    /// Player and enemy bounding box size
    pub const SPRITE_SIZE: i32 = 32;
    /// Pickup bounding box size
    pub const PICKUP_SIZE: i32 = 4;

    /// Seconds between mutation events
    pub const MUTATION_INTERVAL_SECS: u32 = 30;
    /// Live enemy count at which the session is lost (and below which it can be won)
    pub const ENEMY_LIMIT: usize = 128;
}
