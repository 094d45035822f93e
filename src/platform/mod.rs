//! Platform abstraction layer
//!
//! Handles the pieces that sit outside the simulation:
//! - Input event sources
//! - Fixed-rate tick pacing
//! - The game loop tying input, simulation and rendering together

pub mod app;
pub mod clock;
pub mod input;

pub use app::{App, RunSummary};
pub use clock::{FrameClock, NoWait, Pacer};
pub use input::{InputSource, PatrolInput, ScriptedInput};
