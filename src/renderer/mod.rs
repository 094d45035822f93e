//! Rendering collaborator interface
//!
//! The simulation hands a read-only `Frame` to a `Renderer` once per tick.
//! Drawing, fonts and presentation belong entirely to the renderer.

pub mod text;

pub use text::TextRenderer;

use crate::sim::{Enemy, GamePhase, GameState, Pickup, Player, Wall};

/// Read-only snapshot of everything a renderer may draw
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub walls: &'a [Wall],
    pub gate: &'a [Wall],
    pub pickups: &'a [Pickup],
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub score: u32,
    pub phase: GamePhase,
}

impl<'a> Frame<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            walls: &state.walls,
            gate: &state.gate,
            pickups: &state.pickups,
            player: &state.player,
            enemies: &state.enemies,
            score: state.score,
            phase: state.phase,
        }
    }

    /// Score line shown in the top-left corner
    pub fn score_text(&self) -> String {
        format!("Score: {}/{}", self.score, self.pickups.len())
    }

    /// Message lines drawn over the maze once the session is over
    pub fn overlay_text(&self) -> Option<[&'static str; 3]> {
        let headline = match self.phase {
            GamePhase::Won => "Congratulations, you won!",
            GamePhase::Lost => "Game Over!",
            GamePhase::Setup | GamePhase::Playing => return None,
        };
        Some([headline, "To play again, press ENTER.", "To quit, press ESCAPE."])
    }
}

/// Something that can present a frame
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Renderer that discards every frame
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame<'_>) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text_counts_remaining() {
        let mut state = GameState::new();
        state.score = 3;
        let remaining = state.remaining_pickups();
        let frame = Frame::capture(&state);
        assert_eq!(frame.score_text(), format!("Score: 3/{remaining}"));
        assert!(frame.overlay_text().is_none());
    }

    #[test]
    fn test_overlay_by_phase() {
        let mut state = GameState::new();
        state.phase = GamePhase::Lost;
        let lines = Frame::capture(&state).overlay_text();
        assert_eq!(lines.map(|l| l[0]), Some("Game Over!"));

        state.phase = GamePhase::Won;
        let lines = Frame::capture(&state).overlay_text();
        assert_eq!(lines.map(|l| l[0]), Some("Congratulations, you won!"));
    }
}
