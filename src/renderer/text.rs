//! Character-grid renderer for terminals and logs
//!
//! Each character covers a `scale x scale` block of screen units. Later
//! layers overwrite earlier ones: walls, gate, pickups, enemies, player.

use super::{Frame, Renderer};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

const WALL: char = '#';
const GATE: char = '-';
const PICKUP: char = '.';
const ENEMY: char = 'G';
const PLAYER: char = 'C';
const EMPTY: char = ' ';

/// Draws frames into a text buffer
#[derive(Debug, Clone)]
pub struct TextRenderer {
    scale: i32,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    /// Last rendered frame, one line per row plus HUD lines
    pub output: String,
}

impl TextRenderer {
    pub fn new(scale: i32) -> Self {
        let scale = scale.clamp(1, SCREEN_WIDTH.max(SCREEN_HEIGHT));
        let cols = (SCREEN_WIDTH + scale - 1) as usize / scale as usize;
        let rows = (SCREEN_HEIGHT + scale - 1) as usize / scale as usize;
        Self {
            scale,
            cols,
            rows,
            cells: vec![EMPTY; cols * rows],
            output: String::new(),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Character at grid cell `(col, row)` of the last frame
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    fn fill(&mut self, rect: &Rect, ch: char) {
        if rect.is_empty() {
            return;
        }
        let clamp_col = |v: i32| (v / self.scale).clamp(0, self.cols as i32 - 1) as usize;
        let clamp_row = |v: i32| (v / self.scale).clamp(0, self.rows as i32 - 1) as usize;
        let (c0, c1) = (clamp_col(rect.x), clamp_col(rect.right() - 1));
        let (r0, r1) = (clamp_row(rect.y), clamp_row(rect.bottom() - 1));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.cells[row * self.cols + col] = ch;
            }
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(15)
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.cells.fill(EMPTY);
        for wall in frame.walls {
            self.fill(&wall.rect, WALL);
        }
        for gate in frame.gate {
            self.fill(&gate.rect, GATE);
        }
        for pickup in frame.pickups {
            self.fill(&pickup.rect, PICKUP);
        }
        for enemy in frame.enemies {
            self.fill(&enemy.body.rect, ENEMY);
        }
        self.fill(&frame.player.body.rect, PLAYER);

        self.output.clear();
        self.output.push_str(&frame.score_text());
        self.output.push('\n');
        for row in self.cells.chunks(self.cols) {
            self.output.extend(row.iter());
            self.output.push('\n');
        }
        if let Some(lines) = frame.overlay_text() {
            for line in lines {
                self.output.push_str(line);
                self.output.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};

    #[test]
    fn test_draws_layers() {
        let state = GameState::new();
        let mut renderer = TextRenderer::new(15);
        renderer.draw(&Frame::capture(&state));

        assert_eq!(renderer.size(), (41, 41));
        // Outer wall at the top-left corner
        assert_eq!(renderer.cell(0, 0), Some(WALL));
        // Player spawn (287, 439)
        assert_eq!(renderer.cell(287 / 15, 439 / 15), Some(PLAYER));
        assert!(renderer.output.starts_with("Score: 0/"));
        assert!(renderer.output.contains(ENEMY));
        assert!(renderer.output.contains(PICKUP));
        assert!(renderer.cell(41, 0).is_none());
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut renderer = TextRenderer::new(i32::MAX);
        assert_eq!(renderer.size(), (1, 1));
        renderer.draw(&Frame::capture(&GameState::new()));
        assert_eq!(renderer.cell(0, 0), Some(PLAYER));

        assert_eq!(TextRenderer::new(-5).size(), TextRenderer::new(1).size());
    }

    #[test]
    fn test_overlay_appended() {
        let mut state = GameState::new();
        state.phase = GamePhase::Lost;
        let mut renderer = TextRenderer::default();
        renderer.draw(&Frame::capture(&state));
        assert!(renderer.output.contains("Game Over!"));
        assert!(renderer.output.trim_end().ends_with("To quit, press ESCAPE."));
    }
}
