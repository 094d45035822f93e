//! Vaxman entry point
//!
//! Runs a headless demo session: a scripted patrol drives the player while
//! frames are drawn by the text renderer.

use vaxman::Settings;
use vaxman::platform::{App, FrameClock, PatrolInput};
use vaxman::renderer::{Frame, Renderer, TextRenderer};
use vaxman::sim::{Direction, GameState};

/// Text renderer that prints every `every`th frame to stdout
struct PrintingRenderer {
    inner: TextRenderer,
    every: u64,
    frames: u64,
    /// The latest frame has not been printed yet
    pending: bool,
}

impl Renderer for PrintingRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.inner.draw(frame);
        self.frames += 1;
        self.pending = !(self.every > 0 && self.frames.is_multiple_of(self.every));
        if !self.pending {
            println!("{}", self.inner.output);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Vaxman (headless) starting...");

    let path = std::env::args().nth(1).unwrap_or_else(|| "vaxman.json".to_string());
    let settings = Settings::load(&path);

    let route = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    let input = PatrolInput::new(&route, 4);
    let renderer = PrintingRenderer {
        inner: TextRenderer::new(settings.text_scale),
        every: settings.print_every,
        frames: 0,
        pending: false,
    };

    let state = GameState::with_config(settings.sim_config());
    let mut app = App::new(state, input, renderer, FrameClock::new(settings.tick_rate));
    let summary = app.run(settings.demo_limit());

    if app.renderer().pending {
        println!("{}", app.renderer().inner.output);
    }
    log::info!(
        "Finished after {} ticks: {:?}, score {}, {} enemies",
        summary.ticks,
        summary.phase,
        summary.score,
        summary.enemies
    );
}
