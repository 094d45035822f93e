//! Game loop: input -> tick -> draw -> wait, strictly in that order

use crate::renderer::{Frame, Renderer};
use crate::sim::{GamePhase, GameState, TickInput, tick};

use super::clock::Pacer;
use super::input::InputSource;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Loop iterations executed (including the one that quit)
    pub ticks: u64,
    pub quit: bool,
    pub phase: GamePhase,
    pub score: u32,
    pub enemies: usize,
    pub wins: u32,
    pub losses: u32,
}

/// Game instance holding all state and collaborators
pub struct App<I, R, P> {
    pub state: GameState,
    input: I,
    renderer: R,
    pacer: P,
    // Track phase for win/loss counting
    last_phase: GamePhase,
    wins: u32,
    losses: u32,
}

impl<I: InputSource, R: Renderer, P: Pacer> App<I, R, P> {
    pub fn new(state: GameState, input: I, renderer: R, pacer: P) -> Self {
        let last_phase = state.phase;
        Self {
            state,
            input,
            renderer,
            pacer,
            last_phase,
            wins: 0,
            losses: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one loop iteration. Returns false once a quit was processed; the
    /// draw and wait phases are skipped in that case.
    pub fn step(&mut self) -> bool {
        let events = self.input.poll();
        let report = tick(&mut self.state, &TickInput { events });
        if report.quit {
            return false;
        }

        let phase = self.state.phase;
        if phase != self.last_phase {
            if phase.is_over() {
                match phase {
                    GamePhase::Won => self.wins += 1,
                    _ => self.losses += 1,
                }
            }
            log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
            self.last_phase = phase;
        }

        self.renderer.draw(&Frame::capture(&self.state));
        self.pacer.wait();
        true
    }

    /// Loop until quit, or until `max_ticks` iterations have run
    pub fn run(&mut self, max_ticks: Option<u64>) -> RunSummary {
        let mut ticks = 0;
        let mut quit = false;
        while max_ticks.is_none_or(|max| ticks < max) {
            ticks += 1;
            if !self.step() {
                quit = true;
                break;
            }
        }
        RunSummary {
            ticks,
            quit,
            phase: self.state.phase,
            score: self.state.score,
            enemies: self.state.enemy_count(),
            wins: self.wins,
            losses: self.losses,
        }
    }
}
