//! Fixed timestep simulation tick
//!
//! Each tick first drains the queued input events in arrival order, then
//! (while playing) advances the simulation one step and checks win/loss.

use serde::{Deserialize, Serialize};

use super::collision::{MoveResult, first_overlap};
use super::entity::Direction;
use super::state::{GamePhase, GameState};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Dir(Direction),
    /// Quit (from any phase)
    Escape,
    /// Restart after a win or loss
    Confirm,
}

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Externally triggered mutation, in addition to the scheduled one
    Mutate,
}

/// Input events for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn press(dir: Direction) -> Self {
        Self::new([InputEvent::KeyDown(Key::Dir(dir))])
    }

    pub fn release(dir: Direction) -> Self {
        Self::new([InputEvent::KeyUp(Key::Dir(dir))])
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A quit was requested; nothing after it was processed
    pub quit: bool,
    /// Id of the enemy captured by the player this tick
    pub captured: Option<u32>,
    /// Pickups collected this tick
    pub collected: u32,
    /// Enemies added by mutation this tick
    pub spawned: usize,
    /// The session was restarted this tick
    pub restarted: bool,
    /// How the player's move was resolved
    pub player_move: MoveResult,
    /// Enemies whose whole move was reverted by walls
    pub enemies_blocked: usize,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    for event in &input.events {
        if handle_event(state, *event, &mut report) {
            log::info!("Quit requested");
            report.quit = true;
            return report;
        }
    }

    if state.phase != GamePhase::Playing {
        return report;
    }

    // Player moves first; the gate only blocks the player
    report.player_move = state.player.body.resolve(&state.walls, &state.gate);

    let player_box = state.player.body.rect;
    if let Some(id) = first_overlap(&player_box, &state.enemies).map(|e| e.id) {
        state.capture(id);
        report.captured = Some(id);
    }

    for enemy in &mut state.enemies {
        enemy.advance_script();
        if enemy.body.resolve(&state.walls, &[]).fully_blocked() {
            report.enemies_blocked += 1;
        }
    }

    let before = state.pickups.len();
    for pickup in &mut state.pickups {
        if pickup.rect.overlaps(&player_box) {
            pickup.collected = true;
        }
    }
    state.pickups.retain(|p| !p.collected);
    report.collected = (before - state.pickups.len()) as u32;
    state.score += report.collected;

    state.time_ticks += 1;
    state.mutation_ticks += 1;
    if state.mutation_ticks >= state.config.mutation_interval_ticks {
        state.mutation_ticks = 0;
        report.spawned += state.mutate();
    }

    state.normalize_order();
    update_phase(state);
    report
}

/// Apply one event. Returns true if the session should quit.
fn handle_event(state: &mut GameState, event: InputEvent, report: &mut TickReport) -> bool {
    match (state.phase, event) {
        (_, InputEvent::Quit) => true,
        (_, InputEvent::KeyDown(Key::Escape)) => true,
        (GamePhase::Playing, InputEvent::KeyDown(Key::Dir(dir))) => {
            state.player.press(dir);
            false
        }
        (GamePhase::Playing, InputEvent::KeyUp(Key::Dir(dir))) => {
            state.player.release(dir);
            false
        }
        (GamePhase::Playing, InputEvent::Mutate) => {
            report.spawned += state.mutate();
            false
        }
        (phase, InputEvent::KeyDown(Key::Confirm)) if phase.is_over() => {
            log::info!("Restarting session");
            state.setup();
            report.restarted = true;
            false
        }
        _ => false,
    }
}

/// Move to `Won`/`Lost` when their predicates hold
fn update_phase(state: &mut GameState) {
    if state.is_won() {
        state.phase = GamePhase::Won;
        log::info!("Session won: score {} with {} enemies", state.score, state.enemy_count());
    } else if state.is_lost() {
        state.phase = GamePhase::Lost;
        log::info!("Session lost: {} enemies", state.enemy_count());
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::sim::collision::any_overlap;
    use crate::sim::state::SimConfig;

    fn movement_event() -> impl Strategy<Value = Option<InputEvent>> {
        let dir = proptest::sample::select(Direction::ALL.to_vec());
        prop_oneof![
            2 => Just(None),
            2 => dir.clone().prop_map(|d| Some(InputEvent::KeyDown(Key::Dir(d)))),
            1 => dir.prop_map(|d| Some(InputEvent::KeyUp(Key::Dir(d)))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn player_never_inside_wall(events in proptest::collection::vec(movement_event(), 1..200)) {
            let mut state = GameState::new();
            for event in events {
                tick(&mut state, &TickInput::new(event));
                prop_assert!(!any_overlap(&state.player.body.rect, &state.walls));
            }
        }

        #[test]
        fn score_and_population_bookkeeping(
            events in proptest::collection::vec(movement_event(), 1..200),
            interval in 1u32..40,
        ) {
            let config = SimConfig { mutation_interval_ticks: interval, ..Default::default() };
            let mut state = GameState::with_config(config);
            let total = state.total_pickups;

            for event in events {
                // Past the limit the population doubles unchecked
                if state.phase != GamePhase::Playing || state.enemy_count() > 256 {
                    break;
                }
                let pickups_before = state.remaining_pickups();
                let enemies_before = state.enemy_count();

                let report = tick(&mut state, &TickInput::new(event));

                prop_assert!(state.remaining_pickups() <= pickups_before);
                prop_assert_eq!(state.score + state.remaining_pickups() as u32, total);
                let survivors = enemies_before - usize::from(report.captured.is_some());
                // Mutation clones the survivors of the capture
                let mutated = state.mutation_ticks == 0;
                let expected = if mutated { survivors * 2 } else { survivors };
                prop_assert_eq!(state.enemy_count(), expected);
                prop_assert_eq!(report.spawned, if mutated { survivors } else { 0 });
            }
        }

        #[test]
        fn enemy_paths_depend_only_on_tick_count(n in 0usize..200) {
            let mut a = GameState::new();
            let mut b = GameState::new();
            for _ in 0..n {
                tick(&mut a, &TickInput::default());
            }
            for _ in 0..n {
                tick(&mut b, &TickInput::default());
            }
            let pos_a: Vec<_> = a.enemies.iter().map(|e| (e.id, e.body.pos())).collect();
            let pos_b: Vec<_> = b.enemies.iter().map(|e| (e.id, e.body.pos())).collect();
            prop_assert_eq!(pos_a, pos_b);
        }
    }
}
