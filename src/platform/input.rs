//! Input event sources

use std::collections::BTreeMap;

use crate::sim::{Direction, InputEvent, Key};

/// Polled once per tick; returns every event queued since the last poll,
/// in arrival order
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Deterministic input: events scheduled against poll counts
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    schedule: BTreeMap<u64, Vec<InputEvent>>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for delivery on poll number `at` (0-based)
    pub fn at(mut self, at: u64, event: InputEvent) -> Self {
        self.schedule.entry(at).or_default().push(event);
        self
    }

    /// Hold `dir` from poll `from` until poll `until` (key up delivered then)
    pub fn hold(self, dir: Direction, from: u64, until: u64) -> Self {
        self.at(from, InputEvent::KeyDown(Key::Dir(dir)))
            .at(until, InputEvent::KeyUp(Key::Dir(dir)))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let events = self.schedule.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

/// Endless walk: each direction of `route` is held for `leg` polls, in order,
/// looping forever
#[derive(Debug, Clone)]
pub struct PatrolInput {
    route: Vec<Direction>,
    leg: u64,
    polls: u64,
}

impl PatrolInput {
    pub fn new(route: &[Direction], leg: u64) -> Self {
        Self {
            route: route.to_vec(),
            leg: leg.max(1),
            polls: 0,
        }
    }

    fn dir_at(&self, leg_index: u64) -> Direction {
        self.route[(leg_index % self.route.len() as u64) as usize]
    }
}

impl InputSource for PatrolInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let poll = self.polls;
        self.polls += 1;
        if self.route.is_empty() || !poll.is_multiple_of(self.leg) {
            return Vec::new();
        }

        let leg_index = poll / self.leg;
        let mut events = Vec::with_capacity(2);
        if leg_index > 0 {
            events.push(InputEvent::KeyUp(Key::Dir(self.dir_at(leg_index - 1))));
        }
        events.push(InputEvent::KeyDown(Key::Dir(self.dir_at(leg_index))));
        events
    }
}
