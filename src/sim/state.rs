//! Game state and core simulation types
//!
//! `GameState` exclusively owns every entity collection. Everything outside
//! the simulation only sees read-only views.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Player, Pickup, Wall};
use super::maze;
use crate::consts::{ENEMY_LIMIT, MUTATION_INTERVAL_SECS, TICK_RATE};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities are being (re)created
    Setup,
    /// Active gameplay; the only phase in which the simulation advances
    Playing,
    /// All pickups collected while the population was below the limit
    Won,
    /// Enemy population hit the limit
    Lost,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Simulation tunables derived from `Settings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Ticks of play between mutation events
    pub mutation_interval_ticks: u32,
    /// Population that loses the game (exact match)
    pub enemy_limit: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mutation_interval_ticks: MUTATION_INTERVAL_SECS * TICK_RATE,
            enemy_limit: ENEMY_LIMIT,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    pub phase: GamePhase,
    /// Pickups collected this session
    pub score: u32,
    /// Pickups placed at setup
    pub total_pickups: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Ticks since the last mutation event
    pub mutation_ticks: u32,
    pub walls: Vec<Wall>,
    pub gate: Vec<Wall>,
    pub pickups: Vec<Pickup>,
    pub player: Player,
    /// Live enemies, sorted by id (creation order)
    pub enemies: Vec<Enemy>,
    /// Next enemy id; only ever grows
    next_id: u32,
}

impl GameState {
    /// Create a session on the compiled-in maze with default tuning
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        let mut state = Self::empty(config);
        state.setup();
        state
    }

    /// A session with no maze, pickups or enemies; the player stands at the
    /// usual spawn. Useful for building custom scenarios.
    pub fn empty(config: SimConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Setup,
            score: 0,
            total_pickups: 0,
            time_ticks: 0,
            mutation_ticks: 0,
            walls: Vec::new(),
            gate: Vec::new(),
            pickups: Vec::new(),
            player: Player::new(maze::PLAYER_SPAWN, maze::PLAYER_SPRITE),
            enemies: Vec::new(),
            next_id: 0,
        }
    }

    /// (Re)create every entity and enter `Playing`
    pub fn setup(&mut self) {
        self.phase = GamePhase::Setup;
        self.score = 0;
        self.time_ticks = 0;
        self.mutation_ticks = 0;
        self.next_id = 0;

        self.player = Player::new(maze::PLAYER_SPAWN, maze::PLAYER_SPRITE);
        self.walls = maze::walls();
        self.gate = maze::gate();
        self.pickups = maze::pickups(&self.walls, &maze::player_spawn_rect());
        self.total_pickups = self.pickups.len() as u32;

        self.enemies.clear();
        for (name, sprite, spawn, script) in maze::enemy_roster() {
            let id = self.next_enemy_id();
            // Staggered release: each ghost waits as many ticks as its index
            self.enemies.push(Enemy::new(id, name, sprite, spawn, script.to_vec(), id));
        }

        log::info!(
            "Session setup: {} walls, {} pickups, {} enemies",
            self.walls.len(),
            self.total_pickups,
            self.enemies.len()
        );
        self.phase = GamePhase::Playing;
    }

    /// Replace the pickup set (and its total) for a custom scenario
    pub fn set_pickups(&mut self, pickups: Vec<Pickup>) {
        self.total_pickups = self.score + pickups.len() as u32;
        self.pickups = pickups;
    }

    /// Allocate a new enemy id
    pub fn next_enemy_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy built by `make` from a freshly allocated id
    pub fn spawn_enemy(&mut self, make: impl FnOnce(u32) -> Enemy) -> u32 {
        let id = self.next_enemy_id();
        self.enemies.push(make(id));
        id
    }

    /// Clone every live enemy once. Clones get fresh ids, start at their
    /// spawn point and have no startup delay. Returns how many were added.
    pub fn mutate(&mut self) -> usize {
        if self.enemies.is_empty() {
            log::debug!("Mutation skipped: no live enemies");
            return 0;
        }

        let before = self.enemies.len();
        let mut clones = Vec::with_capacity(before);
        for enemy in &self.enemies {
            let id = self.next_id;
            self.next_id += 1;
            clones.push(enemy.spawn_clone(id));
        }
        self.enemies.extend(clones);

        log::info!("Mutation: {} -> {} enemies", before, self.enemies.len());
        before
    }

    /// Remove an enemy by id
    pub fn capture(&mut self, id: u32) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        let enemy = self.enemies.remove(index);
        log::debug!("Captured {} (id {}), {} left", enemy.name, enemy.id, self.enemies.len());
        Some(enemy)
    }

    pub fn remaining_pickups(&self) -> usize {
        self.pickups.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// All pickups gone while the population is below the limit
    pub fn is_won(&self) -> bool {
        self.pickups.is_empty() && self.enemies.len() < self.config.enemy_limit
    }

    /// Population exactly at the limit. An overshoot past the limit does not
    /// count as a loss.
    pub fn is_lost(&self) -> bool {
        self.enemies.len() == self.config.enemy_limit
    }

    pub fn player_pos(&self) -> IVec2 {
        self.player.body.pos()
    }

    /// Ensure enemies are sorted by id for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::maze::{ENEMY_COUNT, PLAYER_SPAWN};

    #[test]
    fn test_setup() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemy_count(), ENEMY_COUNT);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_pickups as usize, state.remaining_pickups());
        assert_eq!(state.player_pos(), PLAYER_SPAWN);
        assert_eq!(state.gate.len(), 1);

        let waits: Vec<_> = state.enemies.iter().map(|e| e.wait).collect();
        assert_eq!(waits, vec![0, 1, 2, 3]);
        let ids: Vec<_> = state.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_mutation_doubles_with_unique_ids() {
        let mut state = GameState::new();
        assert_eq!(state.mutate(), 4);
        assert_eq!(state.enemy_count(), 8);

        let ids: Vec<_> = state.enemies.iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for clone in &state.enemies[4..] {
            assert_eq!(clone.wait, 0);
            let original = &state.enemies[(clone.id - 4) as usize];
            assert_eq!(clone.name, original.name);
            assert_eq!(clone.body.spawn, original.body.spawn);
            assert_eq!(clone.script, original.script);
        }
    }

    #[test]
    fn test_mutation_on_empty_registry_is_noop() {
        let mut state = GameState::empty(SimConfig::default());
        assert_eq!(state.mutate(), 0);
        assert_eq!(state.enemy_count(), 0);
    }

    #[test]
    fn test_ids_never_reused_after_capture() {
        let mut state = GameState::new();
        // Capture the highest id, then mutate
        assert!(state.capture(3).is_some());
        state.mutate();
        let ids: Vec<_> = state.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 4, 5, 6]);
        assert!(state.capture(3).is_none());
    }

    #[test]
    fn test_loss_is_exact_match() {
        let mut state = GameState::new();
        while state.enemy_count() < 127 {
            let last = state.enemies[0].clone();
            state.spawn_enemy(|id| last.spawn_clone(id));
        }
        assert!(!state.is_lost());
        let last = state.enemies[0].clone();
        state.spawn_enemy(|id| last.spawn_clone(id));
        assert_eq!(state.enemy_count(), 128);
        assert!(state.is_lost());
        state.spawn_enemy(|id| last.spawn_clone(id));
        assert!(!state.is_lost());
    }

    #[test]
    fn test_win_requires_empty_pickups_and_small_population() {
        let mut state = GameState::new();
        assert!(!state.is_won());
        state.set_pickups(Vec::new());
        assert!(state.is_won());

        state.config.enemy_limit = 4;
        assert!(!state.is_won());
        assert!(state.is_lost());
    }

    #[test]
    fn test_setup_resets_session() {
        let mut state = GameState::new();
        state.mutate();
        state.score = 5;
        state.pickups.truncate(3);
        state.setup();
        assert_eq!(state.enemy_count(), 4);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_pickups as usize, state.remaining_pickups());
        assert_eq!(state.enemies.last().map(|e| e.id), Some(3));
    }
}
