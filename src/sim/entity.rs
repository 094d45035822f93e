//! Entities: walls, pickups, the player and scripted enemies
//!
//! Player and enemies share the `Movable` capability (box + velocity +
//! wall resolution); each layers its own controller on top.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounded, MoveResult, resolve_move};
use super::rect::Rect;
use crate::consts::{CELL_SIZE, PICKUP_SIZE, SPRITE_SIZE};

/// Enemy name whose script loops back to `LOOP_BACK_INDEX` instead of 0
pub const LOOP_BACK_NAME: &str = "Clyde";
/// Script index the looping variant restarts from
pub const LOOP_BACK_INDEX: usize = 2;

/// A static maze wall (the gate is also a `Wall`, kept in its own list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

impl Bounded for Wall {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A collectible dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub rect: Rect,
    pub collected: bool,
}

impl Pickup {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::square(x, y, PICKUP_SIZE),
            collected: false,
        }
    }
}

impl Bounded for Pickup {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Cardinal input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// One grid cell in this direction
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -CELL_SIZE),
            Direction::Down => IVec2::new(0, CELL_SIZE),
            Direction::Left => IVec2::new(-CELL_SIZE, 0),
            Direction::Right => IVec2::new(CELL_SIZE, 0),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 4,
            Direction::Right => 8,
        }
    }
}

/// Shared movement capability: a box with a velocity, resolved against walls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movable {
    pub rect: Rect,
    /// Velocity applied each tick
    pub vel: IVec2,
    /// Velocity captured by the last `remember_velocity` call
    pub prev_vel: IVec2,
    /// Where this actor was created
    pub spawn: IVec2,
}

impl Movable {
    pub fn new(spawn: IVec2, size: i32) -> Self {
        Self {
            rect: Rect::square(spawn.x, spawn.y, size),
            vel: IVec2::ZERO,
            prev_vel: IVec2::ZERO,
            spawn,
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.rect.pos()
    }

    /// Snapshot the current velocity into `prev_vel`
    pub fn remember_velocity(&mut self) {
        self.prev_vel = self.vel;
    }

    /// Apply velocity against `walls` (X then Y), then the optional `gate`
    pub fn resolve(&mut self, walls: &[Wall], gate: &[Wall]) -> MoveResult {
        resolve_move(&mut self.rect, self.vel, walls, gate)
    }
}

/// The player-controlled avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub body: Movable,
    /// Opaque renderer identifier
    pub sprite: String,
    /// Currently held directions (bitmask), used to ignore key repeat
    held: u8,
}

impl Player {
    pub fn new(spawn: IVec2, sprite: impl Into<String>) -> Self {
        Self {
            body: Movable::new(spawn, SPRITE_SIZE),
            sprite: sprite.into(),
            held: 0,
        }
    }

    /// Add `delta` to the velocity. Never looks at walls.
    pub fn move_by(&mut self, delta: IVec2) {
        self.body.vel += delta;
    }

    /// Key-down edge. A repeat for an already-held direction is ignored.
    /// Returns whether the velocity changed.
    pub fn press(&mut self, dir: Direction) -> bool {
        if self.is_held(dir) {
            return false;
        }
        self.held |= dir.bit();
        self.move_by(dir.vector());
        true
    }

    /// Key-up edge. Releasing a direction that was never pressed is ignored.
    pub fn release(&mut self, dir: Direction) -> bool {
        if !self.is_held(dir) {
            return false;
        }
        self.held &= !dir.bit();
        self.move_by(-dir.vector());
        true
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held & dir.bit() != 0
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        self.body.rect
    }
}

/// One leg of an enemy script: velocity `(dx, dy)` held for `duration` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub dx: i32,
    pub dy: i32,
    pub duration: u32,
}

impl ScriptStep {
    pub const fn new(dx: i32, dy: i32, duration: u32) -> Self {
        Self { dx, dy, duration }
    }

    #[inline]
    pub fn vector(&self) -> IVec2 {
        IVec2::new(self.dx, self.dy)
    }
}

/// A ghost following a fixed movement script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique within a session, never reused
    pub id: u32,
    pub name: String,
    /// Opaque renderer identifier
    pub sprite: String,
    pub body: Movable,
    pub script: Vec<ScriptStep>,
    /// Current script leg
    pub turn: usize,
    /// Ticks spent in the current leg
    pub steps: u32,
    /// Ticks left before the script starts
    pub wait: u32,
}

impl Enemy {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        sprite: impl Into<String>,
        spawn: IVec2,
        script: Vec<ScriptStep>,
        wait: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sprite: sprite.into(),
            body: Movable::new(spawn, SPRITE_SIZE),
            script,
            turn: 0,
            steps: 0,
            wait,
        }
    }

    /// Fresh copy at the original spawn with a new id and no startup delay
    pub fn spawn_clone(&self, id: u32) -> Self {
        Self::new(id, self.name.clone(), self.sprite.clone(), self.body.spawn, self.script.clone(), 0)
    }

    /// Where the script goes after its last leg
    fn loop_index(&self) -> usize {
        if self.name == LOOP_BACK_NAME {
            LOOP_BACK_INDEX.min(self.script.len().saturating_sub(1))
        } else {
            0
        }
    }

    /// Advance the script by one tick and update velocity.
    ///
    /// While `wait > 0` the counter is decremented and velocity is left alone.
    pub fn advance_script(&mut self) {
        if self.wait > 0 {
            self.wait -= 1;
            return;
        }
        let Some(step) = self.script.get(self.turn) else {
            return;
        };

        if self.steps < step.duration {
            self.steps += 1;
        } else {
            self.steps = 0;
            if self.turn + 1 < self.script.len() {
                self.turn += 1;
            } else {
                self.turn = self.loop_index();
            }
        }
        self.body.vel = self.script[self.turn].vector();
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        self.body.rect
    }
}
