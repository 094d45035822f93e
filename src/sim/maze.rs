//! Compiled-in maze layout
//!
//! Walls are `(x, y, width, height)` boxes on a 606x606 screen. The ghost
//! house sits in the middle with a thin gate on top that only the player
//! is blocked by.

use glam::IVec2;

use super::entity::{Pickup, ScriptStep, Wall};
use super::rect::Rect;
use crate::consts::{CELL_SIZE, PICKUP_SIZE, SPRITE_SIZE};

pub const WALLS: [Wall; 38] = [
    Wall::new(0, 0, 6, 600),
    Wall::new(0, 0, 600, 6),
    Wall::new(0, 600, 606, 6),
    Wall::new(600, 0, 6, 606),
    Wall::new(300, 0, 6, 66),
    Wall::new(60, 60, 186, 6),
    Wall::new(360, 60, 186, 6),
    Wall::new(60, 120, 66, 6),
    Wall::new(60, 120, 6, 126),
    Wall::new(180, 120, 246, 6),
    Wall::new(300, 120, 6, 66),
    Wall::new(480, 120, 66, 6),
    Wall::new(540, 120, 6, 126),
    Wall::new(120, 180, 126, 6),
    Wall::new(120, 180, 6, 126),
    Wall::new(360, 180, 126, 6),
    Wall::new(480, 180, 6, 126),
    Wall::new(180, 240, 6, 126),
    Wall::new(180, 360, 246, 6),
    Wall::new(420, 240, 6, 126),
    Wall::new(240, 240, 42, 6),
    Wall::new(324, 240, 42, 6),
    Wall::new(240, 240, 6, 66),
    Wall::new(240, 300, 126, 6),
    Wall::new(360, 240, 6, 66),
    Wall::new(0, 300, 66, 6),
    Wall::new(540, 300, 66, 6),
    Wall::new(60, 360, 66, 6),
    Wall::new(60, 360, 6, 186),
    Wall::new(480, 360, 66, 6),
    Wall::new(540, 360, 6, 186),
    Wall::new(120, 420, 366, 6),
    Wall::new(120, 420, 6, 66),
    Wall::new(480, 420, 6, 66),
    Wall::new(180, 480, 246, 6),
    Wall::new(300, 480, 6, 66),
    Wall::new(120, 540, 126, 6),
    Wall::new(360, 540, 126, 6),
];

/// Ghost house door
pub const GATE: Wall = Wall::new(282, 242, 42, 2);

/// Pickup grid is `GRID_CELLS x GRID_CELLS`
pub const GRID_CELLS: i32 = 19;
/// Pickup grid origin offset inside a cell
pub const GRID_OFFSET: i32 = 32;
/// Rows and columns reserved around the ghost house
pub const EXCLUDED_ROWS: [i32; 2] = [7, 8];
pub const EXCLUDED_COLUMNS: [i32; 3] = [8, 9, 10];

const CENTER_X: i32 = 303 - 16;
const INKY_X: i32 = 303 - 16 - 32;
const CLYDE_X: i32 = 303 + (32 - 16);
const HOUSE_Y: i32 = 4 * 60 + 19;
const BLINKY_Y: i32 = 3 * 60 + 19;
const PLAYER_Y: i32 = 7 * 60 + 19;

pub const PLAYER_SPAWN: IVec2 = IVec2::new(CENTER_X, PLAYER_Y);
pub const PLAYER_SPRITE: &str = "pacman";

pub const ENEMY_COUNT: usize = 4;
pub const ENEMY_NAMES: [&str; ENEMY_COUNT] = ["Blinky", "Pinky", "Inky", "Clyde"];
pub const ENEMY_SPRITES: [&str; ENEMY_COUNT] = ["enemy0", "enemy1", "enemy2", "enemy3"];
pub const ENEMY_SPAWNS: [IVec2; ENEMY_COUNT] = [
    IVec2::new(CENTER_X, BLINKY_Y),
    IVec2::new(CENTER_X, HOUSE_Y),
    IVec2::new(INKY_X, HOUSE_Y),
    IVec2::new(CLYDE_X, HOUSE_Y),
];

const fn s(dx: i32, dy: i32, duration: u32) -> ScriptStep {
    ScriptStep::new(dx, dy, duration)
}

pub const BLINKY_SCRIPT: &[ScriptStep] = &[
    s(0, -15, 4),
    s(15, 0, 9),
    s(0, 15, 11),
    s(15, 0, 3),
    s(0, 15, 7),
    s(-15, 0, 11),
    s(0, 15, 3),
    s(15, 0, 15),
    s(0, -15, 15),
    s(15, 0, 3),
    s(0, -15, 11),
    s(-15, 0, 3),
    s(0, -15, 11),
    s(-15, 0, 3),
    s(0, -15, 3),
    s(-15, 0, 7),
    s(0, -15, 3),
    s(15, 0, 15),
    s(0, 15, 15),
    s(-15, 0, 3),
    s(0, 15, 3),
    s(-15, 0, 3),
    s(0, -15, 7),
    s(-15, 0, 3),
    s(0, 15, 7),
    s(-15, 0, 11),
    s(0, -15, 7),
    s(15, 0, 5),
];

pub const PINKY_SCRIPT: &[ScriptStep] = &[
    s(0, -30, 4),
    s(15, 0, 9),
    s(0, 15, 11),
    s(-15, 0, 23),
    s(0, 15, 7),
    s(15, 0, 3),
    s(0, -15, 3),
    s(15, 0, 19),
    s(0, 15, 3),
    s(15, 0, 3),
    s(0, 15, 3),
    s(15, 0, 3),
    s(0, -15, 15),
    s(-15, 0, 7),
    s(0, 15, 3),
    s(-15, 0, 19),
    s(0, -15, 11),
    s(15, 0, 9),
];

pub const INKY_SCRIPT: &[ScriptStep] = &[
    s(30, 0, 2),
    s(0, -15, 4),
    s(15, 0, 10),
    s(0, 15, 7),
    s(15, 0, 3),
    s(0, -15, 3),
    s(15, 0, 3),
    s(0, -15, 15),
    s(-15, 0, 15),
    s(0, 15, 3),
    s(15, 0, 15),
    s(0, 15, 11),
    s(-15, 0, 3),
    s(0, -15, 7),
    s(-15, 0, 11),
    s(0, 15, 3),
    s(-15, 0, 11),
    s(0, 15, 7),
    s(-15, 0, 3),
    s(0, -15, 3),
    s(-15, 0, 3),
    s(0, -15, 15),
    s(15, 0, 15),
    s(0, 15, 3),
    s(-15, 0, 15),
    s(0, 15, 11),
    s(15, 0, 3),
    s(0, -15, 11),
    s(15, 0, 11),
    s(0, 15, 3),
    s(15, 0, 1),
];

pub const CLYDE_SCRIPT: &[ScriptStep] = &[
    s(-30, 0, 2),
    s(0, -15, 4),
    s(15, 0, 5),
    s(0, 15, 7),
    s(-15, 0, 11),
    s(0, -15, 7),
    s(-15, 0, 3),
    s(0, 15, 7),
    s(-15, 0, 7),
    s(0, 15, 15),
    s(15, 0, 15),
    s(0, -15, 3),
    s(-15, 0, 11),
    s(0, -15, 7),
    s(15, 0, 3),
    s(0, -15, 11),
    s(15, 0, 9),
];

pub const ENEMY_SCRIPTS: [&[ScriptStep]; ENEMY_COUNT] =
    [BLINKY_SCRIPT, PINKY_SCRIPT, INKY_SCRIPT, CLYDE_SCRIPT];

/// Initial enemy roster: `(name, sprite, spawn, script)` in creation order
pub fn enemy_roster() -> impl Iterator<Item = (&'static str, &'static str, IVec2, &'static [ScriptStep])> {
    (0..ENEMY_COUNT).map(|i| (ENEMY_NAMES[i], ENEMY_SPRITES[i], ENEMY_SPAWNS[i], ENEMY_SCRIPTS[i]))
}

pub fn walls() -> Vec<Wall> {
    WALLS.to_vec()
}

pub fn gate() -> Vec<Wall> {
    vec![GATE]
}

/// Top-left corner of the pickup in grid cell `(column, row)`
pub fn grid_cell(column: i32, row: i32) -> IVec2 {
    IVec2::new(CELL_SIZE * column + GRID_OFFSET, CELL_SIZE * row + GRID_OFFSET)
}

fn is_excluded(column: i32, row: i32) -> bool {
    EXCLUDED_ROWS.contains(&row) && EXCLUDED_COLUMNS.contains(&column)
}

/// Place pickups on every grid cell that is outside the exclusion zone and
/// clear of `walls` and the player's spawn box
pub fn pickups(walls: &[Wall], player_spawn: &Rect) -> Vec<Pickup> {
    let mut out = Vec::new();
    for row in 0..GRID_CELLS {
        for column in 0..GRID_CELLS {
            if is_excluded(column, row) {
                continue;
            }
            let pos = grid_cell(column, row);
            let pickup = Pickup::new(pos.x, pos.y);
            let blocked = walls.iter().any(|w| w.rect.overlaps(&pickup.rect));
            if blocked || player_spawn.overlaps(&pickup.rect) {
                continue;
            }
            out.push(pickup);
        }
    }
    debug_assert!(out.iter().all(|p| p.rect.width == PICKUP_SIZE));
    out
}

/// Player spawn box
pub fn player_spawn_rect() -> Rect {
    Rect::square(PLAYER_SPAWN.x, PLAYER_SPAWN.y, SPRITE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_clear_of_walls() {
        let walls = walls();
        let player = player_spawn_rect();
        assert!(!walls.iter().any(|w| w.rect.overlaps(&player)));
        for spawn in ENEMY_SPAWNS {
            let r = Rect::square(spawn.x, spawn.y, SPRITE_SIZE);
            assert!(!walls.iter().any(|w| w.rect.overlaps(&r)), "enemy spawn {spawn} inside a wall");
        }
    }

    #[test]
    fn test_pickup_grid_honours_exclusions() {
        let walls = walls();
        let player = player_spawn_rect();
        let pickups = pickups(&walls, &player);

        assert!(!pickups.is_empty());
        assert!(pickups.len() < (GRID_CELLS * GRID_CELLS) as usize);
        for p in &pickups {
            assert!(!walls.iter().any(|w| w.rect.overlaps(&p.rect)));
            assert!(!player.overlaps(&p.rect));
        }
        for row in EXCLUDED_ROWS {
            for column in EXCLUDED_COLUMNS {
                let pos = grid_cell(column, row);
                assert!(!pickups.iter().any(|p| p.rect.pos() == pos));
            }
        }
    }

    #[test]
    fn test_roster_order() {
        let names: Vec<_> = enemy_roster().map(|(name, ..)| name).collect();
        assert_eq!(names, ENEMY_NAMES.to_vec());
        assert_eq!(ENEMY_SCRIPTS[3].len(), CLYDE_SCRIPT.len());
    }

    #[test]
    fn test_gate_sits_on_house_gap() {
        // Gate spans the opening between the two top house walls
        assert_eq!(GATE.rect.x, 282);
        assert_eq!(GATE.rect.right(), 324);
    }
}
