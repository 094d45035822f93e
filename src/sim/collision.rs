//! Collision queries and axis-separated movement resolution
//!
//! Actors move on one axis at a time: X first, then Y. A blocked axis is
//! reverted on its own, which lets an actor slide along a wall when the
//! diagonal move would have collided.

use glam::IVec2;

use super::rect::Rect;

/// Anything with a bounding box
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    #[inline]
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Strict axis-aligned box intersection
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Whether `rect` overlaps any item in `items`
pub fn any_overlap<'a, T, I>(rect: &Rect, items: I) -> bool
where
    T: Bounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().any(|item| rect.overlaps(&item.bounds()))
}

/// First item (in iteration order) that overlaps `rect`
pub fn first_overlap<'a, T, I>(rect: &Rect, items: I) -> Option<&'a T>
where
    T: Bounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().find(|item| rect.overlaps(&item.bounds()))
}

/// Outcome of a single resolved move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// X component was reverted by a wall
    pub blocked_x: bool,
    /// Y component was reverted by a wall
    pub blocked_y: bool,
    /// Whole move was reverted by the gate
    pub gated: bool,
    /// Body ended somewhere other than where it started
    pub moved: bool,
}

impl MoveResult {
    /// The body wanted to move but ended where it started
    pub fn fully_blocked(&self) -> bool {
        !self.moved && (self.blocked_x || self.blocked_y || self.gated)
    }
}

/// Move `body` by `vel`, resolving X then Y against `walls`.
///
/// When `gate` is non-empty and the resolved box overlaps it, the body goes
/// back to its pre-move position on both axes.
pub fn resolve_move<W: Bounded>(body: &mut Rect, vel: IVec2, walls: &[W], gate: &[W]) -> MoveResult {
    let origin = body.pos();
    let mut result = MoveResult::default();

    body.x = origin.x + vel.x;
    if any_overlap(body, walls) {
        body.x = origin.x;
        result.blocked_x = vel.x != 0;
    }

    body.y = origin.y + vel.y;
    if any_overlap(body, walls) {
        body.y = origin.y;
        result.blocked_y = vel.y != 0;
    }

    if !gate.is_empty() && any_overlap(body, gate) {
        *body = body.at(origin);
        result.gated = true;
    }

    result.moved = body.pos() != origin;
    result
}
