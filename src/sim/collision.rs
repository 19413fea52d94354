//! Collision detection primitives
//!
//! The two tests everything else is built on: AABB overlap for paddle vs
//! power-up, and circle vs AABB for the ball against bricks and the paddle.
//! Pure functions, no game state.

use glam::Vec2;

use super::entity::{Actor, Ball};

/// The four compass directions a collision can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Result of a circle-vs-AABB check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Compass direction best aligned with the contact normal
    pub direction: Direction,
    /// Raw (unnormalized) vector from ball center to the closest point on
    /// the box, used for penetration depth
    pub delta: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            direction: Direction::Up,
            delta: Vec2::ZERO,
        }
    }
}

/// AABB vs AABB overlap test
///
/// Closed intervals on both axes: rectangles that exactly touch count as
/// intersecting.
pub fn box_intersects(one: &Actor, two: &Actor) -> bool {
    debug_assert!(one.size.x > 0.0 && one.size.y > 0.0, "degenerate box");
    debug_assert!(two.size.x > 0.0 && two.size.y > 0.0, "degenerate box");

    let collision_x = one.position.x + one.size.x >= two.position.x
        && two.position.x + two.size.x >= one.position.x;
    let collision_y = one.position.y + one.size.y >= two.position.y
        && two.position.y + two.size.y >= one.position.y;
    collision_x && collision_y
}

/// Circle vs AABB collision check
///
/// Clamps the vector between centers into the box half-extents to find the
/// closest point on the box, then compares its distance to the ball center
/// against the radius. The comparison is strict (`<`, not `<=`): after a
/// resolution pass the ball sits exactly touching the box, and an exact
/// touch must not re-register as a hit.
pub fn ball_box_collision(ball: &Ball, b: &Actor) -> CollisionResult {
    debug_assert!(ball.radius > 0.0, "degenerate ball");
    debug_assert!(b.size.x > 0.0 && b.size.y > 0.0, "degenerate box");

    let center = ball.actor.position + Vec2::splat(ball.radius);
    let half_extents = b.size / 2.0;
    let box_center = b.position + half_extents;

    let difference = center - box_center;
    let clamped = difference.clamp(-half_extents, half_extents);
    // Closest point on the box to the ball center
    let closest = box_center + clamped;
    let difference = closest - center;

    if difference.length() < ball.radius {
        CollisionResult {
            hit: true,
            direction: vector_direction(difference),
            delta: difference,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Compass direction best aligned with `target` (max dot product; ties go
/// to the first of Up, Right, Down, Left)
pub fn vector_direction(target: Vec2) -> Direction {
    // Screen space has +y pointing down, so "up" is -y on screen but the
    // compass here matches the resolver's sign conventions.
    const COMPASS: [(Vec2, Direction); 4] = [
        (Vec2::new(0.0, 1.0), Direction::Up),
        (Vec2::new(1.0, 0.0), Direction::Right),
        (Vec2::new(0.0, -1.0), Direction::Down),
        (Vec2::new(-1.0, 0.0), Direction::Left),
    ];

    let normalized = target.normalize_or_zero();
    let mut max = 0.0;
    let mut best = Direction::Up;
    for (axis, dir) in COMPASS {
        let dot = normalized.dot(axis);
        if dot > max {
            max = dot;
            best = dir;
        }
    }
    best
}
