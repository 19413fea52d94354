//! Game entities: the shared actor transform plus ball and power-up
//! specializations
//!
//! There is no dispatch hierarchy here; `Ball` and `PowerUp` embed an
//! `Actor` and add their own fields. Drawing is a free function over
//! whatever actor is handed to it (see `render`).

use glam::{Vec2, Vec3};

use crate::consts::*;
use crate::render::SpriteId;

/// State shared by every positioned, rendered entity: paddle, bricks,
/// ball and power-ups all carry one of these.
#[derive(Debug, Clone)]
pub struct Actor {
    pub position: Vec2,
    /// Width/height in pixels; components must stay positive
    pub size: Vec2,
    pub velocity: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Tint color applied to the sprite
    pub color: Vec3,
    /// Opaque handle to the visual resource
    pub sprite: SpriteId,
    pub solid: bool,
    /// Logical tombstone; the entity stays in its collection until swept
    pub destroyed: bool,
}

impl Actor {
    pub fn new(position: Vec2, size: Vec2, sprite: SpriteId) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "actor size must be positive");
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            color: Vec3::ONE,
            sprite,
            solid: false,
            destroyed: false,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }
}

/// The ball
///
/// While `stuck` is true the ball rides the paddle: `advance` is a no-op
/// and the session slaves its position to the paddle each frame.
#[derive(Debug, Clone)]
pub struct Ball {
    pub actor: Actor,
    pub radius: f32,
    /// Riding on the paddle, waiting for release
    pub stuck: bool,
    /// Re-stick to the paddle on contact (sticky power-up)
    pub sticky: bool,
    /// Skip collision response on non-solid bricks (pass-through power-up)
    pub pass_through: bool,
}

impl Ball {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        let actor = Actor::new(position, Vec2::splat(radius * 2.0), SpriteId::Face)
            .with_velocity(velocity);
        Self {
            actor,
            radius,
            stuck: true,
            sticky: false,
            pass_through: false,
        }
    }

    /// Move the ball, reflecting off the left/right/top window edges and
    /// snapping back inside. The bottom edge is deliberately open; falling
    /// past it is the loss condition and is detected by the session.
    pub fn advance(&mut self, dt: f32, window_width: f32) {
        if self.stuck {
            return;
        }
        self.actor.position += self.actor.velocity * dt;

        if self.actor.position.x <= 0.0 {
            self.actor.velocity.x = -self.actor.velocity.x;
            self.actor.position.x = 0.0;
        } else if self.actor.position.x + self.actor.size.x >= window_width {
            self.actor.velocity.x = -self.actor.velocity.x;
            self.actor.position.x = window_width - self.actor.size.x;
        }
        if self.actor.position.y <= 0.0 {
            self.actor.velocity.y = -self.actor.velocity.y;
            self.actor.position.y = 0.0;
        }
    }

    /// Put the ball back on the paddle and clear transient power-up state
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.actor.position = position;
        self.actor.velocity = velocity;
        self.stuck = true;
        self.sticky = false;
        self.pass_through = false;
    }
}

/// Power-up kinds, rolled independently when a brick is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Speed,
    Sticky,
    PassThrough,
    PadSizeIncrease,
    Confuse,
    Chaos,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Speed,
        PowerUpKind::Sticky,
        PowerUpKind::PassThrough,
        PowerUpKind::PadSizeIncrease,
        PowerUpKind::Confuse,
        PowerUpKind::Chaos,
    ];

    /// One-in-N spawn odds; the negative kinds drop more often
    pub fn spawn_chance(self) -> u32 {
        match self {
            PowerUpKind::Speed
            | PowerUpKind::Sticky
            | PowerUpKind::PassThrough
            | PowerUpKind::PadSizeIncrease => 75,
            PowerUpKind::Confuse | PowerUpKind::Chaos => 15,
        }
    }

    /// Effect duration in seconds; 0 means instantaneous
    pub fn duration(self) -> f32 {
        match self {
            PowerUpKind::Speed | PowerUpKind::PadSizeIncrease => 0.0,
            PowerUpKind::Sticky => 20.0,
            PowerUpKind::PassThrough => 10.0,
            PowerUpKind::Confuse | PowerUpKind::Chaos => 15.0,
        }
    }

    /// Capsule tint
    pub fn color(self) -> Vec3 {
        match self {
            PowerUpKind::Speed => Vec3::new(0.5, 0.5, 1.0),
            PowerUpKind::Sticky => Vec3::new(1.0, 0.5, 1.0),
            PowerUpKind::PassThrough => Vec3::new(0.5, 1.0, 0.5),
            PowerUpKind::PadSizeIncrease => Vec3::new(1.0, 0.6, 0.4),
            PowerUpKind::Confuse => Vec3::new(1.0, 0.3, 0.3),
            PowerUpKind::Chaos => Vec3::new(0.9, 0.25, 0.25),
        }
    }

    pub fn sprite(self) -> SpriteId {
        match self {
            PowerUpKind::Speed => SpriteId::PowerUpSpeed,
            PowerUpKind::Sticky => SpriteId::PowerUpSticky,
            PowerUpKind::PassThrough => SpriteId::PowerUpPassThrough,
            PowerUpKind::PadSizeIncrease => SpriteId::PowerUpIncrease,
            PowerUpKind::Confuse => SpriteId::PowerUpConfuse,
            PowerUpKind::Chaos => SpriteId::PowerUpChaos,
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub actor: Actor,
    pub kind: PowerUpKind,
    /// Seconds of effect remaining once activated
    pub duration: f32,
    pub activated: bool,
}

impl PowerUp {
    /// Spawn a capsule at a destroyed brick's position
    pub fn new(kind: PowerUpKind, position: Vec2) -> Self {
        let actor = Actor::new(position, POWERUP_SIZE, kind.sprite())
            .with_color(kind.color())
            .with_velocity(POWERUP_VELOCITY);
        Self {
            actor,
            kind,
            duration: kind.duration(),
            activated: false,
        }
    }
}
