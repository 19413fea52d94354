//! Renderer-facing contracts
//!
//! The simulation never issues graphics calls. It describes what to draw
//! through `SpriteRenderer::draw_sprite` and toggles post-processing flags
//! on a `PostFx`; the platform layer owns textures, shaders and passes.

use glam::{Vec2, Vec3};

use crate::sim::state::GameSession;

/// Opaque handles to the visual resources the platform layer loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Background,
    Face,
    Block,
    BlockSolid,
    Paddle,
    Particle,
    PowerUpSpeed,
    PowerUpSticky,
    PowerUpPassThrough,
    PowerUpIncrease,
    PowerUpConfuse,
    PowerUpChaos,
}

/// What the simulation needs from a renderer
pub trait SpriteRenderer {
    fn draw_sprite(
        &mut self,
        sprite: SpriteId,
        position: Vec2,
        size: Vec2,
        rotation_degrees: f32,
        color: Vec3,
    );
}

/// Post-processing flags the simulation toggles
///
/// Confuse and chaos are full-screen distortion effects and are mutually
/// exclusive; the session enforces that when activating power-ups. How any
/// of these are rendered is the platform layer's business.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostFx {
    pub shake: bool,
    pub confuse: bool,
    pub chaos: bool,
}

/// Draw one actor
pub fn draw_actor(actor: &crate::sim::entity::Actor, renderer: &mut dyn SpriteRenderer) {
    renderer.draw_sprite(
        actor.sprite,
        actor.position,
        actor.size,
        actor.rotation,
        actor.color,
    );
}

/// Draw the whole scene in back-to-front order: background, live bricks,
/// paddle, falling power-ups, particle trail, ball. Text overlays (lives,
/// menu prompts) are the platform layer's job.
pub fn draw_session(session: &GameSession, renderer: &mut dyn SpriteRenderer) {
    renderer.draw_sprite(
        SpriteId::Background,
        Vec2::ZERO,
        Vec2::new(session.width, session.height),
        0.0,
        Vec3::ONE,
    );

    for brick in &session.levels[session.level].bricks {
        if !brick.destroyed {
            draw_actor(brick, renderer);
        }
    }

    draw_actor(&session.player, renderer);

    for power_up in &session.power_ups {
        if !power_up.actor.destroyed {
            draw_actor(&power_up.actor, renderer);
        }
    }

    for particle in session.particles.alive() {
        renderer.draw_sprite(
            SpriteId::Particle,
            particle.position,
            Vec2::splat(10.0),
            0.0,
            Vec3::splat(particle.color),
        );
    }

    draw_actor(&session.ball.actor, renderer);
}
