//! Trail particles that follow the ball
//!
//! A fixed pool of particles is recycled forever: each frame a couple of
//! dead slots are respawned at the ball and every live particle drifts and
//! fades. Purely cosmetic; nothing here feeds back into collisions.

use glam::Vec2;
use rand::Rng;

use crate::consts::{PARTICLES_PER_FRAME, PARTICLE_POOL};

use super::entity::Ball;

/// One pooled particle; dead when `life <= 0`
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Greyscale tint, randomized on respawn
    pub color: f32,
    /// Alpha, fades out over the particle's life
    pub alpha: f32,
    pub life: f32,
}

/// Fixed-size recycling particle pool
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    /// Cursor into the pool; the next dead slot is usually right after the
    /// last one reused
    last_used: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self {
            particles: vec![Particle::default(); PARTICLE_POOL],
            last_used: 0,
        }
    }
}

impl ParticleSystem {
    /// Respawn a few particles at the ball and age the rest
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, ball: &Ball, rng: &mut R) {
        let offset = Vec2::splat(ball.radius / 2.0);
        for _ in 0..PARTICLES_PER_FRAME {
            let slot = self.first_unused();
            self.respawn(slot, ball, offset, rng);
        }

        for p in &mut self.particles {
            p.life -= dt;
            if p.life > 0.0 {
                p.position -= p.velocity * dt;
                p.alpha -= dt * 2.5;
            }
        }
    }

    /// Particles currently worth drawing
    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.life > 0.0)
    }

    fn first_unused(&mut self) -> usize {
        // Scan forward from the previous hit first; this almost always
        // returns immediately
        for i in self.last_used..self.particles.len() {
            if self.particles[i].life <= 0.0 {
                self.last_used = i;
                return i;
            }
        }
        for i in 0..self.last_used {
            if self.particles[i].life <= 0.0 {
                self.last_used = i;
                return i;
            }
        }
        // Pool exhausted; steal the first slot
        self.last_used = 0;
        0
    }

    fn respawn<R: Rng + ?Sized>(&mut self, slot: usize, ball: &Ball, offset: Vec2, rng: &mut R) {
        let jitter = rng.random_range(-5.0..5.0);
        let color = rng.random_range(0.5..1.5);
        let p = &mut self.particles[slot];
        p.position = ball.actor.position + Vec2::splat(jitter) + offset;
        p.color = color;
        p.alpha = 1.0;
        p.life = 1.0;
        p.velocity = ball.actor.velocity * 0.1;
    }
}
