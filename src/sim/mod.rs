//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Stable iteration order (bricks in grid order, power-ups in spawn order)
//! - No rendering or platform dependencies beyond the collaborator traits

pub mod collision;
pub mod entity;
pub mod level;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{ball_box_collision, box_intersects, CollisionResult, Direction};
pub use entity::{Actor, Ball, PowerUp, PowerUpKind};
pub use level::{Level, LoadError, TileGrid};
pub use particles::{Particle, ParticleSystem};
pub use state::{GameEvent, GameSession, Mode};
pub use tick::update;
