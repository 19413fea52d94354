//! Smashout - a classic Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, power-ups, game state)
//! - `render`: Sprite handles and the renderer-facing draw contract
//! - `audio`: Discrete sound events and volume management
//! - `settings`: Data-driven preferences
//!
//! The simulation owns all gameplay state and calls out to narrow
//! collaborator contracts for drawing, audio and post-processing. It never
//! touches a window, a GPU resource or a sound device directly.

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use render::{PostFx, SpriteId, SpriteRenderer};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults - the paddle slides along the bottom edge
    pub const PLAYER_SIZE: Vec2 = Vec2::new(300.0, 20.0);
    /// Paddle speed in pixels/sec
    pub const PLAYER_VELOCITY: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);

    /// Power-up capsule size and fall velocity
    pub const POWERUP_SIZE: Vec2 = Vec2::new(60.0, 20.0);
    pub const POWERUP_VELOCITY: Vec2 = Vec2::new(0.0, 150.0);
    /// Paddle width bonus from a pad-size-increase pickup
    pub const PAD_SIZE_BONUS: f32 = 50.0;

    /// Screen shake duration after hitting a solid brick (seconds)
    pub const SHAKE_DURATION: f32 = 0.05;

    /// Number of pooled trail particles
    pub const PARTICLE_POOL: usize = 500;
    /// Trail particles respawned per frame while the ball is live
    pub const PARTICLES_PER_FRAME: usize = 2;

    /// Size of the polled key-state arrays (covers the GLFW key-code range)
    pub const MAX_KEYS: usize = 1024;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u32 = 3;
}

/// Key codes consumed by the session (GLFW numbering)
pub mod keys {
    pub const KEY_SPACE: usize = 32;
    pub const KEY_A: usize = 65;
    pub const KEY_D: usize = 68;
    pub const KEY_S: usize = 83;
    pub const KEY_W: usize = 87;
    pub const KEY_ENTER: usize = 257;
}
