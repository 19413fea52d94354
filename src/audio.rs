//! Audio event mapping
//!
//! The simulation raises `GameEvent`s; this module turns them into the
//! discrete sound effects the platform's mixer knows how to play. Actual
//! playback (decoding, mixing, devices) lives outside the crate.

use crate::sim::state::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A destructible brick broke
    BrickBreak,
    /// The ball bounced off a solid brick
    SolidHit,
    /// The paddle caught a power-up
    PowerUpPickup,
    /// The ball bounced off the paddle
    PaddleHit,
}

impl SoundEffect {
    /// Map a simulation event to its sound, if it has one
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::BrickDestroyed => Some(SoundEffect::BrickBreak),
            GameEvent::SolidHit => Some(SoundEffect::SolidHit),
            GameEvent::PowerUpPickup => Some(SoundEffect::PowerUpPickup),
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            GameEvent::BallLost | GameEvent::LevelCleared => None,
        }
    }
}

/// Volume and mute state for the platform mixer
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Hand a sound to the platform mixer
    ///
    /// The mixer backend is external; here the request is logged so a
    /// headless run still shows the audio timeline.
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("play {:?} at volume {:.2}", effect, vol);
    }

    /// Map and play every drained event for a frame
    pub fn play_events(&self, events: &[GameEvent]) {
        for &event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }
}
