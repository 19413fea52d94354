//! Game session state and the top-level mode machine
//!
//! `GameSession` owns everything for the lifetime of a run: the paddle,
//! the ball, the level list, falling power-ups and the post-fx flags. All
//! mutation happens on the single update thread; rendering only reads the
//! state after `tick::update` returns.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::keys::*;
use crate::render::{PostFx, SpriteId};

use super::entity::{Actor, Ball, PowerUp};
use super::level::{self, Level, TileGrid};
use super::particles::ParticleSystem;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Level select; confirm to start playing
    Menu,
    /// Gameplay running
    Active,
    /// Post-victory prompt
    Win,
}

/// Discrete side effects raised during an update, drained by the caller
/// and mapped to audio or logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A destructible brick was destroyed
    BrickDestroyed,
    /// The ball bounced off a solid brick
    SolidHit,
    /// The paddle caught a power-up capsule
    PowerUpPickup,
    /// The ball bounced off the paddle
    PaddleHit,
    /// The ball fell past the bottom edge
    BallLost,
    /// Every destructible brick in the level is gone
    LevelCleared,
}

/// All state for one run of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Playfield size in pixels
    pub width: f32,
    pub height: f32,
    pub mode: Mode,
    /// Polled key state, indexed by key code
    pub keys: [bool; MAX_KEYS],
    /// Edge suppression: set once a press has been consumed, cleared on
    /// release, so one press causes one transition
    pub keys_processed: [bool; MAX_KEYS],
    /// Pristine tile grids, kept for level resets
    grids: Vec<TileGrid>,
    pub levels: Vec<Level>,
    /// Index of the level being played / selected
    pub level: usize,
    pub lives: u32,
    pub power_ups: Vec<PowerUp>,
    pub player: Actor,
    pub ball: Ball,
    /// Seconds of screen shake remaining
    pub shake_time: f32,
    /// Post-processing flags the render layer reads
    pub effects: PostFx,
    pub particles: ParticleSystem,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameSession {
    /// Start a session with the bundled levels
    pub fn new(seed: u64) -> Self {
        let grids = level::default_levels()
            .iter()
            .map(|text| Level::parse(text))
            .collect::<Result<Vec<_>, _>>()
            .expect("bundled level grids are valid");
        Self::from_grids(grids, seed)
    }

    /// Start a session from already-parsed level grids
    pub fn from_grids(grids: Vec<TileGrid>, seed: u64) -> Self {
        assert!(!grids.is_empty(), "a session needs at least one level");
        let width = SCREEN_WIDTH;
        let height = SCREEN_HEIGHT;

        let levels = grids
            .iter()
            .map(|grid| Level::from_grid(grid, width, height / 2.0))
            .collect();

        let player_pos = Vec2::new(width / 2.0 - PLAYER_SIZE.x / 2.0, height - PLAYER_SIZE.y);
        let player = Actor::new(player_pos, PLAYER_SIZE, SpriteId::Paddle);
        let ball_pos =
            player_pos + Vec2::new(PLAYER_SIZE.x / 2.0 - BALL_RADIUS, -BALL_RADIUS * 2.0);
        let ball = Ball::new(ball_pos, BALL_RADIUS, INITIAL_BALL_VELOCITY);

        Self {
            width,
            height,
            mode: Mode::Menu,
            keys: [false; MAX_KEYS],
            keys_processed: [false; MAX_KEYS],
            grids,
            levels,
            level: 0,
            lives: STARTING_LIVES,
            power_ups: Vec::new(),
            player,
            ball,
            shake_time: 0.0,
            effects: PostFx::default(),
            particles: ParticleSystem::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Record a key press from the platform layer
    pub fn press(&mut self, key: usize) {
        if key < MAX_KEYS {
            self.keys[key] = true;
        }
    }

    /// Record a key release; also re-arms the edge suppression for it
    pub fn release(&mut self, key: usize) {
        if key < MAX_KEYS {
            self.keys[key] = false;
            self.keys_processed[key] = false;
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply the polled key state for this frame
    ///
    /// The blocks below are deliberately sequential `if`s on `self.mode`
    /// rather than a `match`: confirming in the menu switches to Active
    /// and the movement keys take effect the same frame.
    pub fn process_input(&mut self, dt: f32) {
        if self.mode == Mode::Menu {
            if self.keys[KEY_ENTER] && !self.keys_processed[KEY_ENTER] {
                self.mode = Mode::Active;
                self.keys_processed[KEY_ENTER] = true;
                log::info!("starting level {}", self.level);
            }
            if self.keys[KEY_W] && !self.keys_processed[KEY_W] {
                self.level = (self.level + 1) % self.levels.len();
                self.keys_processed[KEY_W] = true;
            }
            if self.keys[KEY_S] && !self.keys_processed[KEY_S] {
                self.level = if self.level > 0 {
                    self.level - 1
                } else {
                    self.levels.len() - 1
                };
                self.keys_processed[KEY_S] = true;
            }
        }
        if self.mode == Mode::Win && self.keys[KEY_ENTER] {
            self.keys_processed[KEY_ENTER] = true;
            self.effects.chaos = false;
            self.mode = Mode::Menu;
        }
        if self.mode == Mode::Active {
            let velocity = PLAYER_VELOCITY * dt;
            if self.keys[KEY_A] && self.player.position.x >= 0.0 {
                self.player.position.x -= velocity;
                if self.ball.stuck {
                    self.ball.actor.position.x -= velocity;
                }
            }
            if self.keys[KEY_D] && self.player.position.x <= self.width - self.player.size.x {
                self.player.position.x += velocity;
                if self.ball.stuck {
                    self.ball.actor.position.x += velocity;
                }
            }
            if self.keys[KEY_SPACE] {
                self.ball.stuck = false;
            }
        }
    }

    /// Rebuild the current level's bricks from its pristine grid and
    /// restore the starting lives
    pub fn reset_level(&mut self) {
        self.levels[self.level] =
            Level::from_grid(&self.grids[self.level], self.width, self.height / 2.0);
        self.lives = STARTING_LIVES;
    }

    /// Put the paddle and ball back at the starting position and clear
    /// every transient power-up effect and tint
    pub fn reset_player(&mut self) {
        self.player.size = PLAYER_SIZE;
        self.player.position =
            Vec2::new(self.width / 2.0 - PLAYER_SIZE.x / 2.0, self.height - PLAYER_SIZE.y);
        let ball_pos = self.player.position
            + Vec2::new(PLAYER_SIZE.x / 2.0 - BALL_RADIUS, -BALL_RADIUS * 2.0);
        self.ball.reset(ball_pos, INITIAL_BALL_VELOCITY);
        self.effects.chaos = false;
        self.effects.confuse = false;
        self.player.color = Vec3::ONE;
        self.ball.actor.color = Vec3::ONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_confirm_starts_game() {
        let mut session = GameSession::new(1);
        assert_eq!(session.mode, Mode::Menu);

        session.press(KEY_ENTER);
        session.process_input(0.016);
        assert_eq!(session.mode, Mode::Active);
    }

    #[test]
    fn test_menu_confirm_is_edge_triggered() {
        let mut session = GameSession::new(1);
        session.press(KEY_ENTER);
        session.process_input(0.016);
        assert_eq!(session.mode, Mode::Active);

        // Key still held: returning to the menu must not instantly restart
        session.mode = Mode::Menu;
        session.process_input(0.016);
        assert_eq!(session.mode, Mode::Menu);

        // Release re-arms the edge
        session.release(KEY_ENTER);
        session.press(KEY_ENTER);
        session.process_input(0.016);
        assert_eq!(session.mode, Mode::Active);
    }

    #[test]
    fn test_menu_level_cycling_wraps() {
        let mut session = GameSession::new(1);
        let count = session.levels.len();
        assert_eq!(session.level, 0);

        for expected in [1, 2, 3, 0] {
            session.press(KEY_W);
            session.process_input(0.016);
            session.release(KEY_W);
            assert_eq!(session.level, expected % count);
        }

        session.press(KEY_S);
        session.process_input(0.016);
        assert_eq!(session.level, count - 1);
    }

    #[test]
    fn test_win_confirm_returns_to_menu_and_clears_chaos() {
        let mut session = GameSession::new(1);
        session.mode = Mode::Win;
        session.effects.chaos = true;

        session.press(KEY_ENTER);
        session.process_input(0.016);
        assert_eq!(session.mode, Mode::Menu);
        assert!(!session.effects.chaos);
    }

    #[test]
    fn test_illegal_inputs_are_noops() {
        let mut session = GameSession::new(1);

        // Movement keys do nothing in the menu
        let player_x = session.player.position.x;
        session.press(KEY_A);
        session.press(KEY_SPACE);
        session.process_input(0.016);
        assert_eq!(session.player.position.x, player_x);
        assert!(session.ball.stuck);

        // Level-select keys do nothing in Win
        session.release(KEY_A);
        session.release(KEY_SPACE);
        session.mode = Mode::Win;
        session.press(KEY_W);
        session.process_input(0.016);
        assert_eq!(session.level, 0);
        assert_eq!(session.mode, Mode::Win);
    }

    #[test]
    fn test_paddle_drags_stuck_ball() {
        let mut session = GameSession::new(1);
        session.mode = Mode::Active;
        let ball_x = session.ball.actor.position.x;

        session.press(KEY_D);
        session.process_input(0.1);
        assert!(session.player.position.x > session.width / 2.0 - PLAYER_SIZE.x / 2.0);
        assert!(session.ball.actor.position.x > ball_x);

        // Released ball no longer follows the paddle
        session.press(KEY_SPACE);
        session.process_input(0.0);
        assert!(!session.ball.stuck);
        let ball_x = session.ball.actor.position.x;
        session.process_input(0.1);
        assert_eq!(session.ball.actor.position.x, ball_x);
    }

    #[test]
    fn test_reset_player_restores_defaults() {
        let mut session = GameSession::new(1);
        session.player.size.x += 50.0;
        session.player.color = Vec3::new(1.0, 0.5, 1.0);
        session.ball.sticky = true;
        session.ball.pass_through = true;
        session.effects.chaos = true;
        session.effects.confuse = true;

        session.reset_player();
        assert_eq!(session.player.size, PLAYER_SIZE);
        assert_eq!(session.player.color, Vec3::ONE);
        assert!(session.ball.stuck);
        assert!(!session.ball.sticky);
        assert!(!session.ball.pass_through);
        assert!(!session.effects.chaos);
        assert!(!session.effects.confuse);
    }

    #[test]
    fn test_reset_level_rebuilds_bricks() {
        let mut session = GameSession::new(1);
        let brick_count = session.levels[0].bricks.len();
        for brick in &mut session.levels[0].bricks {
            brick.destroyed = true;
        }
        session.lives = 1;

        session.reset_level();
        assert_eq!(session.levels[0].bricks.len(), brick_count);
        assert!(session.levels[0].bricks.iter().all(|b| !b.destroyed));
        assert_eq!(session.lives, STARTING_LIVES);
    }
}
