//! Per-frame simulation update
//!
//! One call to `update` advances the whole game by `dt` seconds: ball
//! motion, collision resolution against bricks, power-ups and the paddle,
//! power-up lifecycle, and the loss/win transitions. `dt` is the variable
//! wall-clock step; no fixed rate is assumed (a very large step can tunnel
//! the ball through a thin brick, which is accepted).

use glam::{Vec2, Vec3};
use rand::RngCore;

use crate::consts::*;
use crate::render::PostFx;

use super::collision::{ball_box_collision, box_intersects, Direction};
use super::entity::{Actor, Ball, PowerUp, PowerUpKind};
use super::state::{GameEvent, GameSession, Mode};

/// Advance the session by one frame
pub fn update(session: &mut GameSession, dt: f32) {
    session.ball.advance(dt, session.width);

    do_collisions(session);

    {
        let GameSession {
            particles,
            ball,
            rng,
            ..
        } = session;
        particles.update(dt, ball, rng);
    }

    update_power_ups(session, dt);

    if session.shake_time > 0.0 {
        session.shake_time -= dt;
        if session.shake_time <= 0.0 {
            session.effects.shake = false;
        }
    }

    // Loss: the ball's top edge passed the bottom of the window
    if session.ball.actor.position.y >= session.height {
        session.lives = session.lives.saturating_sub(1);
        session.events.push(GameEvent::BallLost);
        log::info!("ball lost, {} lives remaining", session.lives);
        if session.lives == 0 {
            session.reset_level();
            session.mode = Mode::Menu;
        }
        session.reset_player();
    }

    // Win: playing and every destructible brick is gone
    if session.mode == Mode::Active && session.levels[session.level].is_completed() {
        session.events.push(GameEvent::LevelCleared);
        log::info!("level {} cleared", session.level);
        session.reset_level();
        session.reset_player();
        session.effects.chaos = true;
        session.mode = Mode::Win;
    }
}

/// Collision detection and response for one frame: ball vs bricks, paddle
/// vs power-ups, then ball vs paddle
pub fn do_collisions(session: &mut GameSession) {
    let GameSession {
        levels,
        level,
        ball,
        power_ups,
        player,
        effects,
        shake_time,
        events,
        rng,
        height,
        ..
    } = session;

    // Every brick is checked even after a hit; a ball overlapping two
    // bricks in one frame resolves against both, in grid order
    for brick in &mut levels[*level].bricks {
        if brick.destroyed {
            continue;
        }
        let collision = ball_box_collision(ball, brick);
        if !collision.hit {
            continue;
        }

        if !brick.solid {
            brick.destroyed = true;
            spawn_power_ups(power_ups, rng, brick.position);
            events.push(GameEvent::BrickDestroyed);
        } else {
            // Solid bricks shake the screen and stay put
            *shake_time = SHAKE_DURATION;
            effects.shake = true;
            events.push(GameEvent::SolidHit);
        }

        // Pass-through skips the bounce on non-solid bricks only
        if ball.pass_through && !brick.solid {
            continue;
        }
        match collision.direction {
            Direction::Left | Direction::Right => {
                ball.actor.velocity.x = -ball.actor.velocity.x;
                let penetration = ball.radius - collision.delta.x.abs();
                if collision.direction == Direction::Left {
                    ball.actor.position.x += penetration;
                } else {
                    ball.actor.position.x -= penetration;
                }
            }
            Direction::Up | Direction::Down => {
                ball.actor.velocity.y = -ball.actor.velocity.y;
                let penetration = ball.radius - collision.delta.y.abs();
                if collision.direction == Direction::Up {
                    ball.actor.position.y -= penetration;
                } else {
                    ball.actor.position.y += penetration;
                }
            }
        }
    }

    // Power-ups: cull below the window, activate on paddle contact
    for power_up in power_ups.iter_mut() {
        if power_up.actor.destroyed {
            continue;
        }
        if power_up.actor.position.y >= *height {
            power_up.actor.destroyed = true;
        }
        if box_intersects(player, &power_up.actor) {
            activate_power_up(power_up.kind, ball, player, effects);
            power_up.actor.destroyed = true;
            power_up.activated = true;
            events.push(GameEvent::PowerUpPickup);
        }
    }

    // Paddle bounce, skipped while the ball is riding the paddle
    let result = ball_box_collision(ball, player);
    if !ball.stuck && result.hit {
        // Deflect based on where the ball struck the board
        let center_board = player.position.x + player.size.x / 2.0;
        let distance = (ball.actor.position.x + ball.radius) - center_board;
        let percentage = distance / (player.size.x / 2.0);

        let strength = 2.0;
        let old_velocity = ball.actor.velocity;
        ball.actor.velocity.x = INITIAL_BALL_VELOCITY.x * percentage * strength;
        // Keep the speed magnitude; only the direction changes
        ball.actor.velocity = ball.actor.velocity.normalize() * old_velocity.length();
        // Always send the ball back up, even on a side graze
        ball.actor.velocity.y = -ball.actor.velocity.y.abs();

        // Sticky paddle re-captures the ball after the new velocity is set
        ball.stuck = ball.sticky;
        events.push(GameEvent::PaddleHit);
    }
}

/// Advance power-up timers: falling motion happens in `do_collisions`'
/// sweep order in the original, but the capsule positions are integrated
/// here together with expiry, matching the source update order
pub fn update_power_ups(session: &mut GameSession, dt: f32) {
    let GameSession {
        power_ups,
        ball,
        player,
        effects,
        ..
    } = session;

    for i in 0..power_ups.len() {
        let velocity = power_ups[i].actor.velocity;
        power_ups[i].actor.position += velocity * dt;

        if !power_ups[i].activated {
            continue;
        }
        power_ups[i].duration -= dt;
        if power_ups[i].duration > 0.0 {
            continue;
        }

        power_ups[i].activated = false;
        let kind = power_ups[i].kind;
        // Another pickup of the same kind may still be running; only the
        // last one standing clears the shared effect
        match kind {
            PowerUpKind::Sticky => {
                if !is_other_power_up_active(power_ups, kind) {
                    ball.sticky = false;
                    player.color = Vec3::ONE;
                }
            }
            PowerUpKind::PassThrough => {
                if !is_other_power_up_active(power_ups, kind) {
                    ball.pass_through = false;
                    player.color = Vec3::ONE;
                }
            }
            PowerUpKind::Confuse => {
                if !is_other_power_up_active(power_ups, kind) {
                    effects.confuse = false;
                }
            }
            PowerUpKind::Chaos => {
                if !is_other_power_up_active(power_ups, kind) {
                    effects.chaos = false;
                }
            }
            // Speed and pad-size are one-shot; nothing to wind back
            PowerUpKind::Speed | PowerUpKind::PadSizeIncrease => {}
        }
    }

    // Sweep tombstones; destroyed-but-activated capsules stay so their
    // timers keep running
    power_ups.retain(|p| !(p.actor.destroyed && !p.activated));
}

/// Apply a power-up's effect at pickup
pub fn activate_power_up(kind: PowerUpKind, ball: &mut Ball, player: &mut Actor, effects: &mut PostFx) {
    match kind {
        PowerUpKind::Speed => {
            ball.actor.velocity *= 1.2;
        }
        PowerUpKind::Sticky => {
            ball.sticky = true;
            player.color = Vec3::new(1.0, 0.5, 1.0);
        }
        PowerUpKind::PassThrough => {
            ball.pass_through = true;
            player.color = Vec3::new(1.0, 0.5, 0.5);
        }
        PowerUpKind::PadSizeIncrease => {
            player.size.x += PAD_SIZE_BONUS;
        }
        PowerUpKind::Confuse => {
            // The two screen distortions never run together; whichever is
            // requested while the other is active is suppressed
            if !effects.chaos {
                effects.confuse = true;
            }
        }
        PowerUpKind::Chaos => {
            if !effects.confuse {
                effects.chaos = true;
            }
        }
    }
}

/// True if any other capsule of the same kind is still running its timer
pub fn is_other_power_up_active(power_ups: &[PowerUp], kind: PowerUpKind) -> bool {
    power_ups
        .iter()
        .any(|p| p.activated && p.kind == kind)
}

/// One-in-`chance` roll
fn should_spawn<R: RngCore + ?Sized>(rng: &mut R, chance: u32) -> bool {
    rng.next_u32() % chance == 0
}

/// Roll every power-up kind independently at a destroyed brick's position;
/// several kinds can drop from one brick
pub fn spawn_power_ups<R: RngCore + ?Sized>(
    power_ups: &mut Vec<PowerUp>,
    rng: &mut R,
    position: Vec2,
) {
    for kind in PowerUpKind::ALL {
        if should_spawn(rng, kind.spawn_chance()) {
            power_ups.push(PowerUp::new(kind, position));
        }
    }
}
