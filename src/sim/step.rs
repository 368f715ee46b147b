/// The step function: advances one game attempt by one tick.
///
/// Processing order:
///   1. Apply the pending direction (validated at submission)
///   2. Advance the head
///   3. Food: grow + relocate, or drop the tail
///   4. Power-up pickup
///   5. Boost expiry
///   6. Power-up spawn
///   7. Collision check against the post-move body
///
/// Collision is checked *after* the grow/shrink decision, against the
/// body excluding the head itself: a head entering the cell its own tail
/// vacated this tick is alive.
///
/// Runs only while Playing and not paused; a paused world is frozen in
/// place (wall-clock timers keep running, so a boost can expire across
/// a long pause).

use std::time::Instant;

use super::event::GameEvent;
use super::spawn::{place_free_cell, SpawnError};
use super::world::{BoostState, EndReason, GameWorld, Phase};

pub fn step(world: &mut GameWorld, now: Instant) -> Vec<GameEvent> {
    if world.phase != Phase::Playing || world.paused {
        return vec![];
    }

    let mut events: Vec<GameEvent> = Vec::new();

    if world.message_timer > 0 {
        world.message_timer -= 1;
        if world.message_timer == 0 {
            world.message.clear();
        }
    }

    if let Some(dir) = world.pending_direction.take() {
        world.snake.direction = dir;
    }

    let new_head = world.snake.advance();

    if new_head == world.food {
        world.score += 1;
        events.push(GameEvent::FoodEaten {
            at: new_head,
            score: world.score,
        });
        // Exclude the now-grown body so food never lands on the snake.
        match place_free_cell(&mut world.rng, world.grid, world.snake.cells()) {
            Ok(p) => world.food = p,
            Err(SpawnError::ExhaustedGrid) => {
                end_session(world, EndReason::BoardFull, &mut events);
                return events;
            }
        }
    } else {
        world.snake.drop_tail();
    }

    resolve_powerup_pickup(world, now, &mut events);
    resolve_boost_expiry(world, now, &mut events);
    resolve_powerup_spawn(world, now, &mut events);
    resolve_collision(world, &mut events);

    events
}

fn resolve_powerup_pickup(world: &mut GameWorld, now: Instant, events: &mut Vec<GameEvent>) {
    let head = world.snake.head();
    if world.powerup == Some(head) {
        world.powerup = None;
        world.boost = BoostState::Active { since: now };
        world.set_message("SPEED BOOST!", 20);
        events.push(GameEvent::PowerUpConsumed { at: head });
    }
}

fn resolve_boost_expiry(world: &mut GameWorld, now: Instant, events: &mut Vec<GameEvent>) {
    if let BoostState::Active { since } = world.boost {
        if now.duration_since(since) > world.powerup_cfg.boost_duration {
            world.boost = BoostState::Inactive;
            events.push(GameEvent::BoostExpired);
        }
    }
}

fn resolve_powerup_spawn(world: &mut GameWorld, now: Instant, events: &mut Vec<GameEvent>) {
    if world.powerup.is_some() {
        return;
    }
    if now.duration_since(world.last_powerup_spawn) <= world.powerup_cfg.spawn_interval {
        return;
    }
    match place_free_cell(&mut world.rng, world.grid, world.snake.cells()) {
        Ok(p) => {
            world.powerup = Some(p);
            world.last_powerup_spawn = now;
            events.push(GameEvent::PowerUpSpawned { at: p });
        }
        // Unreachable while food occupies a free cell; treated like any
        // other exhausted placement.
        Err(SpawnError::ExhaustedGrid) => end_session(world, EndReason::BoardFull, events),
    }
}

fn resolve_collision(world: &mut GameWorld, events: &mut Vec<GameEvent>) {
    if world.phase != Phase::Playing {
        return;
    }
    if world.snake.hits_wall(world.grid) {
        end_session(world, EndReason::WallCollision, events);
    } else if world.snake.hits_self() {
        end_session(world, EndReason::SelfCollision, events);
    }
}

/// Terminal transition. Persists the high score exactly when beaten;
/// a failed write is reported but never affects the in-memory scores.
fn end_session(world: &mut GameWorld, reason: EndReason, events: &mut Vec<GameEvent>) {
    world.phase = Phase::GameOver;
    world.end_reason = Some(reason);
    events.push(GameEvent::GameOver { reason });

    if world.score > world.high_score {
        world.high_score = world.score;
        events.push(GameEvent::HighScoreBeaten { score: world.score });
        if world.store.save(world.score).is_err() {
            world.set_message("High score save failed!", 0);
            events.push(GameEvent::HighScoreSaveFailed);
        }
    }
}
