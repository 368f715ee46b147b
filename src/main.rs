/// Entry point and game loop.
///
/// The driver owns everything the core does not: frame pacing, input
/// polling, key-to-command translation, and the session lifecycle (a
/// fresh GameWorld per attempt, rebuilt when the player restarts).

mod config;
mod domain;
mod sim;
mod ui;

use std::error::Error;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::GameConfig;
use domain::types::{Command, Direction};
use sim::rng::SessionRng;
use sim::score::FileStore;
use sim::step::step;
use sim::world::{GameWorld, Phase};
use ui::input::InputState;
use ui::renderer::Renderer;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

// ── Key Constants ──

const KEYS_UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const KEYS_DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const KEYS_LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const KEYS_RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const KEYS_PAUSE: &[KeyCode] = &[KeyCode::Char(' ')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc];
const KEYS_RESTART: &[KeyCode] = &[KeyCode::Char('r'), KeyCode::Char('R')];

fn main() {
    let config = GameConfig::load();

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = run(&mut renderer, &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    match result {
        Ok(Some(score)) => {
            println!();
            println!("Thanks for playing Viper!");
            println!("Final score: {score}");
        }
        Ok(None) => {}
        Err(e) => eprintln!("Game error: {e}"),
    }
}

fn new_session(config: &GameConfig) -> GameWorld {
    GameWorld::new(
        config,
        SessionRng::from_random(),
        Box::new(FileStore::new(&config.highscore_file)),
        Instant::now(),
    )
}

/// Returns the last session's score, or None when the player quit
/// before playing.
fn run(renderer: &mut Renderer, config: &GameConfig) -> Result<Option<u32>, Box<dyn Error>> {
    let mut kb = InputState::new();

    if !intro(renderer, &mut kb)? {
        return Ok(None);
    }

    let mut world = new_session(config);
    let mut last_tick = Instant::now();

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() {
            return Ok(Some(world.score));
        }

        if world.phase == Phase::GameOver {
            if kb.any_pressed(KEYS_RESTART) {
                world = new_session(config);
                last_tick = Instant::now();
            } else if kb.any_pressed(KEYS_QUIT) {
                return Ok(Some(world.score));
            }
        } else {
            for cmd in translate_commands(&kb) {
                match cmd {
                    Command::Quit => return Ok(Some(world.score)),
                    other => world.apply(other),
                }
            }
        }

        // The world picks the pace (boost halves the interval); the
        // driver just honors it.
        if last_tick.elapsed() >= world.tick_interval() {
            step(&mut world, Instant::now());
            last_tick = Instant::now();
        }

        renderer.render(&world.snapshot())?;
        std::thread::sleep(FRAME_SLEEP);
    }
}

/// Show the title card until a key is pressed. False = quit requested.
fn intro(renderer: &mut Renderer, kb: &mut InputState) -> Result<bool, Box<dyn Error>> {
    loop {
        renderer.render_intro()?;
        kb.drain_events();
        if kb.ctrl_c_pressed() || kb.any_pressed(KEYS_QUIT) {
            return Ok(false);
        }
        if !kb.pressed().is_empty() {
            return Ok(true);
        }
        std::thread::sleep(FRAME_SLEEP);
    }
}

fn translate_commands(kb: &InputState) -> Vec<Command> {
    kb.pressed().iter().filter_map(|code| key_command(*code)).collect()
}

fn key_command(code: KeyCode) -> Option<Command> {
    if KEYS_UP.contains(&code) {
        Some(Command::Turn(Direction::Up))
    } else if KEYS_DOWN.contains(&code) {
        Some(Command::Turn(Direction::Down))
    } else if KEYS_LEFT.contains(&code) {
        Some(Command::Turn(Direction::Left))
    } else if KEYS_RIGHT.contains(&code) {
        Some(Command::Turn(Direction::Right))
    } else if KEYS_PAUSE.contains(&code) {
        Some(Command::TogglePause)
    } else if KEYS_QUIT.contains(&code) {
        Some(Command::Quit)
    } else {
        None
    }
}
