/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub speed: SpeedConfig,
    pub powerup: PowerUpConfig,
    pub highscore_file: PathBuf,
}

/// Exactly two tick rates: normal play and boosted play.
#[derive(Clone, Debug)]
pub struct SpeedConfig {
    pub tick_rate_ms: u64,
    pub boost_tick_rate_ms: u64,
}

#[derive(Clone, Debug)]
pub struct PowerUpConfig {
    pub boost_duration: Duration,
    pub spawn_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::from_toml(TomlConfig::default())
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    grid: TomlGrid,
    #[serde(default)]
    speed: TomlSpeed,
    #[serde(default)]
    powerup: TomlPowerUp,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlGrid {
    #[serde(default = "default_grid_width")]
    width: i32,
    #[serde(default = "default_grid_height")]
    height: i32,
}

#[derive(Deserialize, Debug)]
struct TomlSpeed {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_boost_tick_rate")]
    boost_tick_rate_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlPowerUp {
    #[serde(default = "default_boost_secs")]
    boost_duration_secs: u64,
    #[serde(default = "default_spawn_interval_secs")]
    spawn_interval_secs: u64,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_highscore_file")]
    highscore_file: String,
}

// ── Defaults ──

fn default_grid_width() -> i32 { 40 }
fn default_grid_height() -> i32 { 30 }
fn default_tick_rate() -> u64 { 100 }       // 10 steps/second
fn default_boost_tick_rate() -> u64 { 50 }  // 20 steps/second while boosted
fn default_boost_secs() -> u64 { 5 }
fn default_spawn_interval_secs() -> u64 { 20 }
fn default_highscore_file() -> String { "viper_highscore.txt".into() }

impl Default for TomlGrid {
    fn default() -> Self {
        TomlGrid {
            width: default_grid_width(),
            height: default_grid_height(),
        }
    }
}

impl Default for TomlSpeed {
    fn default() -> Self {
        TomlSpeed {
            tick_rate_ms: default_tick_rate(),
            boost_tick_rate_ms: default_boost_tick_rate(),
        }
    }
}

impl Default for TomlPowerUp {
    fn default() -> Self {
        TomlPowerUp {
            boost_duration_secs: default_boost_secs(),
            spawn_interval_secs: default_spawn_interval_secs(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            highscore_file: default_highscore_file(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        GameConfig::from_toml(load_toml(&candidate_dirs()))
    }

    fn from_toml(cfg: TomlConfig) -> Self {
        GameConfig {
            // The playfield must at least hold the snake, food and a
            // power-up with room to maneuver.
            grid_width: cfg.grid.width.max(8),
            grid_height: cfg.grid.height.max(8),
            speed: SpeedConfig {
                tick_rate_ms: cfg.speed.tick_rate_ms.max(10),
                boost_tick_rate_ms: cfg.speed.boost_tick_rate_ms.max(10),
            },
            powerup: PowerUpConfig {
                boost_duration: Duration::from_secs(cfg.powerup.boost_duration_secs),
                spawn_interval: Duration::from_secs(cfg.powerup.spawn_interval_secs),
            },
            highscore_file: PathBuf::from(cfg.general.highscore_file),
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = GameConfig::from_toml(toml::from_str("").unwrap());
        assert_eq!(cfg.grid_width, 40);
        assert_eq!(cfg.grid_height, 30);
        assert_eq!(cfg.speed.tick_rate_ms, 100);
        assert_eq!(cfg.speed.boost_tick_rate_ms, 50);
        assert_eq!(cfg.powerup.boost_duration, Duration::from_secs(5));
        assert_eq!(cfg.powerup.spawn_interval, Duration::from_secs(20));
        assert_eq!(cfg.highscore_file, PathBuf::from("viper_highscore.txt"));
    }

    #[test]
    fn partial_toml_fills_missing_keys() {
        let text = "[grid]\nwidth = 64\n\n[speed]\ntick_rate_ms = 80\n";
        let cfg = GameConfig::from_toml(toml::from_str(text).unwrap());
        assert_eq!(cfg.grid_width, 64);
        assert_eq!(cfg.grid_height, 30);
        assert_eq!(cfg.speed.tick_rate_ms, 80);
        assert_eq!(cfg.speed.boost_tick_rate_ms, 50);
    }

    #[test]
    fn degenerate_values_are_clamped() {
        let text = "[grid]\nwidth = 1\nheight = 0\n";
        let cfg = GameConfig::from_toml(toml::from_str(text).unwrap());
        assert_eq!(cfg.grid_width, 8);
        assert_eq!(cfg.grid_height, 8);
    }
}
