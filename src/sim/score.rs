/// High-score persistence: a single non-negative integer in a text file.
///
/// The store is a seam between the session and the filesystem so tests
/// run against an in-memory implementation. Load failures (missing file,
/// garbage content) degrade to 0 and are never surfaced to the player;
/// save failures are reported to the caller but must not affect play.

use std::path::{Path, PathBuf};

pub trait HighScoreStore {
    /// Current persisted high score; 0 on any failure.
    fn load(&self) -> u32;

    /// Overwrite the persisted high score. Best-effort.
    fn save(&mut self, score: u32) -> Result<(), String>;
}

// ── File-backed store ──

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Relative filenames are resolved into a writable data directory;
    /// absolute paths are used as given.
    pub fn new(file: &Path) -> Self {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir().join(file)
        };
        FileStore { path }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), String> {
        std::fs::write(&self.path, score.to_string())
            .map_err(|e| format!("write {} failed: {}", self.path.display(), e))
    }
}

/// Where score data lives.
/// 1. Exe directory, if writable (local/portable installs).
/// 2. XDG data home (~/.local/share/viper) for system installs.
/// 3. Fallback to CWD.
fn data_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            let probe = parent.join(".write_test_viper");
            if std::fs::write(&probe, "").is_ok() {
                let _ = std::fs::remove_file(&probe);
                return parent.to_path_buf();
            }
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/viper");
        if std::fs::create_dir_all(&xdg).is_ok() {
            return xdg;
        }
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

// ── In-memory store (tests) ──

#[derive(Default)]
#[allow(dead_code)]
pub struct MemStore {
    pub value: u32,
    pub fail_saves: bool,
}

impl HighScoreStore for MemStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) -> Result<(), String> {
        if self.fail_saves {
            return Err("simulated save failure".to_string());
        }
        self.value = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("viper_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_loads_zero() {
        let store = FileStore::new(&scratch_file("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn malformed_content_loads_zero() {
        let path = scratch_file("malformed");
        std::fs::write(&path, "not a number").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load(), 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_round_trip() {
        let path = scratch_file("roundtrip");
        let mut store = FileStore::new(&path);
        store.save(42).unwrap();
        assert_eq!(store.load(), 42);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn whitespace_around_value_is_tolerated() {
        let path = scratch_file("whitespace");
        std::fs::write(&path, " 17\n").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load(), 17);
        let _ = std::fs::remove_file(&path);
    }
}
