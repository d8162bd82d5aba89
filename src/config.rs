use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::SpawnRule;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Session settings, read from an optional TOML file. Every key has a default,
/// so an empty file (or no file) gives the stock game.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub spawn: SpawnRule,
    #[serde(default = "defaults::fps")]
    pub fps: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub splash: Splash,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Splash {
    #[serde(default = "defaults::splash_path")]
    pub path: PathBuf,
    #[serde(default = "defaults::splash_seconds")]
    pub seconds: f64,
    #[serde(default = "defaults::splash_enabled")]
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { spawn: SpawnRule::default(), fps: defaults::fps(), seed: None, splash: Splash::default() }
    }
}

impl Default for Splash {
    fn default() -> Self {
        Self {
            path: defaults::splash_path(),
            seconds: defaults::splash_seconds(),
            enabled: defaults::splash_enabled(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io { path: path.to_path_buf(), source };
        let mut file = std::fs::File::open(path).map_err(io_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_err)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Delay between frames, with `fps` clamped to 1..=240.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.clamp(1, 240)))
    }
}

impl Splash {
    /// How long the splash stays up. Values a `Duration` cannot hold (negative,
    /// non-finite or too large) mean zero.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.seconds).unwrap_or(Duration::ZERO)
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn fps() -> u32 { 60 }
    pub fn splash_path() -> PathBuf { PathBuf::from("assets/splash.txt") }
    pub fn splash_seconds() -> f64 { 3.0 }
    pub fn splash_enabled() -> bool { true }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.spawn, SpawnRule::Even);
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.splash.path, PathBuf::from("assets/splash.txt"));
        assert_eq!(cfg.splash.duration(), Duration::from_secs(3));
    }

    #[test]
    fn overrides_from_toml() {
        let cfg = Config::from_toml_str(
            r#"
            spawn = "classic"
            fps = 30
            seed = 7

            [splash]
            path = "art/logo.txt"
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.spawn, SpawnRule::Classic);
        assert_eq!(cfg.fps, 30);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.splash.path, PathBuf::from("art/logo.txt"));
        assert!(!cfg.splash.enabled);
        assert_eq!(cfg.splash.seconds, 3.0);
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(matches!(Config::from_toml_str("grid = 5"), Err(ConfigError::Toml(_))));
        assert!(matches!(Config::from_toml_str("spawn = \"weighted\""), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_toml("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.toml"));
    }

    #[test]
    fn frame_duration_clamps_fps() {
        let mut cfg = Config::default();
        assert_eq!(cfg.frame_duration(), Duration::from_secs_f64(1.0 / 60.0));
        cfg.fps = 0;
        assert_eq!(cfg.frame_duration(), Duration::from_secs(1));
        cfg.fps = 10_000;
        assert_eq!(cfg.frame_duration(), Duration::from_secs_f64(1.0 / 240.0));
    }

    #[test]
    fn splash_duration_ignores_nonsense() {
        let splash = Splash { seconds: -1.0, ..Splash::default() };
        assert_eq!(splash.duration(), Duration::ZERO);
        let splash = Splash { seconds: f64::NAN, ..Splash::default() };
        assert_eq!(splash.duration(), Duration::ZERO);
        let config = Config::from_toml_str("[splash]\nseconds = 1e300\n").unwrap();
        assert_eq!(config.splash.duration(), Duration::ZERO);
    }
}
