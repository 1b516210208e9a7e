use crate::motion::Motion;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::Display;
use thiserror::Error;
use tracing::warn;

pub const SETTINGS_FILE: &str = "medgo.toml";
pub const ENV_PREFIX: &str = "MEDGO_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Fastest accepted animation speed
pub const MAX_ANIMATION_SPEED: f64 = 100.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Load(#[from] figment::Error),
    #[error("animation_speed must be above 0 and at most 100, got {0}")]
    AnimationSpeed(f64),
    #[error("unknown log_level `{0}`, expected one of trace, debug, info, warn, error")]
    LogLevel(String),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Which screen the binary opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryScreen {
    #[default]
    Landing,
    /// Minimal placeholder shell
    Welcome,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub entry: EntryScreen,
    pub reduce_motion: bool,
    /// Multiplies frame time; 2.0 plays every animation twice as fast
    pub animation_speed: f64,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entry: EntryScreen::default(),
            reduce_motion: false,
            animation_speed: 1.0,
            log_file: PathBuf::from("medgo.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(SETTINGS_FILE)
    }

    /// Merge defaults, the TOML file at `path` and `MEDGO_*` variables.
    /// A missing file is created with the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            if let Err(err) = Self::default().save_to(path) {
                warn!(path = %path.display(), %err, "could not write default settings");
            }
        }

        let settings: Settings = Self::figment(path).extract()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.animation_speed > 0.0 && self.animation_speed <= MAX_ANIMATION_SPEED) {
            return Err(SettingsError::AnimationSpeed(self.animation_speed));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(SettingsError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    pub fn motion(&self) -> Motion {
        Motion::from_reduce_flag(self.reduce_motion)
    }

    /// Multiplier for frame time, held inside the accepted range even for
    /// settings that skipped validation
    pub fn frame_scale(&self) -> f64 {
        if self.animation_speed.is_nan() {
            1.0
        } else {
            self.animation_speed.clamp(0.0, MAX_ANIMATION_SPEED)
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }
}
