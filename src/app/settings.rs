// Settings store: data types, global state, and JSON load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::types::{LangChoice, LibraryFilter, StreamQuality};

const SETTINGS_FILE: &str = "playdeck-settings.json";

fn default_volume() -> f32 {
    0.8
}
fn default_speed() -> f32 {
    1.0
}
fn default_gapless() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub library_filter: LibraryFilter,
    #[serde(default)]
    pub quality: StreamQuality,
    #[serde(default)]
    pub language: LangChoice,
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default)]
    pub crossfade_secs: f32,
    #[serde(default = "default_speed")]
    pub playback_speed: f32,
    #[serde(default = "default_gapless")]
    pub gapless: bool,
    #[serde(default)]
    pub normalize_loudness: bool,
    #[serde(default)]
    pub resume_position: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            library_filter: LibraryFilter::default(),
            quality: StreamQuality::default(),
            language: LangChoice::default(),
            volume: default_volume(),
            crossfade_secs: 0.0,
            playback_speed: default_speed(),
            gapless: default_gapless(),
            normalize_loudness: false,
            resume_position: false,
        }
    }
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE)
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            *APP_SETTINGS.write().unwrap() = s;
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = APP_SETTINGS.read().unwrap().clone();
    if let Err(e) = st.save_to_file(&path) {
        log::error!(
            "Failed to save settings to {}: {}",
            path.to_string_lossy(),
            e
        );
    } else {
        log::info!("Saved settings to {}", path.to_string_lossy());
    }
}

/// Read settings through a closure.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap();
    f(&st)
}

/// Modify settings through a closure.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap();
    f(&mut st)
}
