use log::{debug, error, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, RwLock};

use crate::annotation::AnnotationActionType;
use crate::find::FindOptions;

pub const CURRENT_VERSION: u32 = 1;
const SETTINGS_FILENAME: &str = "config.yaml";
const APP_NAME: &str = "docmark";

const SETTINGS_HEADER: &str = "# docmark settings
# last_used_highlight: highlight-yellow | highlight-blue | highlight-pink | highlight-green
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Color the generic highlight entry resolves to on startup
    #[serde(default = "default_highlight", deserialize_with = "lenient_highlight")]
    pub last_used_highlight: AnnotationActionType,

    #[serde(default)]
    pub find_case_sensitive: bool,

    #[serde(default)]
    pub find_whole_words: bool,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn default_highlight() -> AnnotationActionType {
    AnnotationActionType::HighlightYellow
}

/// Unknown names fall back to the default instead of failing the whole file
fn lenient_highlight<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<AnnotationActionType, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(name.parse().unwrap_or_else(|e| {
        warn!("Ignoring setting last_used_highlight: {e}");
        default_highlight()
    }))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            last_used_highlight: default_highlight(),
            find_case_sensitive: false,
            find_whole_words: false,
        }
    }
}

impl Settings {
    pub fn find_options(&self) -> FindOptions {
        let mut options = FindOptions::DEFAULT;
        options.set(FindOptions::CASE_SENSITIVE, self.find_case_sensitive);
        options.set(FindOptions::WHOLE_WORDS_ONLY, self.find_whole_words);
        options
    }

    fn sanitize(&mut self) {
        if !self.last_used_highlight.is_highlight_color() {
            warn!(
                "Setting last_used_highlight must be a highlight color, got {}; using {}",
                self.last_used_highlight,
                default_highlight()
            );
            self.last_used_highlight = default_highlight();
        }
    }
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

pub fn preferred_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join(APP_NAME).join(SETTINGS_FILENAME))
}

pub fn load_settings() {
    let Some(path) = preferred_config_path() else {
        warn!("Could not determine config directory, using default settings");
        return;
    };
    if path.exists() {
        load_settings_from_path(&path);
    } else {
        info!("Settings file not found, creating with defaults at {path:?}");
        if let Ok(settings) = SETTINGS.read() {
            save_settings_to_path(&settings, &path);
        }
    }
}

pub fn load_settings_from_path(path: &Path) {
    match fs::read_to_string(path) {
        Ok(content) => match serde_yaml::from_str::<Settings>(&content) {
            Ok(mut settings) => {
                debug!("Loaded settings from {path:?}");
                settings.sanitize();

                if settings.version < CURRENT_VERSION {
                    info!(
                        "Migrating settings from v{} to v{}",
                        settings.version, CURRENT_VERSION
                    );
                    settings.version = CURRENT_VERSION;
                    save_settings_to_path(&settings, path);
                }

                if let Ok(mut global) = SETTINGS.write() {
                    *global = settings;
                }
            }
            Err(e) => {
                error!("Failed to parse settings file {path:?}: {e}");
            }
        },
        Err(e) => {
            error!("Failed to read settings file {path:?}: {e}");
        }
    }
}

pub fn save_settings() {
    let Some(path) = preferred_config_path() else {
        warn!("Could not determine config directory, cannot save settings");
        return;
    };

    if let Ok(settings) = SETTINGS.read() {
        save_settings_to_path(&settings, &path);
    }
}

pub fn save_settings_to_path(settings: &Settings, path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory {parent:?}: {e}");
                return;
            }
        }
    }

    let body = match serde_yaml::to_string(settings) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to serialize settings: {e}");
            return;
        }
    };

    match fs::write(path, format!("{SETTINGS_HEADER}{body}")) {
        Ok(()) => debug!("Saved settings to {path:?}"),
        Err(e) => error!("Failed to save settings to {path:?}: {e}"),
    }
}

// Public API for accessing/modifying settings

pub fn get_last_used_highlight() -> AnnotationActionType {
    SETTINGS
        .read()
        .map(|s| s.last_used_highlight)
        .unwrap_or_else(|_| default_highlight())
}

/// Remember `color` in memory; non-highlight values are ignored.
///
/// Call [`save_settings`] to persist.
pub fn set_last_used_highlight(color: AnnotationActionType) {
    if !color.is_highlight_color() {
        warn!("Not remembering {color} as a highlight color");
        return;
    }
    if let Ok(mut settings) = SETTINGS.write() {
        settings.last_used_highlight = color;
    }
}

pub fn get_find_options() -> FindOptions {
    SETTINGS
        .read()
        .map(|s| s.find_options())
        .unwrap_or_default()
}

pub fn set_find_options(options: FindOptions) {
    if let Ok(mut settings) = SETTINGS.write() {
        settings.find_case_sensitive = options.contains(FindOptions::CASE_SENSITIVE);
        settings.find_whole_words = options.contains(FindOptions::WHOLE_WORDS_ONLY);
    }
}

#[cfg(test)]
fn current() -> Settings {
    SETTINGS.read().map(|s| s.clone()).unwrap_or_default()
}

#[cfg(test)]
fn reset() {
    if let Ok(mut settings) = SETTINGS.write() {
        *settings = Settings::default();
    }
}
