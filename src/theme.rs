//! Theme preference as an explicit state object with pure transitions,
//! persisted through a small storage trait.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "dark-theme")]
    Dark,
    #[serde(rename = "light-theme")]
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Night,
    Day,
}

/// The whole persisted preference: body theme plus the indicator icon state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub theme: Theme,
    pub tod: TimeOfDay,
}

impl Default for ThemePrefs {
    fn default() -> Self {
        ThemePrefs {
            theme: Theme::Dark,
            tod: TimeOfDay::Night,
        }
    }
}

impl ThemePrefs {
    /// Resolve possibly-missing (or mutually inconsistent) saved values.
    /// Light pairs with a day indicator and dark with night unless the saved
    /// indicator explicitly says otherwise.
    pub fn resolve(theme: Option<Theme>, tod: Option<TimeOfDay>) -> Self {
        match theme {
            Some(Theme::Light) => ThemePrefs {
                theme: Theme::Light,
                tod: if tod == Some(TimeOfDay::Night) {
                    TimeOfDay::Night
                } else {
                    TimeOfDay::Day
                },
            },
            _ => ThemePrefs {
                theme: Theme::Dark,
                tod: if tod == Some(TimeOfDay::Day) {
                    TimeOfDay::Day
                } else {
                    TimeOfDay::Night
                },
            },
        }
    }

    /// The toggle button flips both axes at once.
    pub fn toggled(self) -> Self {
        ThemePrefs {
            theme: match self.theme {
                Theme::Dark => Theme::Light,
                Theme::Light => Theme::Dark,
            },
            tod: match self.tod {
                TimeOfDay::Night => TimeOfDay::Day,
                TimeOfDay::Day => TimeOfDay::Night,
            },
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self.theme {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    pub fn indicator_class(&self) -> &'static str {
        match self.tod {
            TimeOfDay::Night => "night",
            TimeOfDay::Day => "day",
        }
    }
}

/// Storage seam for the theme preference.
pub trait PrefStore: Send + Sync {
    /// None when nothing has been saved yet or the saved value is unreadable.
    fn load(&self) -> Option<ThemePrefs>;
    fn save(&self, prefs: &ThemePrefs) -> anyhow::Result<()>;
}

/// Preference persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl PrefStore for JsonFileStore {
    fn load(&self) -> Option<ThemePrefs> {
        let bytes = std::fs::read(&self.path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    fn save(&self, prefs: &ThemePrefs) -> anyhow::Result<()> {
        std::fs::write(&self.path, serde_json::to_vec(prefs)?)?;
        Ok(())
    }
}
