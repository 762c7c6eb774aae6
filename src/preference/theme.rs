use serde::{Deserialize, Serialize};

use super::error::PreferenceError;
use super::store::PreferenceStore;

pub const THEME_KEY: &str = "theme";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn other(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }
}

/// Light/dark preference backed by a persistent store.
pub struct ThemeToggle {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemeToggle {
    /// Reads the stored theme once; absent or unrecognised values start light.
    pub fn load(store: Box<dyn PreferenceStore>) -> Result<Self, PreferenceError> {
        let theme = match store.get(THEME_KEY)? {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown stored theme {:?}", value);
                Theme::default()
            }),
            None => Theme::default(),
        };
        Ok(ThemeToggle { store, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn label(&self) -> &'static str {
        self.theme.toggle_label()
    }

    /// Flips the theme and persists it. The in-memory state only changes once
    /// the store accepted the new value.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.other();
        self.store.set(THEME_KEY, next.as_ref())?;
        self.theme = next;
        log::info!("Theme switched to {}", next);
        Ok(next)
    }
}
