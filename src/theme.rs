use crate::db::LocalStorage;
use crate::error::Result;
use crate::models::{Theme, ThemeView};
use log::info;
use std::sync::Arc;

pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but `"dark"` reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeStore {
    storage: Arc<dyn LocalStorage>,
    theme: Theme,
}

impl ThemeStore {
    /// Reads the saved theme and writes the resolved value back.
    pub fn load(storage: Arc<dyn LocalStorage>) -> Result<Self> {
        let stored = storage.get_item(THEME_KEY)?;
        let theme = Theme::from_stored(stored.as_deref());
        storage.set_item(THEME_KEY, theme.as_str())?;
        Ok(Self { storage, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.storage.set_item(THEME_KEY, next.as_str())?;
        self.theme = next;
        info!("Theme switched to {}", next.as_str());
        Ok(next)
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MODE_CLASS)
    }

    pub fn view(&self) -> ThemeView {
        ThemeView {
            dark_mode: self.is_dark(),
            body_class: self.body_class().map(str::to_string),
        }
    }
}
