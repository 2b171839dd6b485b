//! Host configuration, optionally loaded from a JSON file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::context::Mode;
use crate::error::Result;
use crate::ui::style::{Color, Styles};

pub const CONFIG_ENV: &str = "CLIGUI_CONFIG";
const APP_DIR: &str = "cligui";
const CONFIG_FILE: &str = "config.json";

/// How Tab picks the next widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPolicy {
    /// Next focusable widget, wrapping; stay put when nothing is focusable.
    #[default]
    SkipUnfocusable,
    /// `(focus + 1) % len`, landing on non-focusable widgets too.
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fg: Color::GREEN,
            bg: Color::BLACK,
        }
    }
}

impl Palette {
    pub fn styles(&self) -> Styles {
        Styles::new(self.fg, self.bg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: Mode,
    pub tabnav: bool,
    pub tab_policy: TabPolicy,
    pub sleep_ms: u64,
    pub palette: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Input,
            tabnav: true,
            tab_policy: TabPolicy::SkipUnfocusable,
            sleep_ms: 1000,
            palette: Palette::default(),
        }
    }
}

impl AppConfig {
    pub fn sleep_quantum(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }
}

/// `$CLIGUI_CONFIG`, or `config.json` in the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Missing files are not an error; unreadable or malformed ones are logged.
pub fn load_config() -> Option<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }
    match load_config_from(&path) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
            None
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Directory for log files and other throwaway state.
pub fn cache_dir() -> Option<PathBuf> {
    platform_cache_dir().map(|dir| dir.join(APP_DIR))
}

fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn platform_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/config.rs"]
mod tests;
