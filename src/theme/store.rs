use super::Theme;
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::PathBuf};

const PREFERENCES_FILE: &str = "preferences.json";

/// Where the theme preference is read from and written to.
///
/// Both directions are best effort: a store that cannot load yields the
/// default theme, a store that cannot save only logs. The app keeps working
/// either way, the preference just stops surviving restarts.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;

    fn save(&self, theme: Theme);
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct Preferences {
    theme: Theme,
}

pub struct FileThemeStore {
    path: Option<PathBuf>,
}

impl FileThemeStore {
    pub fn from_config_dir() -> Self {
        let path = dirs::config_dir().map(|dir| dir.join("tiltdeck").join(PREFERENCES_FILE));

        if path.is_none() {
            log::warn!("No user config directory, the theme preference will not be persisted");
        }

        Self { path }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        let path = self.path.as_ref()?;

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    log::warn!("Failed to read preferences: {}", err);
                }

                return None;
            }
        };

        match serde_json::from_str::<Preferences>(&contents) {
            Ok(preferences) => Some(preferences.theme),
            Err(err) => {
                log::warn!("Ignoring malformed preferences: {}", err);

                None
            }
        }
    }

    fn save(&self, theme: Theme) {
        let path = match self.path.as_ref() {
            Some(path) => path,
            None => return,
        };

        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                log::warn!("Failed to create the preferences directory: {}", err);

                return;
            }
        }

        let contents = match serde_json::to_string(&Preferences { theme }) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("Failed to encode preferences: {}", err);

                return;
            }
        };

        match fs::write(path, contents) {
            Ok(()) => log::info!("Saved theme preference: {}", theme),
            Err(err) => log::warn!("Failed to write preferences: {}", err),
        }
    }
}
