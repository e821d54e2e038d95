pub mod palette;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use store::ThemeStore;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Anything that can take on a theme, typically the open windows.
pub trait ThemeSink {
    fn set_theme(&mut self, theme: Theme);
}

/// Owns the applied theme and keeps it in sync with the store.
///
/// Toggling flips the theme that is currently applied, not the stored one.
pub struct ThemeController<S: ThemeStore> {
    applied: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        let applied = store.load().unwrap_or_default();

        Self { applied, store }
    }

    pub fn apply(&mut self, theme: Theme, sink: &mut dyn ThemeSink) -> Theme {
        sink.set_theme(theme);

        self.applied = theme;
        self.store.save(theme);

        theme
    }

    pub fn init(&mut self, sink: &mut dyn ThemeSink) -> Theme {
        self.apply(self.applied, sink)
    }

    pub fn theme(&self) -> Theme {
        self.applied
    }

    pub fn toggle(&mut self, sink: &mut dyn ThemeSink) -> Theme {
        self.apply(self.applied.flipped(), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Vec<Theme>>,
        stored: Option<Theme>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.stored
        }

        fn save(&self, theme: Theme) {
            self.saved.borrow_mut().push(theme);
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<Theme>,
    }

    impl ThemeSink for RecordingSink {
        fn set_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    #[test]
    fn init_defaults_to_light_and_persists_it() {
        let mut controller = ThemeController::new(MemoryStore::default());
        let mut sink = RecordingSink::default();

        assert_eq!(controller.init(&mut sink), Theme::Light);
        assert_eq!(sink.applied, vec![Theme::Light]);
        assert_eq!(*controller.store.saved.borrow(), vec![Theme::Light]);
    }

    #[test]
    fn init_applies_the_stored_theme() {
        let store = MemoryStore {
            stored: Some(Theme::Dark),
            ..MemoryStore::default()
        };
        let mut controller = ThemeController::new(store);
        let mut sink = RecordingSink::default();

        assert_eq!(controller.init(&mut sink), Theme::Dark);
        assert_eq!(sink.applied, vec![Theme::Dark]);
    }

    #[test]
    fn toggle_round_trips_and_saves_every_step() {
        let mut controller = ThemeController::new(MemoryStore::default());
        let mut sink = RecordingSink::default();

        controller.init(&mut sink);
        assert_eq!(controller.toggle(&mut sink), Theme::Dark);
        assert_eq!(controller.toggle(&mut sink), Theme::Light);

        let expected = vec![Theme::Light, Theme::Dark, Theme::Light];
        assert_eq!(sink.applied, expected);
        assert_eq!(*controller.store.saved.borrow(), expected);
    }

    #[test]
    fn toggle_flips_the_applied_theme_not_the_stored_one() {
        let store = MemoryStore {
            stored: Some(Theme::Light),
            ..MemoryStore::default()
        };
        let mut controller = ThemeController::new(store);
        let mut sink = RecordingSink::default();

        controller.apply(Theme::Dark, &mut sink);

        assert_eq!(controller.toggle(&mut sink), Theme::Light);
    }

    #[test]
    fn applying_the_same_theme_twice_is_idempotent() {
        let mut controller = ThemeController::new(MemoryStore::default());
        let mut sink = RecordingSink::default();

        controller.apply(Theme::Dark, &mut sink);
        controller.apply(Theme::Dark, &mut sink);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(sink.applied, vec![Theme::Dark, Theme::Dark]);
    }

    #[test]
    fn theme_still_applies_when_the_store_is_inert() {
        struct InertStore;

        impl ThemeStore for InertStore {
            fn load(&self) -> Option<Theme> {
                None
            }

            fn save(&self, _theme: Theme) {}
        }

        let mut controller = ThemeController::new(InertStore);
        let mut sink = RecordingSink::default();

        assert_eq!(controller.init(&mut sink), Theme::Light);
        assert_eq!(controller.toggle(&mut sink), Theme::Dark);
        assert_eq!(sink.applied, vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn themes_serialize_to_their_attribute_values() {
        let light = serde_json::to_string(&Theme::Light).unwrap();
        let dark = serde_json::to_string(&Theme::Dark).unwrap();

        assert_eq!(light, "\"light\"");
        assert_eq!(dark, "\"dark\"");
    }
}
