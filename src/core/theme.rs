//! Theme preference values and the store they are written to

use std::convert::Infallible;
use std::str::FromStr;

/// User's color scheme choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Menu order
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Value written to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Strict lookup by stored value
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Whether the page renders dark under this preference
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => system_prefers_dark,
        }
    }
}

/// Lenient parse for persisted values; anything unknown means `System`.
impl FromStr for ThemePreference {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(s).unwrap_or_default())
    }
}

/// Destination of theme writes. Every write is an absolute set.
pub trait ThemeStore {
    fn set_theme(&self, preference: ThemePreference);
}

/// Handle a theme menu selection by item id.
///
/// Writes once for a known id and returns the preference written. Unknown ids
/// write nothing.
pub fn select_theme<S>(store: &S, item_id: &str) -> Option<ThemePreference>
where
    S: ThemeStore + ?Sized,
{
    let preference = ThemePreference::from_value(item_id)?;
    store.set_theme(preference);
    Some(preference)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingStore {
        writes: RefCell<Vec<&'static str>>,
    }

    impl ThemeStore for RecordingStore {
        fn set_theme(&self, preference: ThemePreference) {
            self.writes.borrow_mut().push(preference.as_str());
        }
    }

    #[test]
    fn test_select_dark_writes_once() {
        let store = RecordingStore::default();

        let selected = select_theme(&store, "dark");

        assert_eq!(selected, Some(ThemePreference::Dark));
        assert_eq!(*store.writes.borrow(), vec!["dark"]);
    }

    #[test]
    fn test_select_unknown_writes_nothing() {
        let store = RecordingStore::default();

        assert_eq!(select_theme(&store, "sepia"), None);
        assert!(store.writes.borrow().is_empty());
    }

    #[test]
    fn test_repeated_selection_is_absolute() {
        let store = RecordingStore::default();
        select_theme(&store, "light");
        select_theme(&store, "light");
        select_theme(&store, "system");

        assert_eq!(*store.writes.borrow(), vec!["light", "light", "system"]);
    }

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<_> = ThemePreference::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Light", "Dark", "System"]);
    }

    #[test]
    fn test_parse_stored_values() {
        for preference in ThemePreference::ALL {
            assert_eq!(preference.as_str().parse(), Ok(preference));
        }
        assert_eq!("auto".parse(), Ok(ThemePreference::System));
        assert_eq!("".parse(), Ok(ThemePreference::System));
    }

    #[test]
    fn test_is_dark() {
        assert!(ThemePreference::Dark.is_dark(false));
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
    }
}
