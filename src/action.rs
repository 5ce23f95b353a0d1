use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Action types exchanged between the UI panels and the state store.
///
/// The serialized form of every variant is its SCREAMING_SNAKE_CASE name,
/// so the value a collaborator compares against is exactly the registered
/// name.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    ToggleMenuFold,
    ReloadMenu,
    /// Set a feed or a category as the filter in the menu.
    ParentFilter,
    /// Change the displayed feed in the menu.
    MenuFilter,
    /// Edit an attr on an article (like / read).
    ChangeAttr,
    ReloadMiddlePanel,
    /// Set a middle panel filter (read/like/all).
    MiddlePanelFilter,
    /// Load a feed or a category in the right panel.
    LoadParent,
    /// Load a single article in the right panel.
    LoadCluster,
    /// Load an article from the store.
    LoadArticle,
    MarkAllAsRead,
}

impl Action {
    /// The symbolic name this action is registered under.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names_are_injective() {
        let names: HashSet<&str> = Action::iter().map(Action::name).collect();
        assert_eq!(names.len(), Action::iter().count());
    }

    #[test]
    fn test_display_matches_name() {
        for action in Action::iter() {
            assert_eq!(action.to_string(), action.name());
        }
    }

    #[test]
    fn test_parses_back_from_name() {
        for action in Action::iter() {
            assert_eq!(Action::from_str(action.name()).ok(), Some(action));
        }
    }

    #[test]
    fn test_rejects_unknown_name() {
        assert!(Action::from_str("DOES_NOT_EXIST").is_err());
    }

    #[test]
    fn test_serializes_to_symbolic_name() {
        let serialized = serde_json::to_string(&Action::MarkAllAsRead).unwrap();
        assert_eq!(serialized, "\"MARK_ALL_AS_READ\"");

        let deserialized: Action = serde_json::from_str("\"LOAD_CLUSTER\"").unwrap();
        assert_eq!(deserialized, Action::LoadCluster);
    }
}
