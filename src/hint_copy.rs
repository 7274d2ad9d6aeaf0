//! Contextual hint copy selection
//!
//! [`ContextualHintCopyProvider`] returns the description or action string
//! for a contextual hint. Two hints have an updated wording behind a
//! feature flag, and the toolbar hint's wording also depends on which way
//! the bubble's arrow points.
//!
//! # Example
//!
//! ```rust
//! use nimbus_flags::{ArrowDirection, ConfigurationSnapshot, ContextualHintCopyProvider, CopyKind, HintType};
//!
//! let snapshot = ConfigurationSnapshot::default();
//! let provider = ContextualHintCopyProvider::new(&snapshot, Some(ArrowDirection::Down));
//!
//! let copy = provider.copy_for(CopyKind::Description, HintType::ToolbarLocation);
//! assert!(!copy.is_empty());
//! assert_eq!(provider.copy_for(CopyKind::Action, HintType::JumpBackIn), "");
//! ```

use crate::error::{Error, Result};
use crate::feature_flags::FeatureFlagLayer;
use crate::snapshot::ConfigurationSnapshot;
use crate::strings;
use crate::types::FeatureId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Part of the hint bubble the copy is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyKind {
    Action,
    Description,
}

/// Hint bubbles that have copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HintType {
    InactiveTabs,
    JumpBackIn,
    JumpBackInSyncedTab,
    ToolbarLocation,
}

/// Direction the hint bubble's arrow points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowDirection {
    Up,
    Down,
    Unknown,
}

impl CopyKind {
    pub const ALL: [CopyKind; 2] = [CopyKind::Action, CopyKind::Description];

    pub fn name(self) -> &'static str {
        match self {
            CopyKind::Action => "action",
            CopyKind::Description => "description",
        }
    }
}

impl HintType {
    pub const ALL: [HintType; 4] = [
        HintType::InactiveTabs,
        HintType::JumpBackIn,
        HintType::JumpBackInSyncedTab,
        HintType::ToolbarLocation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HintType::InactiveTabs => "inactive-tabs",
            HintType::JumpBackIn => "jump-back-in",
            HintType::JumpBackInSyncedTab => "jump-back-in-synced-tab",
            HintType::ToolbarLocation => "toolbar-location",
        }
    }
}

impl ArrowDirection {
    pub const ALL: [ArrowDirection; 3] = [
        ArrowDirection::Up,
        ArrowDirection::Down,
        ArrowDirection::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
            ArrowDirection::Unknown => "unknown",
        }
    }
}

macro_rules! named_enum_traits {
    ($ty:ident, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == s)
                    .ok_or_else(|| Error::$err(s.to_string()))
            }
        }
    };
}

named_enum_traits!(CopyKind, UnknownCopyKind);
named_enum_traits!(HintType, UnknownHint);
named_enum_traits!(ArrowDirection, UnknownArrowDirection);

/// Supplies hint copy, consulting feature flags in a snapshot
///
/// The arrow direction is fixed when the provider is created; it only
/// affects the toolbar-location description.
#[derive(Debug, Clone, Copy)]
pub struct ContextualHintCopyProvider<'a> {
    snapshot: &'a ConfigurationSnapshot,
    flags: FeatureFlagLayer,
    arrow_direction: Option<ArrowDirection>,
}

impl<'a> ContextualHintCopyProvider<'a> {
    pub fn new(snapshot: &'a ConfigurationSnapshot, arrow_direction: Option<ArrowDirection>) -> Self {
        Self::with_layer(snapshot, FeatureFlagLayer::new(), arrow_direction)
    }

    /// Provider that resolves its flags through a specific layer
    pub fn with_layer(
        snapshot: &'a ConfigurationSnapshot,
        flags: FeatureFlagLayer,
        arrow_direction: Option<ArrowDirection>,
    ) -> Self {
        Self {
            snapshot,
            flags,
            arrow_direction,
        }
    }

    /// Returns the requested part of the copy for a hint
    ///
    /// Hints without an action return an empty string for [`CopyKind::Action`].
    pub fn copy_for(&self, kind: CopyKind, hint: HintType) -> &'static str {
        match kind {
            CopyKind::Action => action_copy(hint),
            CopyKind::Description => self.description_copy(hint),
        }
    }

    fn description_copy(&self, hint: HintType) -> &'static str {
        match hint {
            HintType::InactiveTabs => strings::INACTIVE_TABS_BODY,
            HintType::JumpBackIn => {
                if self.flags.check(FeatureId::CopyForJumpBackIn, self.snapshot) {
                    strings::JUMP_BACK_IN_PERSONALIZED_HOME
                } else {
                    strings::JUMP_BACK_IN_PERSONALIZED_HOME_OLD
                }
            }
            HintType::JumpBackInSyncedTab => strings::JUMP_BACK_IN_SYNCED_TAB,
            HintType::ToolbarLocation => {
                let show_new = self.flags.check(FeatureId::CopyForToolbar, self.snapshot);
                toolbar_description(self.arrow_direction, show_new)
            }
        }
    }
}

fn action_copy(hint: HintType) -> &'static str {
    match hint {
        HintType::InactiveTabs => strings::INACTIVE_TABS_ACTION,
        HintType::ToolbarLocation => strings::SEARCH_BAR_PLACEMENT_BUTTON,
        HintType::JumpBackIn | HintType::JumpBackInSyncedTab => "",
    }
}

/// Toolbar description by arrow direction; empty without a usable direction
fn toolbar_description(arrow_direction: Option<ArrowDirection>, show_new: bool) -> &'static str {
    match (arrow_direction, show_new) {
        (Some(ArrowDirection::Up), true) => strings::SEARCH_BAR_TOP_PLACEMENT,
        (Some(ArrowDirection::Up), false) => strings::SEARCH_BAR_PLACEMENT_EXISTING_USERS,
        (Some(ArrowDirection::Down), true) => strings::SEARCH_BAR_BOTTOM_PLACEMENT,
        (Some(ArrowDirection::Down), false) => strings::SEARCH_BAR_PLACEMENT_NEW_USERS,
        (direction, _) => {
            warn!(
                ?direction,
                "toolbar hint copy requested without an up or down arrow direction"
            );
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_copy_flags(jump_back_in: bool, toolbar: bool) -> ConfigurationSnapshot {
        ConfigurationSnapshot::from_json_str(&format!(
            r#"{{ "mr-2022": {{ "sections-enabled": {{
                "jump-back-in-cfr-update": {},
                "toolbar-cfr-update": {}
            }} }} }}"#,
            jump_back_in, toolbar
        ))
        .unwrap()
    }

    #[test]
    fn test_toolbar_description_without_direction_is_empty() {
        for toolbar in [true, false] {
            let snapshot = snapshot_with_copy_flags(false, toolbar);
            let provider = ContextualHintCopyProvider::new(&snapshot, None);
            assert_eq!(
                provider.copy_for(CopyKind::Description, HintType::ToolbarLocation),
                ""
            );
        }
    }

    #[test]
    fn test_toolbar_description_unknown_direction_is_empty() {
        let snapshot = snapshot_with_copy_flags(true, true);
        let provider = ContextualHintCopyProvider::new(&snapshot, Some(ArrowDirection::Unknown));
        assert_eq!(
            provider.copy_for(CopyKind::Description, HintType::ToolbarLocation),
            ""
        );
    }

    #[test]
    fn test_toolbar_description_up() {
        let on = snapshot_with_copy_flags(false, true);
        let off = snapshot_with_copy_flags(false, false);

        let new_copy = ContextualHintCopyProvider::new(&on, Some(ArrowDirection::Up))
            .copy_for(CopyKind::Description, HintType::ToolbarLocation);
        let old_copy = ContextualHintCopyProvider::new(&off, Some(ArrowDirection::Up))
            .copy_for(CopyKind::Description, HintType::ToolbarLocation);

        assert_eq!(new_copy, strings::SEARCH_BAR_TOP_PLACEMENT);
        assert_eq!(old_copy, strings::SEARCH_BAR_PLACEMENT_EXISTING_USERS);
        assert_ne!(new_copy, old_copy);
    }

    #[test]
    fn test_toolbar_description_down() {
        let on = snapshot_with_copy_flags(false, true);
        let off = snapshot_with_copy_flags(false, false);

        let new_copy = ContextualHintCopyProvider::new(&on, Some(ArrowDirection::Down))
            .copy_for(CopyKind::Description, HintType::ToolbarLocation);
        let old_copy = ContextualHintCopyProvider::new(&off, Some(ArrowDirection::Down))
            .copy_for(CopyKind::Description, HintType::ToolbarLocation);

        assert_eq!(new_copy, strings::SEARCH_BAR_BOTTOM_PLACEMENT);
        assert_eq!(old_copy, strings::SEARCH_BAR_PLACEMENT_NEW_USERS);
        assert_ne!(new_copy, old_copy);
    }

    #[test]
    fn test_jump_back_in_description_follows_flag() {
        let on = snapshot_with_copy_flags(true, false);
        let off = snapshot_with_copy_flags(false, false);

        assert_eq!(
            ContextualHintCopyProvider::new(&on, None).copy_for(CopyKind::Description, HintType::JumpBackIn),
            strings::JUMP_BACK_IN_PERSONALIZED_HOME
        );
        assert_eq!(
            ContextualHintCopyProvider::new(&off, None).copy_for(CopyKind::Description, HintType::JumpBackIn),
            strings::JUMP_BACK_IN_PERSONALIZED_HOME_OLD
        );
    }

    #[test]
    fn test_copy_flag_follows_layer_policy() {
        let snapshot = ConfigurationSnapshot::from_json_str(
            r#"{ "contextual-hint-feature": { "hint-copy": { "jump-back-in": true } } }"#,
        )
        .unwrap();

        let applied = ContextualHintCopyProvider::new(&snapshot, None);
        let ignored =
            ContextualHintCopyProvider::with_layer(&snapshot, FeatureFlagLayer::without_overrides(), None);

        assert_eq!(
            applied.copy_for(CopyKind::Description, HintType::JumpBackIn),
            strings::JUMP_BACK_IN_PERSONALIZED_HOME_OLD
        );
        assert_eq!(
            ignored.copy_for(CopyKind::Description, HintType::JumpBackIn),
            strings::JUMP_BACK_IN_PERSONALIZED_HOME
        );
    }

    #[test]
    fn test_fixed_descriptions() {
        let snapshot = ConfigurationSnapshot::default();
        let provider = ContextualHintCopyProvider::new(&snapshot, Some(ArrowDirection::Up));
        assert_eq!(
            provider.copy_for(CopyKind::Description, HintType::InactiveTabs),
            strings::INACTIVE_TABS_BODY
        );
        assert_eq!(
            provider.copy_for(CopyKind::Description, HintType::JumpBackInSyncedTab),
            strings::JUMP_BACK_IN_SYNCED_TAB
        );
    }

    #[test]
    fn test_action_copy() {
        for (jump_back_in, toolbar) in [(false, false), (true, true), (true, false), (false, true)] {
            let snapshot = snapshot_with_copy_flags(jump_back_in, toolbar);
            let provider = ContextualHintCopyProvider::new(&snapshot, Some(ArrowDirection::Down));

            assert_eq!(provider.copy_for(CopyKind::Action, HintType::JumpBackIn), "");
            assert_eq!(provider.copy_for(CopyKind::Action, HintType::JumpBackInSyncedTab), "");
            assert_eq!(
                provider.copy_for(CopyKind::Action, HintType::InactiveTabs),
                strings::INACTIVE_TABS_ACTION
            );
            assert_eq!(
                provider.copy_for(CopyKind::Action, HintType::ToolbarLocation),
                strings::SEARCH_BAR_PLACEMENT_BUTTON
            );
        }
    }

    #[test]
    fn test_names_parse() {
        assert_eq!("toolbar-location".parse::<HintType>().unwrap(), HintType::ToolbarLocation);
        assert_eq!("description".parse::<CopyKind>().unwrap(), CopyKind::Description);
        assert_eq!("down".parse::<ArrowDirection>().unwrap(), ArrowDirection::Down);
        assert!(matches!("sideways".parse::<ArrowDirection>(), Err(Error::UnknownArrowDirection(_))));
        assert!(matches!("banner".parse::<HintType>(), Err(Error::UnknownHint(_))));
        assert!(matches!("title".parse::<CopyKind>(), Err(Error::UnknownCopyKind(_))));
    }
}
