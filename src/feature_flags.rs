//! Feature flag resolution
//!
//! [`FeatureFlagLayer`] maps a [`FeatureId`] and a [`ConfigurationSnapshot`]
//! to a resolved value. Each feature is routed to exactly one
//! [`FeatureGroup`] through the static [`ROUTES`] table; the group then reads
//! one field or one keyed-map entry of its snapshot record.
//!
//! Six features carry an override group in the table. While the layer's
//! [`OverridePolicy`] is [`OverridePolicy::Apply`] (the default) those
//! features read the `mr-2022` experiment record instead of their own group.
//! With [`OverridePolicy::Ignore`] they fall back to their natural group.
//!
//! Resolution is total: a key missing from the snapshot resolves to `false`
//! (or [`StartAtHomeSetting::Disabled`]), never to an error.
//!
//! # Example
//!
//! ```rust
//! use nimbus_flags::{ConfigurationSnapshot, FeatureFlagLayer, FeatureId};
//!
//! let snapshot = ConfigurationSnapshot::from_json_str(r#"{
//!     "homescreen-feature": { "sections-enabled": { "top-sites": true } },
//!     "contextual-hint-feature": { "hint-copy": { "toolbar": true } },
//!     "mr-2022": { "sections-enabled": { "toolbar-cfr-update": false } }
//! }"#)?;
//!
//! let flags = FeatureFlagLayer::new();
//! assert!(flags.check(FeatureId::TopSites, &snapshot));
//! assert!(!flags.check(FeatureId::Pocket, &snapshot));
//!
//! // The experiment record wins over the hint-copy group
//! assert!(!flags.check(FeatureId::CopyForToolbar, &snapshot));
//! assert!(FeatureFlagLayer::without_overrides().check(FeatureId::CopyForToolbar, &snapshot));
//! # Ok::<(), nimbus_flags::Error>(())
//! ```

use crate::descriptions::feature_description;
use crate::snapshot::{ConfigurationSnapshot, SectionMap};
use crate::types::{
    ContextualHintId, FeatureId, HomeScreenSection, SearchTermGroup, StartAtHomeSetting,
    TabTraySection,
};
use serde::Serialize;
use tracing::{debug, trace};

/// Snapshot record a feature is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureGroup {
    General,
    AwesomeBar,
    HomescreenSections,
    JumpBackInSyncedTab,
    SponsoredPocket,
    TabTray,
    Grouping,
    SponsoredTiles,
    StartAtHome,
    Wallpapers,
    WallpaperOnboarding,
    Onboarding,
    ContextualHints,
    HintCopy,
    Mr2022Override,
}

/// One row of the routing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub feature: FeatureId,
    /// Group the feature belongs to on its own
    pub natural: FeatureGroup,
    /// Group that takes precedence while overrides are applied
    #[serde(rename = "override")]
    pub override_group: Option<FeatureGroup>,
}

const fn route(feature: FeatureId, natural: FeatureGroup) -> Route {
    Route {
        feature,
        natural,
        override_group: None,
    }
}

const fn overridden(feature: FeatureId, natural: FeatureGroup) -> Route {
    Route {
        feature,
        natural,
        override_group: Some(FeatureGroup::Mr2022Override),
    }
}

/// Routing table, one row per [`FeatureId`] in [`FeatureId::ALL`] order
pub static ROUTES: [Route; 25] = [
    route(FeatureId::PullToRefresh, FeatureGroup::General),
    route(FeatureId::ReportSiteIssue, FeatureGroup::General),
    route(FeatureId::ShakeToRestore, FeatureGroup::General),
    route(FeatureId::BottomSearchBar, FeatureGroup::AwesomeBar),
    route(FeatureId::SearchHighlights, FeatureGroup::AwesomeBar),
    route(FeatureId::TopSites, FeatureGroup::HomescreenSections),
    route(FeatureId::JumpBackIn, FeatureGroup::HomescreenSections),
    route(FeatureId::RecentlySaved, FeatureGroup::HomescreenSections),
    route(FeatureId::HistoryHighlights, FeatureGroup::HomescreenSections),
    route(FeatureId::Pocket, FeatureGroup::HomescreenSections),
    route(FeatureId::JumpBackInSyncedTab, FeatureGroup::JumpBackInSyncedTab),
    route(FeatureId::SponsoredPocket, FeatureGroup::SponsoredPocket),
    route(FeatureId::InactiveTabs, FeatureGroup::TabTray),
    route(FeatureId::HistoryGroups, FeatureGroup::Grouping),
    route(FeatureId::TabTrayGroups, FeatureGroup::Grouping),
    route(FeatureId::SponsoredTiles, FeatureGroup::SponsoredTiles),
    route(FeatureId::StartAtHome, FeatureGroup::StartAtHome),
    route(FeatureId::Wallpapers, FeatureGroup::Wallpapers),
    route(FeatureId::WallpaperVersion, FeatureGroup::Wallpapers),
    // MR2022 experiment takes over these six until it concludes
    overridden(FeatureId::WallpaperOnboardingSheet, FeatureGroup::WallpaperOnboarding),
    overridden(FeatureId::OnboardingFreshInstall, FeatureGroup::Onboarding),
    overridden(FeatureId::OnboardingUpgrade, FeatureGroup::Onboarding),
    overridden(
        FeatureId::ContextualHintForJumpBackInSyncedTab,
        FeatureGroup::ContextualHints,
    ),
    overridden(FeatureId::CopyForJumpBackIn, FeatureGroup::HintCopy),
    overridden(FeatureId::CopyForToolbar, FeatureGroup::HintCopy),
];

/// Routing table row for a feature
pub fn route_for(feature: FeatureId) -> &'static Route {
    &ROUTES[feature as usize]
}

/// Whether override groups in the routing table take effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverridePolicy {
    #[default]
    Apply,
    Ignore,
}

/// A fully resolved feature, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFeature {
    pub id: FeatureId,
    pub group: FeatureGroup,
    pub enabled: bool,
    /// The boolean, or the raw setting/version string for enum-valued features
    pub value: serde_json::Value,
    pub description: &'static str,
}

/// Resolves feature flags against a configuration snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlagLayer {
    policy: OverridePolicy,
}

impl FeatureFlagLayer {
    /// Layer with the override column applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer that routes every feature through its natural group
    pub fn without_overrides() -> Self {
        Self::with_policy(OverridePolicy::Ignore)
    }

    pub fn with_policy(policy: OverridePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverridePolicy {
        self.policy
    }

    /// Group a feature is read from under this layer's policy
    pub fn group_for(&self, feature: FeatureId) -> FeatureGroup {
        let route = route_for(feature);
        match (self.policy, route.override_group) {
            (OverridePolicy::Apply, Some(group)) => group,
            _ => route.natural,
        }
    }

    /// Whether a feature is enabled in the snapshot
    ///
    /// Start-at-home counts as enabled for any setting other than
    /// [`StartAtHomeSetting::Disabled`]. Wallpaper-version reports the
    /// wallpaper feature's status; use [`wallpaper_version`](Self::wallpaper_version)
    /// for the version itself.
    pub fn check(&self, feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
        let group = self.group_for(feature);
        let enabled = match group {
            FeatureGroup::General => check_general(feature, snapshot),
            FeatureGroup::AwesomeBar => check_awesome_bar(feature, snapshot),
            FeatureGroup::HomescreenSections => check_homescreen_section(feature, snapshot),
            FeatureGroup::JumpBackInSyncedTab => snapshot.homescreen_feature.jump_back_in_synced_tab,
            FeatureGroup::SponsoredPocket => snapshot.homescreen_feature.pocket_sponsored_stories,
            FeatureGroup::TabTray => check_tab_tray(feature, snapshot),
            FeatureGroup::Grouping => check_grouping(feature, snapshot),
            FeatureGroup::SponsoredTiles => snapshot.homescreen_feature.sponsored_tiles.status,
            FeatureGroup::StartAtHome => self.start_at_home(snapshot) != StartAtHomeSetting::Disabled,
            FeatureGroup::Wallpapers => snapshot.wallpaper_feature.configuration.status,
            FeatureGroup::WallpaperOnboarding => snapshot.wallpaper_feature.onboarding_sheet,
            FeatureGroup::Onboarding => check_onboarding(feature, snapshot),
            FeatureGroup::ContextualHints => check_contextual_hints(feature, snapshot),
            FeatureGroup::HintCopy => check_hint_copy(feature, snapshot),
            FeatureGroup::Mr2022Override => check_mr_2022(feature, snapshot),
        };

        debug!(feature = %feature, group = ?group, enabled, "resolved feature flag");
        enabled
    }

    /// Start-at-home setting, [`StartAtHomeSetting::Disabled`] when unset
    pub fn start_at_home(&self, snapshot: &ConfigurationSnapshot) -> StartAtHomeSetting {
        snapshot.start_at_home_feature.setting
    }

    /// Raw wallpaper collection version, e.g. `"legacy"` or `"v1"`
    pub fn wallpaper_version(&self, snapshot: &ConfigurationSnapshot) -> String {
        snapshot
            .wallpaper_feature
            .configuration
            .version
            .as_str()
            .to_string()
    }

    /// Resolve one feature with its group, value and description
    pub fn resolve(&self, feature: FeatureId, snapshot: &ConfigurationSnapshot) -> ResolvedFeature {
        let enabled = self.check(feature, snapshot);
        let value = match feature {
            FeatureId::StartAtHome => {
                serde_json::Value::String(self.start_at_home(snapshot).as_str().to_string())
            }
            FeatureId::WallpaperVersion => {
                serde_json::Value::String(self.wallpaper_version(snapshot))
            }
            _ => serde_json::Value::Bool(enabled),
        };

        ResolvedFeature {
            id: feature,
            group: self.group_for(feature),
            enabled,
            value,
            description: feature_description(feature),
        }
    }

    /// Resolve every feature, in [`FeatureId::ALL`] order
    pub fn resolve_all(&self, snapshot: &ConfigurationSnapshot) -> Vec<ResolvedFeature> {
        FeatureId::ALL
            .iter()
            .map(|&feature| self.resolve(feature, snapshot))
            .collect()
    }
}

fn section_enabled(sections: &SectionMap, key: &str) -> bool {
    match sections.get(key) {
        Some(&status) => status,
        None => {
            trace!(key, "section missing from snapshot, treating as disabled");
            false
        }
    }
}

fn check_general(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let config = &snapshot.general_app_features;

    match feature {
        FeatureId::PullToRefresh => config.pull_to_refresh.status,
        FeatureId::ReportSiteIssue => config.report_site_issue.status,
        FeatureId::ShakeToRestore => config.shake_to_restore.status,
        _ => false,
    }
}

fn check_awesome_bar(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let config = &snapshot.search.awesome_bar;

    match feature {
        FeatureId::BottomSearchBar => config.position.is_position_feature_enabled,
        FeatureId::SearchHighlights => config.search_highlights,
        _ => false,
    }
}

fn check_homescreen_section(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let section = match feature {
        FeatureId::TopSites => HomeScreenSection::TopSites,
        FeatureId::JumpBackIn => HomeScreenSection::JumpBackIn,
        FeatureId::RecentlySaved => HomeScreenSection::RecentlySaved,
        FeatureId::HistoryHighlights => HomeScreenSection::RecentExplorations,
        FeatureId::Pocket => HomeScreenSection::Pocket,
        _ => return false,
    };

    section_enabled(&snapshot.homescreen_feature.sections_enabled, section.key())
}

fn check_tab_tray(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let section = match feature {
        FeatureId::InactiveTabs => TabTraySection::InactiveTabs,
        _ => return false,
    };

    section_enabled(&snapshot.tab_tray_feature.sections_enabled, section.key())
}

fn check_grouping(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let group = match feature {
        FeatureId::HistoryGroups => SearchTermGroup::HistoryGroups,
        FeatureId::TabTrayGroups => SearchTermGroup::TabTrayGroups,
        _ => return false,
    };

    section_enabled(&snapshot.search_term_groups_feature.grouping_enabled, group.key())
}

fn check_onboarding(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let config = &snapshot.onboarding_feature;

    match feature {
        FeatureId::OnboardingUpgrade => config.upgrade_flow,
        FeatureId::OnboardingFreshInstall => config.first_run_flow,
        _ => false,
    }
}

fn check_contextual_hints(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let hint = match feature {
        FeatureId::ContextualHintForJumpBackInSyncedTab => ContextualHintId::JumpBackInSyncedTab,
        _ => return false,
    };

    section_enabled(&snapshot.contextual_hint_feature.features_enabled, hint.key())
}

fn check_hint_copy(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let config = &snapshot.contextual_hint_feature.hint_copy;

    match feature {
        FeatureId::CopyForJumpBackIn => config.jump_back_in,
        FeatureId::CopyForToolbar => config.toolbar,
        _ => false,
    }
}

fn check_mr_2022(feature: FeatureId, snapshot: &ConfigurationSnapshot) -> bool {
    let config = &snapshot.mr_2022.sections_enabled;

    match feature {
        FeatureId::WallpaperOnboardingSheet => config.wallpaper_onboarding_sheet,
        FeatureId::OnboardingFreshInstall => config.onboarding_first_run_flow,
        FeatureId::OnboardingUpgrade => config.onboarding_upgrade_flow,
        FeatureId::ContextualHintForJumpBackInSyncedTab => config.sync_cfr,
        FeatureId::CopyForJumpBackIn => config.jump_back_in_cfr_update,
        FeatureId::CopyForToolbar => config.toolbar_cfr_update,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn snapshot(json: &str) -> ConfigurationSnapshot {
        ConfigurationSnapshot::from_json_str(json).unwrap()
    }

    /// Every boolean in every group switched on
    fn everything_enabled() -> ConfigurationSnapshot {
        snapshot(
            r#"{
                "general-app-features": {
                    "pull-to-refresh": { "status": true },
                    "report-site-issue": { "status": true },
                    "shake-to-restore": { "status": true }
                },
                "search": {
                    "awesome-bar": {
                        "position": { "is-position-feature-enabled": true, "is-bottom": true },
                        "search-highlights": true
                    }
                },
                "homescreen-feature": {
                    "sections-enabled": {
                        "top-sites": true, "jump-back-in": true, "recently-saved": true,
                        "recent-explorations": true, "pocket": true
                    },
                    "jump-back-in-synced-tab": true,
                    "pocket-sponsored-stories": true,
                    "sponsored-tiles": { "status": true }
                },
                "contextual-hint-feature": {
                    "features-enabled": { "jump-back-in-synced-tab-contextual-hint": true },
                    "hint-copy": { "jump-back-in": true, "toolbar": true }
                },
                "tab-tray-feature": { "sections-enabled": { "inactive-tabs": true } },
                "search-term-groups-feature": {
                    "grouping-enabled": { "history-groups": true, "tab-tray-groups": true }
                },
                "onboarding-feature": { "first-run-flow": true, "upgrade-flow": true },
                "start-at-home-feature": { "setting": "always" },
                "wallpaper-feature": {
                    "configuration": { "status": true, "version": "v1" },
                    "onboarding-sheet": true
                },
                "mr-2022": {
                    "sections-enabled": {
                        "wallpaper-onboarding-sheet": true,
                        "onboarding-first-run-flow": true,
                        "onboarding-upgrade-flow": true,
                        "sync-cfr": true,
                        "jump-back-in-cfr-update": true,
                        "toolbar-cfr-update": true
                    }
                }
            }"#,
        )
    }

    #[test]
    fn test_routes_follow_feature_order() {
        for (index, feature) in FeatureId::ALL.iter().enumerate() {
            assert_eq!(ROUTES[index].feature, *feature);
            assert_eq!(route_for(*feature).feature, *feature);
        }
    }

    #[test]
    fn test_every_feature_routed_exactly_once() {
        let routed: HashSet<_> = ROUTES.iter().map(|r| r.feature).collect();
        assert_eq!(routed.len(), ROUTES.len());
        assert_eq!(routed.len(), FeatureId::ALL.len());
    }

    #[test]
    fn test_override_rows() {
        let overridden: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.override_group.is_some())
            .map(|r| r.feature)
            .collect();
        assert_eq!(
            overridden,
            vec![
                FeatureId::WallpaperOnboardingSheet,
                FeatureId::OnboardingFreshInstall,
                FeatureId::OnboardingUpgrade,
                FeatureId::ContextualHintForJumpBackInSyncedTab,
                FeatureId::CopyForJumpBackIn,
                FeatureId::CopyForToolbar,
            ]
        );
    }

    #[test]
    fn test_group_for_respects_policy() {
        let applied = FeatureFlagLayer::new();
        let ignored = FeatureFlagLayer::without_overrides();

        assert_eq!(applied.group_for(FeatureId::CopyForToolbar), FeatureGroup::Mr2022Override);
        assert_eq!(ignored.group_for(FeatureId::CopyForToolbar), FeatureGroup::HintCopy);
        assert_eq!(
            ignored.group_for(FeatureId::ContextualHintForJumpBackInSyncedTab),
            FeatureGroup::ContextualHints
        );
        assert_eq!(applied.group_for(FeatureId::Pocket), FeatureGroup::HomescreenSections);
        assert_eq!(ignored.group_for(FeatureId::Pocket), FeatureGroup::HomescreenSections);
    }

    #[test]
    fn test_empty_snapshot_disables_everything() {
        let empty = ConfigurationSnapshot::default();
        for layer in [FeatureFlagLayer::new(), FeatureFlagLayer::without_overrides()] {
            for feature in FeatureId::ALL {
                assert!(!layer.check(feature, &empty), "{} should be off", feature);
            }
        }
    }

    #[test]
    fn test_everything_enabled_enables_everything() {
        let full = everything_enabled();
        for layer in [FeatureFlagLayer::new(), FeatureFlagLayer::without_overrides()] {
            for feature in FeatureId::ALL {
                assert!(layer.check(feature, &full), "{} should be on", feature);
            }
        }
    }

    #[test]
    fn test_general_features() {
        let config = snapshot(
            r#"{ "general-app-features": {
                "pull-to-refresh": { "status": true },
                "shake-to-restore": { "status": false }
            } }"#,
        );
        let flags = FeatureFlagLayer::new();
        assert!(flags.check(FeatureId::PullToRefresh, &config));
        assert!(!flags.check(FeatureId::ReportSiteIssue, &config));
        assert!(!flags.check(FeatureId::ShakeToRestore, &config));
    }

    #[test]
    fn test_bottom_search_bar_reads_position_feature_flag() {
        let config = snapshot(
            r#"{ "search": { "awesome-bar": {
                "position": { "is-position-feature-enabled": true, "is-bottom": false }
            } } }"#,
        );
        let flags = FeatureFlagLayer::new();
        assert!(flags.check(FeatureId::BottomSearchBar, &config));
        assert!(!flags.check(FeatureId::SearchHighlights, &config));
    }

    #[test]
    fn test_history_highlights_reads_recent_explorations() {
        let config = snapshot(
            r#"{ "homescreen-feature": { "sections-enabled": {
                "recent-explorations": true, "history-highlights": false
            } } }"#,
        );
        assert!(FeatureFlagLayer::new().check(FeatureId::HistoryHighlights, &config));
    }

    #[test]
    fn test_missing_keys_resolve_false() {
        let config = snapshot(
            r#"{
                "homescreen-feature": { "sections-enabled": { "pocket": true } },
                "tab-tray-feature": { "sections-enabled": { "something-else": true } },
                "search-term-groups-feature": { "grouping-enabled": { "history-groups": true } }
            }"#,
        );
        let flags = FeatureFlagLayer::new();
        assert!(flags.check(FeatureId::Pocket, &config));
        assert!(!flags.check(FeatureId::TopSites, &config));
        assert!(!flags.check(FeatureId::JumpBackIn, &config));
        assert!(!flags.check(FeatureId::InactiveTabs, &config));
        assert!(flags.check(FeatureId::HistoryGroups, &config));
        assert!(!flags.check(FeatureId::TabTrayGroups, &config));
    }

    #[test]
    fn test_override_wins_over_natural_group() {
        // Natural groups on, experiment record off
        let config = snapshot(
            r#"{
                "contextual-hint-feature": {
                    "features-enabled": { "jump-back-in-synced-tab-contextual-hint": true },
                    "hint-copy": { "jump-back-in": true, "toolbar": true }
                },
                "onboarding-feature": { "first-run-flow": true, "upgrade-flow": true },
                "wallpaper-feature": { "onboarding-sheet": true },
                "mr-2022": { "sections-enabled": {} }
            }"#,
        );
        let applied = FeatureFlagLayer::new();
        let ignored = FeatureFlagLayer::without_overrides();

        for route in ROUTES.iter().filter(|r| r.override_group.is_some()) {
            assert!(!applied.check(route.feature, &config), "{} read its natural group", route.feature);
            assert!(ignored.check(route.feature, &config), "{} ignored its natural group", route.feature);
        }
    }

    #[test]
    fn test_override_reads_named_fields() {
        let config = snapshot(
            r#"{ "mr-2022": { "sections-enabled": {
                "onboarding-first-run-flow": true,
                "jump-back-in-cfr-update": true
            } } }"#,
        );
        let flags = FeatureFlagLayer::new();
        assert!(flags.check(FeatureId::OnboardingFreshInstall, &config));
        assert!(!flags.check(FeatureId::OnboardingUpgrade, &config));
        assert!(flags.check(FeatureId::CopyForJumpBackIn, &config));
        assert!(!flags.check(FeatureId::CopyForToolbar, &config));
        assert!(!flags.check(FeatureId::WallpaperOnboardingSheet, &config));
        assert!(!flags.check(FeatureId::ContextualHintForJumpBackInSyncedTab, &config));
    }

    #[test]
    fn test_unmapped_feature_in_group_is_false() {
        let full = everything_enabled();
        assert!(!check_general(FeatureId::Pocket, &full));
        assert!(!check_awesome_bar(FeatureId::PullToRefresh, &full));
        assert!(!check_homescreen_section(FeatureId::InactiveTabs, &full));
        assert!(!check_tab_tray(FeatureId::HistoryGroups, &full));
        assert!(!check_grouping(FeatureId::InactiveTabs, &full));
        assert!(!check_onboarding(FeatureId::CopyForToolbar, &full));
        assert!(!check_contextual_hints(FeatureId::JumpBackIn, &full));
        assert!(!check_hint_copy(FeatureId::Wallpapers, &full));
        assert!(!check_mr_2022(FeatureId::TopSites, &full));
    }

    #[test]
    fn test_start_at_home() {
        let flags = FeatureFlagLayer::new();

        let config = snapshot(r#"{ "start-at-home-feature": { "setting": "after-four-hours" } }"#);
        assert_eq!(flags.start_at_home(&config), StartAtHomeSetting::AfterFourHours);
        assert!(flags.check(FeatureId::StartAtHome, &config));

        let config = snapshot(r#"{ "start-at-home-feature": { "setting": "disabled" } }"#);
        assert_eq!(flags.start_at_home(&config), StartAtHomeSetting::Disabled);
        assert!(!flags.check(FeatureId::StartAtHome, &config));

        let config = snapshot(r#"{ "start-at-home-feature": {} }"#);
        assert_eq!(flags.start_at_home(&config), StartAtHomeSetting::Disabled);

        let config = snapshot(r#"{ "start-at-home-feature": { "setting": "on-tuesdays" } }"#);
        assert_eq!(flags.start_at_home(&config), StartAtHomeSetting::Disabled);
    }

    #[test]
    fn test_wallpaper_version_is_raw_string() {
        let flags = FeatureFlagLayer::new();
        let config = snapshot(r#"{ "wallpaper-feature": { "configuration": { "version": "v1" } } }"#);
        assert_eq!(flags.wallpaper_version(&config), "v1");
        assert!(!flags.check(FeatureId::WallpaperVersion, &config));
        assert_eq!(flags.wallpaper_version(&ConfigurationSnapshot::default()), "legacy");
    }

    #[test]
    fn test_resolve_values() {
        let flags = FeatureFlagLayer::new();
        let full = everything_enabled();

        let start = flags.resolve(FeatureId::StartAtHome, &full);
        assert_eq!(start.value, serde_json::json!("always"));
        assert!(start.enabled);

        let version = flags.resolve(FeatureId::WallpaperVersion, &full);
        assert_eq!(version.value, serde_json::json!("v1"));
        assert_eq!(version.group, FeatureGroup::Wallpapers);

        let pocket = flags.resolve(FeatureId::Pocket, &full);
        assert_eq!(pocket.value, serde_json::json!(true));
        assert!(!pocket.description.is_empty());
    }

    #[test]
    fn test_resolve_all_order() {
        let resolved = FeatureFlagLayer::new().resolve_all(&ConfigurationSnapshot::default());
        let ids: Vec<_> = resolved.iter().map(|r| r.id).collect();
        assert_eq!(ids, FeatureId::ALL.to_vec());
    }

    #[test]
    fn test_resolved_feature_serializes_kebab_case() {
        let resolved = FeatureFlagLayer::new().resolve(FeatureId::CopyForToolbar, &ConfigurationSnapshot::default());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["id"], "copy-for-toolbar");
        assert_eq!(json["group"], "mr2022-override");
        assert_eq!(json["enabled"], false);
    }
}
