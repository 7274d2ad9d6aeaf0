//! Feature descriptions
//!
//! Human-readable explanations for each feature flag, stored in a static
//! HashMap and surfaced in JSON array output.

use crate::types::FeatureId;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Static lookup table for feature explanations
///
/// Every [`FeatureId`] must have an entry here.
///
/// # Writing Good Descriptions
/// - Describe the behavior the flag gates, not the flag itself
/// - Mention which configuration record it is read from when that is not obvious
/// - Keep it to one sentence
static FEATURE_DESCRIPTIONS: OnceLock<HashMap<FeatureId, &'static str>> = OnceLock::new();

/// Get the description for a feature
///
/// Returns an empty string for a feature without an entry.
pub(crate) fn feature_description(feature: FeatureId) -> &'static str {
    FEATURE_DESCRIPTIONS
        .get_or_init(|| {
            HashMap::from([
                // General app features
                (
                    FeatureId::PullToRefresh,
                    "Lets users reload the current page by pulling down on the web view.",
                ),
                (
                    FeatureId::ReportSiteIssue,
                    "Shows the menu entry for reporting a broken site to webcompat.",
                ),
                (
                    FeatureId::ShakeToRestore,
                    "Reopens the most recently closed tab when the device is shaken.",
                ),
                // Search
                (
                    FeatureId::BottomSearchBar,
                    "Allows the address bar to be moved between the top and bottom of the screen.",
                ),
                (
                    FeatureId::SearchHighlights,
                    "Shows history highlights as suggestions in the awesome bar.",
                ),
                // Homepage sections
                (
                    FeatureId::TopSites,
                    "Shows the shortcuts section with frequently visited and pinned sites on the homepage.",
                ),
                (
                    FeatureId::JumpBackIn,
                    "Shows recently used tabs on the homepage so users can pick up where they left off.",
                ),
                (
                    FeatureId::RecentlySaved,
                    "Shows recently added bookmarks and reading list items on the homepage.",
                ),
                (
                    FeatureId::HistoryHighlights,
                    "Shows recent explorations, grouped browsing history, on the homepage.",
                ),
                (
                    FeatureId::Pocket,
                    "Shows stories recommended by Pocket at the bottom of the homepage.",
                ),
                (
                    FeatureId::JumpBackInSyncedTab,
                    "Includes the most recent tab from another synced device in jump back in.",
                ),
                (
                    FeatureId::SponsoredPocket,
                    "Mixes sponsored stories into the Pocket recommendations.",
                ),
                (
                    FeatureId::SponsoredTiles,
                    "Fills part of the shortcuts section with sponsored tiles.",
                ),
                // Tabs
                (
                    FeatureId::InactiveTabs,
                    "Moves tabs that have not been viewed for two weeks into an inactive section of the tab tray.",
                ),
                (
                    FeatureId::HistoryGroups,
                    "Groups history entries that came from the same search term.",
                ),
                (
                    FeatureId::TabTrayGroups,
                    "Groups tabs in the tab tray that came from the same search term.",
                ),
                (
                    FeatureId::StartAtHome,
                    "Opens the homepage instead of the last tab after the app has been in the background. \
              Reported as enabled for any setting other than disabled.",
                ),
                // Wallpapers
                (
                    FeatureId::Wallpapers,
                    "Enables homepage wallpapers and the wallpaper settings screen.",
                ),
                (
                    FeatureId::WallpaperVersion,
                    "Selects the wallpaper collection format to download; its value is the raw version string.",
                ),
                // MR2022 experiment
                (
                    FeatureId::WallpaperOnboardingSheet,
                    "Presents the wallpaper picker sheet the first time the homepage is shown after an update. \
              Read from the mr-2022 experiment while it is active.",
                ),
                (
                    FeatureId::OnboardingFreshInstall,
                    "Shows the first-run onboarding flow on a fresh install. \
              Read from the mr-2022 experiment while it is active.",
                ),
                (
                    FeatureId::OnboardingUpgrade,
                    "Shows the upgrade onboarding flow to existing users after a major update. \
              Read from the mr-2022 experiment while it is active.",
                ),
                (
                    FeatureId::ContextualHintForJumpBackInSyncedTab,
                    "Shows a hint bubble pointing at a synced tab in jump back in. \
              Read from the mr-2022 experiment while it is active.",
                ),
                (
                    FeatureId::CopyForJumpBackIn,
                    "Uses the updated wording for the jump back in hint. \
              Read from the mr-2022 experiment while it is active.",
                ),
                (
                    FeatureId::CopyForToolbar,
                    "Uses the updated wording for the toolbar placement hint. \
              Read from the mr-2022 experiment while it is active.",
                ),
            ])
        })
        .get(&feature)
        .copied()
        .unwrap_or("")
}
