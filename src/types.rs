//! Identifier and value types shared by the resolvers
//!
//! Every enum here has a canonical kebab-case name. That name is what the
//! remote configuration uses as a map key or enum value, what the CLI
//! accepts, and what JSON output prints.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A remotely toggleable browser behavior
///
/// The set is fixed at compile time. Use [`FeatureId::ALL`] to iterate it
/// and [`FeatureId::name`] / [`FromStr`] to convert to and from the
/// canonical name.
///
/// # Example
///
/// ```rust
/// use nimbus_flags::FeatureId;
///
/// let id: FeatureId = "jump-back-in".parse()?;
/// assert_eq!(id, FeatureId::JumpBackIn);
/// assert_eq!(id.to_string(), "jump-back-in");
/// # Ok::<(), nimbus_flags::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureId {
    PullToRefresh,
    ReportSiteIssue,
    ShakeToRestore,
    BottomSearchBar,
    SearchHighlights,
    TopSites,
    JumpBackIn,
    RecentlySaved,
    HistoryHighlights,
    Pocket,
    JumpBackInSyncedTab,
    SponsoredPocket,
    InactiveTabs,
    HistoryGroups,
    TabTrayGroups,
    SponsoredTiles,
    StartAtHome,
    Wallpapers,
    WallpaperVersion,
    WallpaperOnboardingSheet,
    OnboardingFreshInstall,
    OnboardingUpgrade,
    ContextualHintForJumpBackInSyncedTab,
    CopyForJumpBackIn,
    CopyForToolbar,
}

impl FeatureId {
    /// Every feature, in declaration order
    pub const ALL: [FeatureId; 25] = [
        FeatureId::PullToRefresh,
        FeatureId::ReportSiteIssue,
        FeatureId::ShakeToRestore,
        FeatureId::BottomSearchBar,
        FeatureId::SearchHighlights,
        FeatureId::TopSites,
        FeatureId::JumpBackIn,
        FeatureId::RecentlySaved,
        FeatureId::HistoryHighlights,
        FeatureId::Pocket,
        FeatureId::JumpBackInSyncedTab,
        FeatureId::SponsoredPocket,
        FeatureId::InactiveTabs,
        FeatureId::HistoryGroups,
        FeatureId::TabTrayGroups,
        FeatureId::SponsoredTiles,
        FeatureId::StartAtHome,
        FeatureId::Wallpapers,
        FeatureId::WallpaperVersion,
        FeatureId::WallpaperOnboardingSheet,
        FeatureId::OnboardingFreshInstall,
        FeatureId::OnboardingUpgrade,
        FeatureId::ContextualHintForJumpBackInSyncedTab,
        FeatureId::CopyForJumpBackIn,
        FeatureId::CopyForToolbar,
    ];

    /// Canonical kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            FeatureId::PullToRefresh => "pull-to-refresh",
            FeatureId::ReportSiteIssue => "report-site-issue",
            FeatureId::ShakeToRestore => "shake-to-restore",
            FeatureId::BottomSearchBar => "bottom-search-bar",
            FeatureId::SearchHighlights => "search-highlights",
            FeatureId::TopSites => "top-sites",
            FeatureId::JumpBackIn => "jump-back-in",
            FeatureId::RecentlySaved => "recently-saved",
            FeatureId::HistoryHighlights => "history-highlights",
            FeatureId::Pocket => "pocket",
            FeatureId::JumpBackInSyncedTab => "jump-back-in-synced-tab",
            FeatureId::SponsoredPocket => "sponsored-pocket",
            FeatureId::InactiveTabs => "inactive-tabs",
            FeatureId::HistoryGroups => "history-groups",
            FeatureId::TabTrayGroups => "tab-tray-groups",
            FeatureId::SponsoredTiles => "sponsored-tiles",
            FeatureId::StartAtHome => "start-at-home",
            FeatureId::Wallpapers => "wallpapers",
            FeatureId::WallpaperVersion => "wallpaper-version",
            FeatureId::WallpaperOnboardingSheet => "wallpaper-onboarding-sheet",
            FeatureId::OnboardingFreshInstall => "onboarding-fresh-install",
            FeatureId::OnboardingUpgrade => "onboarding-upgrade",
            FeatureId::ContextualHintForJumpBackInSyncedTab => {
                "contextual-hint-for-jump-back-in-synced-tab"
            }
            FeatureId::CopyForJumpBackIn => "copy-for-jump-back-in",
            FeatureId::CopyForToolbar => "copy-for-toolbar",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FeatureId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| Error::UnknownFeature(s.to_string()))
    }
}

/// When the browser should reopen on the homepage instead of the last tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartAtHomeSetting {
    #[default]
    Disabled,
    AfterFourHours,
    Always,
}

impl StartAtHomeSetting {
    pub fn as_str(self) -> &'static str {
        match self {
            StartAtHomeSetting::Disabled => "disabled",
            StartAtHomeSetting::AfterFourHours => "after-four-hours",
            StartAtHomeSetting::Always => "always",
        }
    }

    /// Lenient decode: anything unrecognized is [`StartAtHomeSetting::Disabled`]
    pub(crate) fn from_raw(raw: &str) -> Self {
        match raw {
            "after-four-hours" => StartAtHomeSetting::AfterFourHours,
            "always" => StartAtHomeSetting::Always,
            _ => StartAtHomeSetting::Disabled,
        }
    }
}

/// Wallpaper collection format served to the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallpaperVersion {
    #[default]
    Legacy,
    V1,
}

impl WallpaperVersion {
    /// Raw wire value, e.g. `"legacy"` or `"v1"`
    pub fn as_str(self) -> &'static str {
        match self {
            WallpaperVersion::Legacy => "legacy",
            WallpaperVersion::V1 => "v1",
        }
    }

    pub(crate) fn from_raw(raw: &str) -> Self {
        match raw {
            "v1" => WallpaperVersion::V1,
            _ => WallpaperVersion::Legacy,
        }
    }
}

/// Homepage sections toggled through `homescreen-feature.sections-enabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeScreenSection {
    TopSites,
    JumpBackIn,
    RecentlySaved,
    RecentExplorations,
    Pocket,
}

impl HomeScreenSection {
    pub fn key(self) -> &'static str {
        match self {
            HomeScreenSection::TopSites => "top-sites",
            HomeScreenSection::JumpBackIn => "jump-back-in",
            HomeScreenSection::RecentlySaved => "recently-saved",
            HomeScreenSection::RecentExplorations => "recent-explorations",
            HomeScreenSection::Pocket => "pocket",
        }
    }
}

/// Tab tray sections toggled through `tab-tray-feature.sections-enabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabTraySection {
    InactiveTabs,
}

impl TabTraySection {
    pub fn key(self) -> &'static str {
        match self {
            TabTraySection::InactiveTabs => "inactive-tabs",
        }
    }
}

/// Search term grouping toggled through `search-term-groups-feature.grouping-enabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTermGroup {
    HistoryGroups,
    TabTrayGroups,
}

impl SearchTermGroup {
    pub fn key(self) -> &'static str {
        match self {
            SearchTermGroup::HistoryGroups => "history-groups",
            SearchTermGroup::TabTrayGroups => "tab-tray-groups",
        }
    }
}

/// Hints toggled through `contextual-hint-feature.features-enabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextualHintId {
    JumpBackInSyncedTab,
}

impl ContextualHintId {
    pub fn key(self) -> &'static str {
        match self {
            ContextualHintId::JumpBackInSyncedTab => "jump-back-in-synced-tab-contextual-hint",
        }
    }
}
