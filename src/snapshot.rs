//! Configuration snapshot records
//!
//! A [`ConfigurationSnapshot`] is an immutable read of the remote
//! configuration: a map from feature-group name to that group's record.
//! The schema belongs to the remote-configuration service, so decoding is
//! forgiving:
//!
//! - every group, field and map is optional and reads as its default
//!   (`false`, empty map, `disabled`, `legacy`) when absent
//! - unknown groups, fields and map keys are ignored
//! - enum-valued fields decode unknown values to their default variant
//!
//! Only malformed JSON, a top level or record that is not a JSON object, or a
//! wrongly typed boolean/map field fails a load.
//!
//! # Example
//!
//! ```rust
//! use nimbus_flags::{ConfigurationSnapshot, StartAtHomeSetting};
//!
//! let snapshot = ConfigurationSnapshot::from_json_str(r#"{
//!     "homescreen-feature": { "sections-enabled": { "jump-back-in": true } },
//!     "start-at-home-feature": { "setting": "after-four-hours" }
//! }"#)?;
//!
//! assert_eq!(snapshot.homescreen_feature.sections_enabled.get("jump-back-in"), Some(&true));
//! assert_eq!(snapshot.start_at_home_feature.setting, StartAtHomeSetting::AfterFourHours);
//! # Ok::<(), nimbus_flags::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::types::{StartAtHomeSetting, WallpaperVersion};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Per-key enablement map, keyed by the raw section id
pub type SectionMap = BTreeMap<String, bool>;

/// Read-only view of the remote configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfigurationSnapshot {
    #[serde(deserialize_with = "record")]
    pub general_app_features: GeneralAppFeatures,
    #[serde(deserialize_with = "record")]
    pub search: SearchFeature,
    #[serde(deserialize_with = "record")]
    pub homescreen_feature: HomescreenFeature,
    #[serde(deserialize_with = "record")]
    pub contextual_hint_feature: ContextualHintFeature,
    #[serde(deserialize_with = "record")]
    pub tab_tray_feature: TabTrayFeature,
    #[serde(deserialize_with = "record")]
    pub search_term_groups_feature: SearchTermGroupsFeature,
    #[serde(deserialize_with = "record")]
    pub onboarding_feature: OnboardingFeature,
    #[serde(deserialize_with = "record")]
    pub start_at_home_feature: StartAtHomeFeature,
    #[serde(deserialize_with = "record")]
    pub wallpaper_feature: WallpaperFeature,
    #[serde(rename = "mr-2022", deserialize_with = "record")]
    pub mr_2022: Mr2022Feature,
}

/// `{ "status": bool }` wrapper used by several groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureStatus {
    pub status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneralAppFeatures {
    #[serde(deserialize_with = "record")]
    pub pull_to_refresh: FeatureStatus,
    #[serde(deserialize_with = "record")]
    pub report_site_issue: FeatureStatus,
    #[serde(deserialize_with = "record")]
    pub shake_to_restore: FeatureStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchFeature {
    #[serde(deserialize_with = "record")]
    pub awesome_bar: AwesomeBar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AwesomeBar {
    #[serde(deserialize_with = "record")]
    pub position: SearchBarPosition,
    pub search_highlights: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchBarPosition {
    /// Whether users may move the search bar at all
    pub is_position_feature_enabled: bool,
    /// Whether the bar starts at the bottom for new installs
    pub is_bottom: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HomescreenFeature {
    pub sections_enabled: SectionMap,
    pub jump_back_in_synced_tab: bool,
    pub pocket_sponsored_stories: bool,
    #[serde(deserialize_with = "record")]
    pub sponsored_tiles: FeatureStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContextualHintFeature {
    pub features_enabled: SectionMap,
    #[serde(deserialize_with = "record")]
    pub hint_copy: HintCopy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HintCopy {
    pub jump_back_in: bool,
    pub toolbar: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TabTrayFeature {
    pub sections_enabled: SectionMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchTermGroupsFeature {
    pub grouping_enabled: SectionMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OnboardingFeature {
    pub first_run_flow: bool,
    pub upgrade_flow: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StartAtHomeFeature {
    #[serde(deserialize_with = "lenient_start_at_home")]
    pub setting: StartAtHomeSetting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WallpaperFeature {
    #[serde(deserialize_with = "record")]
    pub configuration: WallpaperConfiguration,
    pub onboarding_sheet: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WallpaperConfiguration {
    pub status: bool,
    #[serde(deserialize_with = "lenient_wallpaper_version")]
    pub version: WallpaperVersion,
}

/// Temporary experiment record that takes over six flags from their own groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Mr2022Feature {
    #[serde(deserialize_with = "record")]
    pub sections_enabled: Mr2022Sections,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Mr2022Sections {
    pub wallpaper_onboarding_sheet: bool,
    pub onboarding_first_run_flow: bool,
    pub onboarding_upgrade_flow: bool,
    pub sync_cfr: bool,
    pub jump_back_in_cfr_update: bool,
    pub toolbar_cfr_update: bool,
}

/// Decode a record, which must be a JSON object rather than a positional array
fn record<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => T::deserialize(value).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_start_at_home<'de, D>(deserializer: D) -> std::result::Result<StartAtHomeSetting, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(StartAtHomeSetting::from_raw)
        .unwrap_or_default())
}

fn lenient_wallpaper_version<'de, D>(deserializer: D) -> std::result::Result<WallpaperVersion, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(WallpaperVersion::from_raw)
        .unwrap_or_default())
}

impl ConfigurationSnapshot {
    /// Decode a snapshot from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value = serde_json::from_str(content).map_err(|e| Error::snapshot("<string>", e))?;
        Self::decode("<string>", value)
    }

    /// Decode a snapshot from an already parsed JSON value
    pub fn from_json_value(value: Value) -> Result<Self> {
        Self::decode("<value>", value)
    }

    /// Read and decode a snapshot file
    ///
    /// This is a convenience function that reads the file and decodes it in one step.
    pub fn from_file(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path)?;
        let value = serde_json::from_str(&content).map_err(|e| Error::snapshot(origin.as_str(), e))?;
        let snapshot = Self::decode(&origin, value)?;
        debug!(path = %path.display(), "loaded configuration snapshot");
        Ok(snapshot)
    }

    /// Shared decode path; the top level must be a JSON object
    pub(crate) fn decode(origin: &str, value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Snapshot {
                origin: origin.to_string(),
                message: format!("top level must be a JSON object, found {}", json_kind(&value)),
            });
        }

        serde_json::from_value(value).map_err(|e| Error::snapshot(origin, e))
    }
}
