//! # nimbus-flags - Feature Flag Resolution Library
//!
//! This library resolves a browser's remotely configured feature flags. It
//! reads a configuration snapshot handed out by a remote-configuration
//! (Nimbus) client and answers "is this feature on?" through fixed decision
//! tables, and picks the copy for contextual hint bubbles based on those
//! flags.
//!
//! ## Features
//!
//! - Decode configuration snapshots from JSON, tolerating unknown and missing keys
//! - Layer bundled defaults, remote payloads and local overrides with precedence
//! - Resolve every [`FeatureId`] through a static routing table, including
//!   the temporary MR2022 experiment override
//! - Resolve the start-at-home setting and wallpaper collection version
//! - Select contextual hint copy by hint, copy kind and arrow direction
//! - Query resolved features using glob patterns (e.g. `"wallpaper*"`)
//!
//! ## Quick Start
//!
//! ### Checking Feature Flags
//!
//! ```rust
//! use nimbus_flags::{ConfigurationSnapshot, FeatureFlagLayer, FeatureId, StartAtHomeSetting};
//!
//! let snapshot = ConfigurationSnapshot::from_json_str(r#"{
//!     "general-app-features": { "pull-to-refresh": { "status": true } },
//!     "tab-tray-feature": { "sections-enabled": { "inactive-tabs": true } },
//!     "start-at-home-feature": { "setting": "after-four-hours" }
//! }"#)?;
//!
//! let flags = FeatureFlagLayer::new();
//! assert!(flags.check(FeatureId::PullToRefresh, &snapshot));
//! assert!(flags.check(FeatureId::InactiveTabs, &snapshot));
//! assert!(!flags.check(FeatureId::ShakeToRestore, &snapshot));
//! assert_eq!(flags.start_at_home(&snapshot), StartAtHomeSetting::AfterFourHours);
//! # Ok::<(), nimbus_flags::Error>(())
//! ```
//!
//! ### Contextual Hint Copy
//!
//! ```rust
//! use nimbus_flags::{ArrowDirection, ConfigurationSnapshot, ContextualHintCopyProvider, CopyKind, HintType};
//!
//! let snapshot = ConfigurationSnapshot::from_json_str(r#"{
//!     "mr-2022": { "sections-enabled": { "toolbar-cfr-update": true } }
//! }"#)?;
//!
//! let provider = ContextualHintCopyProvider::new(&snapshot, Some(ArrowDirection::Up));
//! println!("{}", provider.copy_for(CopyKind::Description, HintType::ToolbarLocation));
//! # Ok::<(), nimbus_flags::Error>(())
//! ```
//!
//! ### Layering Snapshots
//!
//! ```rust,no_run
//! use nimbus_flags::{merge_snapshot_layers, FeatureFlagLayer, LayerKind, MergeConfig, SnapshotLayer};
//!
//! let layers = [
//!     SnapshotLayer::new(LayerKind::Defaults, "defaults.json"),
//!     SnapshotLayer::new(LayerKind::Remote, "experiments.json"),
//!     SnapshotLayer::new(LayerKind::Override, "local.json"),
//! ];
//! let merged = merge_snapshot_layers(&layers, &MergeConfig::default())?;
//!
//! for feature in FeatureFlagLayer::new().resolve_all(&merged.snapshot) {
//!     println!("{:<45} {}", feature.id.name(), feature.value);
//! }
//! # Ok::<(), nimbus_flags::Error>(())
//! ```
//!
//! ### Querying Features
//!
//! ```rust
//! use nimbus_flags::{query_features, ConfigurationSnapshot, FeatureFlagLayer};
//!
//! let resolved = FeatureFlagLayer::new().resolve_all(&ConfigurationSnapshot::default());
//! let onboarding = query_features(&resolved, &["onboarding-*"])?;
//! assert_eq!(onboarding.len(), 2);
//! # Ok::<(), nimbus_flags::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Resolution never fails: a key missing from the snapshot resolves to
//! `false`, [`StartAtHomeSetting::Disabled`] or an empty string. Loading a
//! snapshot and parsing names return [`Result<T, Error>`]:
//!
//! ```rust
//! use nimbus_flags::{ConfigurationSnapshot, Error};
//!
//! match ConfigurationSnapshot::from_json_str(r#"{ "search": "#) {
//!     Ok(_) => println!("Loaded"),
//!     Err(Error::Snapshot { origin, message }) => eprintln!("Bad snapshot from {}: {}", origin, message),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

// Re-export all public types at crate root
pub use types::{
    ContextualHintId, FeatureId, HomeScreenSection, SearchTermGroup, StartAtHomeSetting,
    TabTraySection, WallpaperVersion,
};

// Re-export error types
pub use error::{Error, Result};

// Re-export snapshot records
pub use snapshot::{
    AwesomeBar, ConfigurationSnapshot, ContextualHintFeature, FeatureStatus, GeneralAppFeatures,
    HintCopy, HomescreenFeature, Mr2022Feature, Mr2022Sections, OnboardingFeature,
    SearchBarPosition, SearchFeature, SearchTermGroupsFeature, SectionMap, StartAtHomeFeature,
    TabTrayFeature, WallpaperConfiguration, WallpaperFeature,
};

// Re-export snapshot_merger
pub use snapshot_merger::{
    merge_snapshot_layers, LayerKind, MergeConfig, MergedSnapshot, SnapshotLayer,
};

// Re-export resolvers
pub use feature_flags::{
    route_for, FeatureFlagLayer, FeatureGroup, OverridePolicy, ResolvedFeature, Route, ROUTES,
};
pub use hint_copy::{ArrowDirection, ContextualHintCopyProvider, CopyKind, HintType};
pub use query::query_features;

pub mod strings;

// Remaining modules are private - use re-exports above for public API
mod descriptions;
mod error;
mod feature_flags;
mod hint_copy;
mod query;
mod snapshot;
mod snapshot_merger;
mod types;
