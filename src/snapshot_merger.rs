//! Snapshot layer merger
//!
//! This module combines configuration snapshots from multiple JSON files
//! (bundled defaults, the remote experiment payload, local developer
//! overrides) into one [`ConfigurationSnapshot`] with proper precedence
//! handling.

use crate::error::{Error, Result};
use crate::snapshot::ConfigurationSnapshot;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a snapshot layer comes from
///
/// Layers are usually given lowest precedence first in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    /// Defaults bundled with the application
    Defaults,
    /// Payload delivered by the remote-configuration service
    Remote,
    /// Local overrides, e.g. from a developer settings file
    Override,
}

/// One JSON file contributing to a merged snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLayer {
    pub kind: LayerKind,
    pub path: PathBuf,
}

impl SnapshotLayer {
    pub fn new(kind: LayerKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Configuration for snapshot merging
///
/// # Example
///
/// ```rust
/// use nimbus_flags::MergeConfig;
///
/// let strict = MergeConfig { continue_on_error: false };
/// assert!(MergeConfig::default().continue_on_error);
/// # let _ = strict;
/// ```
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Skip missing or malformed layers with a warning instead of failing
    pub continue_on_error: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            continue_on_error: true,
        }
    }
}

/// Result of merging snapshot layers
#[derive(Debug, Clone)]
pub struct MergedSnapshot {
    pub snapshot: ConfigurationSnapshot,
    /// Layers that were read successfully, in merge order
    pub loaded_layers: Vec<SnapshotLayer>,
    pub warnings: Vec<String>,
}

/// Merge snapshot layers
///
/// Layers are applied in the order given, so later layers take precedence.
/// JSON objects are merged key by key at every depth; any other value
/// (booleans, strings, arrays) replaces the earlier one wholesale.
///
/// # Returns
///
/// - `Ok(merged)` - Merged snapshot with metadata
/// - `Err(_)` - A layer could not be loaded and `continue_on_error` is false,
///   or the merged document does not decode as a snapshot
///
/// # Example
///
/// ```rust,no_run
/// use nimbus_flags::{merge_snapshot_layers, LayerKind, MergeConfig, SnapshotLayer};
///
/// let layers = [
///     SnapshotLayer::new(LayerKind::Defaults, "defaults.json"),
///     SnapshotLayer::new(LayerKind::Remote, "experiments.json"),
/// ];
/// let merged = merge_snapshot_layers(&layers, &MergeConfig::default())?;
///
/// for warning in &merged.warnings {
///     eprintln!("Warning: {}", warning);
/// }
/// # Ok::<(), nimbus_flags::Error>(())
/// ```
pub fn merge_snapshot_layers(
    layers: &[SnapshotLayer],
    config: &MergeConfig,
) -> Result<MergedSnapshot> {
    let mut warnings = Vec::new();
    let mut loaded_layers = Vec::new();
    let mut merged = Value::Object(Map::new());

    for layer in layers {
        match load_layer(&layer.path) {
            Ok(value) => {
                debug!(kind = ?layer.kind, path = %layer.path.display(), "merging snapshot layer");
                merge_values(&mut merged, value);
                loaded_layers.push(layer.clone());
            }
            Err(e) => {
                let msg = format!("Failed to load {:?} layer: {}", layer.kind, e);
                warn!("{}", msg);
                warnings.push(msg);
                if !config.continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    let snapshot = ConfigurationSnapshot::from_json_value(merged)?;

    Ok(MergedSnapshot {
        snapshot,
        loaded_layers,
        warnings,
    })
}

/// Read one layer as raw JSON; it must be an object
fn load_layer(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::LayerNotFound {
            path: path.to_path_buf(),
        });
    }

    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| Error::snapshot(origin.as_str(), e))?;

    // A layer must decode on its own so a bad field is attributed to its file
    ConfigurationSnapshot::decode(&origin, value.clone())?;

    Ok(value)
}

/// Deep-merge `overlay` into `base`, overlay winning
fn merge_values(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Object(overlay_map) if base.is_object() => {
            if let Some(base_map) = base.as_object_mut() {
                for (key, value) in overlay_map {
                    match base_map.get_mut(&key) {
                        Some(existing) => merge_values(existing, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            }
        }
        other => *base = other,
    }
}
