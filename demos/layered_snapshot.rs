//! Layered snapshot example
//!
//! This example merges bundled defaults, a remote experiment payload and a
//! local override file, then prints how every feature resolves.
//!
//! Run with `cargo run --example layered_snapshot [fixtures dir]`.

use nimbus_flags::{
    merge_snapshot_layers, FeatureFlagLayer, LayerKind, MergeConfig, SnapshotLayer,
};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures"));

    let layers = [
        SnapshotLayer::new(LayerKind::Defaults, fixtures.join("bundled-defaults.json")),
        SnapshotLayer::new(LayerKind::Remote, fixtures.join("mr2022-experiment.json")),
        SnapshotLayer::new(LayerKind::Override, fixtures.join("local-override.json")),
    ];

    println!("Merging snapshot layers from {}", fixtures.display());
    let merged = merge_snapshot_layers(&layers, &MergeConfig::default())?;

    println!("\nMerge Results:");
    println!("  Loaded layers: {}", merged.loaded_layers.len());
    for layer in &merged.loaded_layers {
        println!("    {:?}: {}", layer.kind, layer.path.display());
    }

    if !merged.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &merged.warnings {
            println!("  ⚠ {}", warning);
        }
    }

    println!("\nResolved features:");
    println!("{:-<80}", "");
    for feature in FeatureFlagLayer::new().resolve_all(&merged.snapshot) {
        println!(
            "{:<45} {:<20} {}",
            feature.id.name(),
            format!("{:?}", feature.group),
            feature.value
        );
    }

    Ok(())
}
