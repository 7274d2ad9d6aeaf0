use crate::cli::{self, Cli};
use nimbus_flags::{
    merge_snapshot_layers, query_features, ArrowDirection, ConfigurationSnapshot,
    ContextualHintCopyProvider, CopyKind, FeatureFlagLayer, FeatureId, HintType, LayerKind,
    MergeConfig, SnapshotLayer, ROUTES,
};
use tracing::info;

/// Build the snapshot from the --snapshot and --override files
fn load_snapshot(cli: &Cli) -> Result<ConfigurationSnapshot, Box<dyn std::error::Error>> {
    let layers: Vec<SnapshotLayer> = cli
        .snapshots
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let kind = if index == 0 {
                LayerKind::Defaults
            } else {
                LayerKind::Remote
            };
            SnapshotLayer::new(kind, path)
        })
        .chain(
            cli.overrides
                .iter()
                .map(|path| SnapshotLayer::new(LayerKind::Override, path)),
        )
        .collect();

    if layers.is_empty() {
        info!("no snapshot given, every feature resolves to its default");
        return Ok(ConfigurationSnapshot::default());
    }

    let config = MergeConfig {
        continue_on_error: !cli.strict,
    };
    let merged = merge_snapshot_layers(&layers, &config).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load configuration snapshot: {}. Check that every --snapshot file exists and is valid JSON.",
            e
        )
    })?;

    // Skipped layers were already logged at warn level by the merger
    info!(
        layers = merged.loaded_layers.len(),
        skipped = merged.warnings.len(),
        "loaded configuration snapshot"
    );

    Ok(merged.snapshot)
}

fn flag_layer(cli: &Cli) -> FeatureFlagLayer {
    if cli.ignore_overrides {
        FeatureFlagLayer::without_overrides()
    } else {
        FeatureFlagLayer::new()
    }
}

/// Print one feature's resolved value in raw format (no JSON wrapping)
pub fn check_feature(cli: &Cli, feature: FeatureId) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(cli)?;
    let flags = flag_layer(cli);

    match feature {
        FeatureId::StartAtHome => println!("{}", flags.start_at_home(&snapshot).as_str()),
        FeatureId::WallpaperVersion => println!("{}", flags.wallpaper_version(&snapshot)),
        _ => println!("{}", flags.check(feature, &snapshot)),
    }
    Ok(())
}

/// Print resolved features, optionally filtered by glob patterns
pub fn list_features(
    cli: &Cli,
    query_patterns: &[&str],
    output_type: cli::OutputType,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(cli)?;
    let resolved = flag_layer(cli).resolve_all(&snapshot);

    let output = if !query_patterns.is_empty() {
        query_features(&resolved, query_patterns)
            .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?
    } else {
        resolved
    };

    let json = match output_type {
        cli::OutputType::JsonObject => {
            let object: serde_json::Map<String, serde_json::Value> = output
                .into_iter()
                .map(|feature| (feature.id.name().to_string(), feature.value))
                .collect();
            serde_json::to_string_pretty(&object)?
        }
        cli::OutputType::JsonArray => serde_json::to_string_pretty(&output)?,
    };

    println!("{}", json);
    Ok(())
}

/// Print the copy string for a hint
pub fn print_copy(
    cli: &Cli,
    hint: HintType,
    kind: CopyKind,
    arrow: Option<ArrowDirection>,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(cli)?;
    let provider = ContextualHintCopyProvider::with_layer(&snapshot, flag_layer(cli), arrow);

    let copy = provider.copy_for(kind, hint);
    if copy.is_empty() && hint == HintType::ToolbarLocation && kind == CopyKind::Description {
        return Err(anyhow::anyhow!(
            "Toolbar description copy needs an arrow direction. Pass --arrow up or --arrow down."
        )
        .into());
    }

    println!("{}", copy);
    Ok(())
}

/// Print the routing table
pub fn print_routes() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&ROUTES[..])?;
    println!("{}", json);
    Ok(())
}
