use clap::{Parser, Subcommand, ValueEnum};
use nimbus_flags::{ArrowDirection, CopyKind, FeatureId, HintType};
use std::path::PathBuf;

/// CLI arguments for nimbus-flags
#[derive(Parser, Debug)]
#[command(name = "nimbus-flags")]
#[command(about = "Resolve feature flags and contextual hint copy from configuration snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Snapshot JSON files, lowest precedence first (the first is treated as bundled defaults)
    #[arg(short, long = "snapshot", global = true)]
    pub snapshots: Vec<PathBuf>,

    /// Local override JSON files, applied after every --snapshot
    #[arg(long = "override", global = true)]
    pub overrides: Vec<PathBuf>,

    /// Fail on a missing or invalid snapshot file instead of warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Route every feature through its own group, ignoring the experiment override
    #[arg(long, global = true)]
    pub ignore_overrides: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print whether a feature is enabled (or its raw value for start-at-home and wallpaper-version)
    Check {
        /// Feature name, e.g. "jump-back-in"
        feature: FeatureId,
    },
    /// Print every resolved feature as JSON
    List {
        /// Glob patterns over feature names (OR logic), e.g. "wallpaper*"
        #[arg(short, long)]
        query: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "json-object")]
        output_type: OutputType,
    },
    /// Print the copy for a contextual hint
    Copy {
        /// Hint name, e.g. "toolbar-location"
        #[arg(long)]
        hint: HintType,

        /// "action" or "description"
        #[arg(long, default_value = "description")]
        kind: CopyKind,

        /// Arrow direction of the hint bubble: "up", "down" or "unknown"
        #[arg(long)]
        arrow: Option<ArrowDirection>,
    },
    /// Print the feature routing table as JSON
    Routes,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    /// `{ "feature-name": value, ... }`
    JsonObject,
    /// `[{ "id": ..., "group": ..., "enabled": ..., "value": ..., "description": ... }, ...]`
    JsonArray,
}
