use crate::error::{Error, Result};
use crate::feature_flags::ResolvedFeature;
use glob::Pattern;

/// Query resolved features by glob patterns over their names (OR logic)
/// Returns features matching any of the provided patterns, in input order
pub fn query_features(features: &[ResolvedFeature], patterns: &[&str]) -> Result<Vec<ResolvedFeature>> {
    // Compile all patterns first to fail fast on invalid patterns
    let compiled_patterns: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern(format!("'{}': {}", p, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let queried = features
        .iter()
        .filter(|feature| {
            compiled_patterns
                .iter()
                .any(|pattern| pattern.matches(feature.id.name()))
        })
        .cloned()
        .collect();

    Ok(queried)
}
