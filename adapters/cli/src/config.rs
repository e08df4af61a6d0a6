use std::{fs, path::Path};

use anyhow::{Context, Result};
use choropleth_atlas::AtlasConfig;
use tracing::{debug, info};

/// Loads the atlas configuration, falling back to the bundled dataset.
pub(crate) fn load(path: Option<&Path>) -> Result<AtlasConfig> {
    let Some(path) = path else {
        info!("using bundled dataset");
        return Ok(AtlasConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    let config =
        parse(&text).with_context(|| format!("failed to parse configuration {}", path.display()))?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn parse(text: &str) -> Result<AtlasConfig> {
    let config: AtlasConfig = toml::from_str(text)?;
    debug!(
        baselines = config.baselines.len(),
        references = config.references.len(),
        regions = config.regions.len(),
        "parsed configuration tables"
    );
    Ok(config)
}
