use std::path::Path;

use anyhow::Context;
use tfmath::{boundary::PointSet, sampled::SampledFunction, EngineConfig};

/// Load the engine configuration, or the defaults if no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        log::info!("No config file given. Using defaults");
        return Ok(EngineConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str());
    parse_config(&contents, ext)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// `ext` selects the format: `yaml`/`yml` for YAML, anything else for JSON.
pub fn parse_config(contents: &str, ext: Option<&str>) -> anyhow::Result<EngineConfig> {
    let config = match ext {
        Some("yaml") | Some("yml") => serde_yaml::from_str(contents)?,
        _ => serde_json::from_str(contents)?,
    };
    Ok(config)
}

/// Load the stored points of one function and normalize them.
pub fn load_function(path: &Path, config: &EngineConfig) -> anyhow::Result<SampledFunction> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read points file: {}", path.display()))?;
    let func = parse_points(&contents)
        .and_then(|points| points.normalize(config).map_err(Into::into))
        .with_context(|| format!("Invalid points in {}", path.display()))?;
    log::info!("Loaded {} samples from {}", func.len(), path.display());
    Ok(func)
}

pub fn parse_points(contents: &str) -> anyhow::Result<PointSet> {
    Ok(serde_json::from_str(contents)?)
}

pub fn write_output(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
