use anyhow::{Context, Result};
use newsrank_core::EngineConfig;
use std::fs;
use std::path::Path;

/// Engine settings: defaults, then the JSON file, then the stopword file,
/// then individual flags.
pub fn load_config(
    path: Option<&Path>,
    stopwords: Option<&Path>,
    k1: Option<f64>,
    b: Option<f64>,
) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(path) = stopwords {
        let text = fs::read_to_string(path).with_context(|| format!("reading stopwords {}", path.display()))?;
        config.normalizer.stopwords = text
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
    }
    if let Some(k1) = k1 {
        config.bm25.k1 = k1;
    }
    if let Some(b) = b {
        config.bm25.b = b;
    }
    config.bm25.validate()?;
    tracing::debug!(k1 = config.bm25.k1, b = config.bm25.b, stopwords = config.normalizer.stopwords.len(), "loaded config");
    Ok(config)
}
