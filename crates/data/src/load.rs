use anyhow::Context;
use phaseten_core::GameConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a `GameConfig` from JSON. Missing fields take their defaults.
pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    let config: GameConfig = load_json(path)?;
    if config.hand_size == 0 {
        anyhow::bail!("{}: hand_size must be at least 1", path.display());
    }
    if config.max_players == 0 {
        anyhow::bail!("{}: max_players must be at least 1", path.display());
    }
    debug!(path = %path.display(), ?config, "loaded game config");
    Ok(config)
}

pub(crate) fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
