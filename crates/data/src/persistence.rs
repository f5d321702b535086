use crate::load::load_json;
use anyhow::{bail, Context};
use phaseten_core::GameSnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

pub const SAVE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub snapshot: GameSnapshot,
}

pub fn save_snapshot(path: &Path, snapshot: &GameSnapshot, seed: Option<u64>) -> anyhow::Result<()> {
    let payload = SavedGame {
        version: SAVE_SCHEMA_VERSION,
        seed,
        snapshot: snapshot.clone(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string_pretty(&payload).context("serialize snapshot")?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), players = snapshot.players.len(), "saved snapshot");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<SavedGame> {
    let saved: SavedGame = load_json(path)?;
    if saved.version != SAVE_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            saved.version,
            SAVE_SCHEMA_VERSION
        );
    }
    Ok(saved)
}
