//! Demo state persistence — JSON save/load across restarts.

use std::path::Path;

use propslider_core::ProportionPair;
use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// Serializable subset of demo state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub value: ProportionPair,
    pub disabled: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            value: ProportionPair::new(50.0, 50.0),
            disabled: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is
/// missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from app state.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        value: app.value,
        disabled: app.disabled,
    }
}

/// Apply persisted state onto app state.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if state.value.total() > 0.0 {
        app.value = state.value;
    }
    app.disabled = state.disabled;
}
