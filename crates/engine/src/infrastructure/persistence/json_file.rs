//! JSON snapshot file - the default `StatePort`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::infrastructure::ports::{GameState, PersistenceError, StatePort};

/// Stores the whole game state as one pretty-printed JSON document.
///
/// Saves write and sync a sibling temp file, then rename it over the target,
/// so a crash mid-write leaves the previous snapshot intact.
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "state.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StatePort for JsonFileStateStore {
    async fn save(&self, state: &GameState) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(state).map_err(PersistenceError::serialization)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::io("create_dir", e))?;
        }

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp)
            .await
            .map_err(|e| PersistenceError::io("create", e))?;
        file.write_all(&json)
            .await
            .map_err(|e| PersistenceError::io("write", e))?;
        file.sync_all()
            .await
            .map_err(|e| PersistenceError::io("sync", e))?;
        drop(file);
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| PersistenceError::io("rename", e))?;

        tracing::debug!(
            path = %self.path.display(),
            players = state.players.len(),
            bytes = json.len(),
            "Saved game state"
        );
        Ok(())
    }

    async fn load(&self) -> Result<Option<GameState>, PersistenceError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved game state, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(PersistenceError::io("read", e)),
        };

        let state: GameState =
            serde_json::from_str(&content).map_err(PersistenceError::serialization)?;
        tracing::info!(
            path = %self.path.display(),
            players = state.players.len(),
            "Loaded game state"
        );
        Ok(Some(state))
    }
}
