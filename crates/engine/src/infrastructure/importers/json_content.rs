//! Loads authored content (characters, actions, zones, events) from JSON files.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;
use vidaloka_domain::{Action, Catalog, Character, DomainError, Event, Zone};

pub const CHARACTERS_FILE: &str = "characters.json";
pub const ACTIONS_FILE: &str = "actions.json";
pub const ZONES_FILE: &str = "zones.json";
pub const EVENTS_FILE: &str = "events.json";

/// Errors that can occur while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Invalid content: {0}")]
    Invalid(#[from] DomainError),
}

/// Reads one JSON array per content kind from a directory.
pub struct JsonContentLoader {
    content_dir: PathBuf,
}

impl JsonContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Check if the content directory exists.
    pub fn validate_path(&self) -> bool {
        self.content_dir.is_dir()
    }

    /// Load and validate the full catalog.
    pub async fn load(&self) -> Result<Catalog, ContentError> {
        if !self.validate_path() {
            return Err(ContentError::DirectoryNotFound(self.content_dir.clone()));
        }

        let characters: Vec<Character> = self.read_records(CHARACTERS_FILE).await?;
        let actions: Vec<Action> = self.read_records(ACTIONS_FILE).await?;
        let zones: Vec<Zone> = self.read_records(ZONES_FILE).await?;
        let events: Vec<Event> = self.read_records(EVENTS_FILE).await?;

        let catalog = Catalog::from_parts(characters, actions, zones, events)?;
        let (characters, actions, zones, events) = catalog.counts();
        tracing::info!(
            dir = %self.content_dir.display(),
            characters,
            actions,
            zones,
            events,
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    async fn read_records<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>, ContentError> {
        let path = self.content_dir.join(filename);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| ContentError::Json { path, source })
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}
