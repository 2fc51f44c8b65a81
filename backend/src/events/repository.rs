use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;
use shared::{Event, EventDto};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read event catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Event catalog {path} is not a JSON array of events: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Event catalog unavailable: {0}")]
    Unavailable(String),
}

#[async_trait::async_trait]
pub trait EventCatalog: Send + Sync {
    /// Every seed entry verbatim and in file order, including ones a client
    /// would not admit.
    async fn list(&self) -> Result<Vec<Value>, CatalogError>;
}

/// Seed catalog held in memory for the life of the process.
#[derive(Clone, Debug)]
pub struct InMemoryCatalog {
    events: Result<Arc<Vec<Value>>, String>,
}

impl InMemoryCatalog {
    pub fn new(events: Vec<Value>) -> Self {
        Self {
            events: Ok(Arc::new(events)),
        }
    }

    /// A catalog that answers every request with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            events: Err(reason.into()),
        }
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let events = Self::parse(path, &body)?;
        info!("Loaded {} events from {}", events.len(), path.display());
        Ok(Self::new(events))
    }

    fn parse(path: &Path, body: &str) -> Result<Vec<Value>, CatalogError> {
        let entries: Vec<Value> =
            serde_json::from_str(body).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for (index, entry) in entries.iter().enumerate() {
            let admitted = serde_json::from_value::<EventDto>(entry.clone())
                .map_err(|e| e.to_string())
                .and_then(|dto| Event::try_from(dto).map_err(|e| e.to_string()));
            if let Err(reason) = admitted {
                warn!("Seed event #{} will be skipped by clients: {}", index, reason);
            }
        }
        Ok(entries)
    }
}

#[async_trait::async_trait]
impl EventCatalog for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Value>, CatalogError> {
        match &self.events {
            Ok(events) => Ok(events.as_ref().clone()),
            Err(reason) => Err(CatalogError::Unavailable(reason.clone())),
        }
    }
}
