//! # Trip Store
//!
//! Planned trips live in `<data_dir>/trips.json`. The whole list is read,
//! changed and written back on every mutation; a missing file is an empty list.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::data::{Outcome, RepositoryError, RepositoryResult, TripRepository};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub city: String,
    /// Free-form, as the user typed it.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: i64,
}

/// User input for a trip that hasn't been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTrip {
    pub title: String,
    pub city: String,
    pub date: String,
    pub note: Option<String>,
}

impl Trip {
    pub fn create(new: NewTrip) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            city: new.city,
            date: new.date,
            note: new.note,
            created_at: Utc::now().timestamp(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct TripFile {
    trips: Vec<Trip>,
}

pub struct TripStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl TripStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("trips.json"),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<TripFile, RepositoryError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No trip file at {}, starting empty", self.path.display());
                return Ok(TripFile::default());
            }
            Err(e) => return Err(RepositoryError::Io(e.to_string())),
        };
        serde_json::from_str(&json).map_err(|e| RepositoryError::Parse(e.to_string()))
    }

    /// Atomically write the trip file (via `.tmp` + rename).
    async fn save(&self, file: &TripFile) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::Io(e.to_string()))?;
        }
        let tmp_path = self.path.with_extension("tmp");
        let json =
            serde_json::to_string_pretty(file).map_err(|e| RepositoryError::Parse(e.to_string()))?;
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl TripRepository for TripStore {
    async fn get_all_trips(&self) -> RepositoryResult<Vec<Trip>> {
        let file = self.load().await?;
        Ok(Outcome::Success(Some(file.trips)))
    }

    async fn insert_trip(&self, trip: Trip) -> RepositoryResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut file = self.load().await?;
        info!("Saving trip {} ({})", trip.id, trip.title);
        // Same id replaces the stored trip
        file.trips.retain(|t| t.id != trip.id);
        file.trips.push(trip);
        self.save(&file).await?;
        Ok(Outcome::Success(Some(())))
    }

    async fn delete_trip(&self, id: &str) -> RepositoryResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut file = self.load().await?;
        let before = file.trips.len();
        file.trips.retain(|t| t.id != id);
        if file.trips.len() == before {
            debug!("Trip {} not found, nothing to delete", id);
            return Ok(Outcome::Success(Some(())));
        }
        self.save(&file).await?;
        info!("Deleted trip {}", id);
        Ok(Outcome::Success(Some(())))
    }
}
