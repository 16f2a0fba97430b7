//! JSON flat-file implementation of ReservationRepository
//!
//! The whole collection lives in one JSON array on disk. Every operation
//! reads the full file, works on the deserialized records, and writes the
//! full file back, so external edits are picked up on the next request.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex;

use crate::domain::reservation::{
    NewReservation, Reservation, ReservationFilter, ReservationPatch, ReservationRepository,
};
use crate::domain::{DomainError, DomainResult};

pub struct JsonFileReservationRepository {
    path: PathBuf,
    // One operation at a time against the backing file
    write_lock: Mutex<()>,
}

impl JsonFileReservationRepository {
    /// Point the repository at a data file without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Seed the data file with an empty collection when it does not exist.
    ///
    /// Run once at startup. After this, a missing file is treated as a
    /// storage fault rather than silently recreated.
    pub async fn init(&self) -> DomainResult<()> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| read_err(&self.path, e))?
        {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| write_err(&self.path, e))?;
        }
        self.save(&[]).await?;
        info!("Seeded empty reservation file at {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> DomainResult<Vec<Reservation>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| read_err(&self.path, e))?;
        serde_json::from_str(&raw).map_err(|e| parse_err(&self.path, e))
    }

    async fn save(&self, reservations: &[Reservation]) -> DomainResult<()> {
        let raw = serde_json::to_string_pretty(reservations)
            .map_err(|e| parse_err(&self.path, e))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| write_err(&self.path, e))
    }
}

// ── Error helpers ───────────────────────────────────────────────

fn read_err(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::Storage(format!("Cannot read {}: {}", path.display(), e))
}

fn write_err(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::Storage(format!("Cannot write {}: {}", path.display(), e))
}

fn parse_err(path: &Path, e: serde_json::Error) -> DomainError {
    DomainError::Storage(format!("Malformed JSON in {}: {}", path.display(), e))
}

// ── ID assignment ───────────────────────────────────────────────

fn next_id(reservations: &[Reservation]) -> i32 {
    reservations.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for JsonFileReservationRepository {
    async fn create(&self, fields: NewReservation) -> DomainResult<Reservation> {
        let _guard = self.write_lock.lock().await;

        let mut reservations = self.load().await?;
        let reservation = Reservation::new(next_id(&reservations), fields);
        debug!("Saving reservation {}", reservation.id);

        reservations.push(reservation.clone());
        self.save(&reservations).await?;
        Ok(reservation)
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let _guard = self.write_lock.lock().await;
        self.load().await
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let _guard = self.write_lock.lock().await;
        let reservations = self.load().await?;
        Ok(reservations.into_iter().find(|r| r.id == id))
    }

    async fn update(&self, id: i32, patch: ReservationPatch) -> DomainResult<Reservation> {
        let _guard = self.write_lock.lock().await;
        debug!("Updating reservation {}", id);

        let mut reservations = self.load().await?;
        let index = match reservations.iter().position(|r| r.id == id) {
            Some(index) => index,
            None => return Err(DomainError::reservation_not_found(id)),
        };

        let updated = reservations[index].merge(patch);
        reservations[index] = updated.clone();
        self.save(&reservations).await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        debug!("Deleting reservation {}", id);

        let mut reservations = self.load().await?;
        let before = reservations.len();
        reservations.retain(|r| r.id != id);
        if reservations.len() == before {
            return Err(DomainError::reservation_not_found(id));
        }
        self.save(&reservations).await
    }

    async fn filter_by(&self, filter: ReservationFilter) -> DomainResult<Vec<Reservation>> {
        let _guard = self.write_lock.lock().await;
        let reservations = self.load().await?;
        Ok(reservations
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fields(hotel: &str) -> NewReservation {
        NewReservation {
            hotel: hotel.to_string(),
            room_type: "doble".to_string(),
            guest_count: 2,
            start_date: "2024-06-10".to_string(),
            end_date: "2024-06-15".to_string(),
            status: "confirmada".to_string(),
        }
    }

    async fn open_repo(dir: &TempDir) -> JsonFileReservationRepository {
        let repo = JsonFileReservationRepository::new(dir.path().join("reservas.json"));
        repo.init().await.unwrap();
        repo
    }

    #[tokio::test]
    async fn init_seeds_an_empty_collection() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn first_reservation_gets_id_one() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let created = repo.create(fields("Hotel Luna")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn ids_continue_after_the_highest_survivor() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        for hotel in ["A", "B", "C", "D", "E"] {
            repo.create(fields(hotel)).await.unwrap();
        }
        repo.delete(2).await.unwrap();
        repo.delete(4).await.unwrap();

        // Survivors are 1, 3, 5; the next ID tops the highest one
        let created = repo.create(fields("F")).await.unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn created_record_is_returned_intact_by_lookup() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let created = repo.create(fields("Hotel Luna")).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn lookup_of_unknown_id_returns_none() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;
        assert_eq!(repo.find_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_merges_and_keeps_storage_order() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        repo.create(fields("Hotel A")).await.unwrap();
        repo.create(fields("Hotel B")).await.unwrap();
        repo.create(fields("Hotel C")).await.unwrap();

        let patch = ReservationPatch {
            status: Some("cancelada".to_string()),
            ..Default::default()
        };
        let updated = repo.update(2, patch).await.unwrap();
        assert_eq!(updated.status, "cancelada");
        assert_eq!(updated.hotel, "Hotel B");

        let all = repo.find_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[1].status, "cancelada");
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        let err = repo.update(7, ReservationPatch::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        repo.create(fields("Hotel Luna")).await.unwrap();
        repo.delete(1).await.unwrap();

        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
        let err = repo.delete(1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn filter_by_hotel_ignores_case() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;

        repo.create(fields("Hotel Luna")).await.unwrap();
        repo.create(fields("Hotel Sol")).await.unwrap();

        let matches = repo
            .filter_by(ReservationFilter::Hotel("hotel luna".to_string()))
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].hotel, "Hotel Luna");
    }

    #[tokio::test]
    async fn missing_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileReservationRepository::new(dir.path().join("missing.json"));

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservas.json");
        std::fs::write(&path, "{ this is not an array").unwrap();

        let repo = JsonFileReservationRepository::new(&path);
        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn init_leaves_existing_data_alone() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;
        repo.create(fields("Hotel Luna")).await.unwrap();

        repo.init().await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reservations_survive_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservas.json");

        let created = {
            let repo = JsonFileReservationRepository::new(&path);
            repo.init().await.unwrap();
            repo.create(fields("Hotel Luna")).await.unwrap()
        };

        let reopened = JsonFileReservationRepository::new(&path);
        let all = reopened.find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn file_on_disk_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir).await;
        repo.create(fields("Hotel Luna")).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("reservas.json")).unwrap();
        assert!(raw.contains("\n "));
        assert!(raw.contains("\"hotel\": \"Hotel Luna\""));
    }
}
