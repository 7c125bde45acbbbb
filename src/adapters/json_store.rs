use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::model::{LoadStatus, Registration, StoreSnapshot};
use crate::domain::ports::RegistrationStore;
use crate::utils::error::Result;

/// File-backed store: one JSON array holding every registration. The path
/// is injected at construction; nothing here reads ambient constants.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistrationStore for JsonFileStore {
    fn load_all(&self) -> StoreSnapshot {
        if !self.path.exists() {
            tracing::debug!("Store {} does not exist yet", self.path.display());
            return StoreSnapshot {
                records: Vec::new(),
                status: LoadStatus::Missing,
            };
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    "Error loading registrations from {}: {}",
                    self.path.display(),
                    e
                );
                return StoreSnapshot {
                    records: Vec::new(),
                    status: LoadStatus::Unreadable,
                };
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => StoreSnapshot {
                records,
                status: LoadStatus::Loaded,
            },
            Err(e) => {
                tracing::warn!(
                    "Error parsing registrations from {}: {}",
                    self.path.display(),
                    e
                );
                StoreSnapshot {
                    records: Vec::new(),
                    status: LoadStatus::Unreadable,
                }
            }
        }
    }

    fn save_all(&self, records: &[Registration]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;

        // Write to a sibling temp file, then rename over the store, so an
        // interrupted save never leaves a half-written collection behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            "Saved {} registrations to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(id: u64, enrollment_no: &str) -> Registration {
        Registration {
            id,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            sport: "Chess".to_string(),
            department: "Computer Engineering (CE)".to_string(),
            enrollment_number: enrollment_no.to_string(),
            registered_at: "2026-08-06 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("registrations.json"));

        let snapshot = store.load_all();
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.status, LoadStatus::Missing);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("registrations.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());

        let snapshot = store.load_all();
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.status, LoadStatus::Unreadable);
    }

    #[test]
    fn test_add_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("registrations.json"));

        let record = sample(1, "123456789012");
        store.add(record.clone()).unwrap();

        let snapshot = store.load_all();
        assert_eq!(snapshot.status, LoadStatus::Loaded);
        assert_eq!(snapshot.records, vec![record]);
    }

    #[test]
    fn test_repeated_loads_are_identical() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("registrations.json"));

        store.add(sample(1, "123456789012")).unwrap();
        store.add(sample(2, "210987654321")).unwrap();

        let first = store.load_all();
        let second = store.load_all();
        assert_eq!(first.records, second.records);
        assert_eq!(first.records.len(), 2);
    }

    #[test]
    fn test_scans() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("registrations.json"));

        let mut football = sample(2, "210987654321");
        football.sport = "Football".to_string();
        football.department = "Information Technology (IT)".to_string();

        store.add(sample(1, "123456789012")).unwrap();
        store.add(football).unwrap();

        assert!(store.exists_by_enrollment("123456789012"));
        assert!(!store.exists_by_enrollment("000000000000"));
        assert_eq!(
            store.find_by_enrollment("210987654321").unwrap().sport,
            "Football"
        );
        assert_eq!(store.get_by_sport("Chess").len(), 1);
        assert_eq!(store.get_by_sport("Kabaddi").len(), 0);
        assert_eq!(
            store.get_by_department("Information Technology (IT)").len(),
            1
        );
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data/nested/registrations.json"));

        store.save_all(&[sample(1, "123456789012")]).unwrap();
        assert_eq!(store.load_all().records.len(), 1);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("registrations.json");
        let store = JsonFileStore::new(&path);

        store.save_all(&[sample(1, "123456789012")]).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["registrations.json"]);
    }
}
