use serde::{Deserialize, Serialize};

pub const SPORTS: [&str; 6] = [
    "Football",
    "Cricket",
    "Chess",
    "Kabaddi",
    "Volleyball",
    "Badminton",
];

pub const DEPARTMENTS: [&str; 7] = [
    "Information Technology (IT)",
    "Computer Engineering (CE)",
    "Biomedical Engineering (BM)",
    "Electrical Engineering (ECE)",
    "Civil Engineering (CVE)",
    "Electronics & Communication (EC)",
    "Instrumentation & Control Engineering (IC)",
];

pub const ENROLLMENT_NUMBER_LENGTH: usize = 12;

pub const REGISTERED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub sport: String,
    pub department: String,
    pub enrollment_number: String,
    pub registered_at: String,
}

/// How the backing file was read. `Missing` and `Unreadable` both yield an
/// empty record list; the distinction is kept so callers can tell a fresh
/// store from a damaged one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Unreadable,
}

#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub records: Vec<Registration>,
    pub status: LoadStatus,
}
