use crate::domain::model::{Registration, StoreSnapshot};
use crate::utils::error::Result;

/// Port over the registration collection. Only `load_all` and `save_all`
/// touch the backing store; every lookup is a linear scan over a fresh
/// load, so each call observes the latest persisted state.
pub trait RegistrationStore: Send + Sync {
    fn load_all(&self) -> StoreSnapshot;

    fn save_all(&self, records: &[Registration]) -> Result<()>;

    fn find_by_enrollment(&self, enrollment_no: &str) -> Option<Registration> {
        self.load_all()
            .records
            .into_iter()
            .find(|record| record.enrollment_number == enrollment_no)
    }

    fn exists_by_enrollment(&self, enrollment_no: &str) -> bool {
        self.find_by_enrollment(enrollment_no).is_some()
    }

    fn add(&self, record: Registration) -> Result<()> {
        let mut records = self.load_all().records;
        records.push(record);
        self.save_all(&records)
    }

    fn count(&self) -> usize {
        self.load_all().records.len()
    }

    fn get_by_sport(&self, sport: &str) -> Vec<Registration> {
        self.load_all()
            .records
            .into_iter()
            .filter(|record| record.sport == sport)
            .collect()
    }

    fn get_by_department(&self, department: &str) -> Vec<Registration> {
        self.load_all()
            .records
            .into_iter()
            .filter(|record| record.department == department)
            .collect()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;

    fn verbose(&self) -> bool;
}
