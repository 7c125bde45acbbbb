use std::sync::{Mutex, PoisonError};

use chrono::Local;

use crate::domain::model::{Registration, REGISTERED_AT_FORMAT};
use crate::domain::ports::RegistrationStore;
use crate::utils::error::{RegistrationError, Result};
use crate::utils::validation;

pub struct RegistrationService<S: RegistrationStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: RegistrationStore> RegistrationService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Validates the raw form fields, enforces enrollment-number
    /// uniqueness, and appends the new record to the store. `Ok` carries
    /// the stored record; `Err` carries the message to render back to the
    /// student. Storage detail never reaches the caller, only the generic
    /// save-failure message does.
    pub fn register_student(
        &self,
        first_name: &str,
        last_name: &str,
        sport: &str,
        department: &str,
        enrollment_no: &str,
    ) -> Result<Registration> {
        validation::validate_all(first_name, last_name, sport, department, enrollment_no)?;

        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let sport = sport.trim();
        let department = department.trim();
        let enrollment_no = enrollment_no.trim();

        // One lock around check-build-append: without it two callers can
        // both see "not registered yet" and claim the same id. The lock is
        // per service instance, so two processes on one file can still
        // race; single-process deployment is assumed.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.store.exists_by_enrollment(enrollment_no) {
            return Err(RegistrationError::DuplicateEnrollmentError);
        }

        let record = Registration {
            id: self.store.count() as u64 + 1,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            sport: sport.to_string(),
            department: department.to_string(),
            enrollment_number: enrollment_no.to_string(),
            registered_at: Local::now().format(REGISTERED_AT_FORMAT).to_string(),
        };

        match self.store.add(record.clone()) {
            Ok(()) => {
                tracing::info!(
                    "Registered {} {} for {} (enrollment {})",
                    record.first_name,
                    record.last_name,
                    record.sport,
                    record.enrollment_number
                );
                Ok(record)
            }
            Err(e) => {
                tracing::error!("Error saving registration: {}", e);
                Err(RegistrationError::SaveError)
            }
        }
    }

    pub fn get_all_registrations(&self) -> Vec<Registration> {
        self.store.load_all().records
    }

    pub fn get_registration_by_enrollment(&self, enrollment_no: &str) -> Option<Registration> {
        self.store.find_by_enrollment(enrollment_no)
    }

    pub fn get_registrations_by_sport(&self, sport: &str) -> Vec<Registration> {
        self.store.get_by_sport(sport)
    }

    pub fn get_registrations_by_department(&self, department: &str) -> Vec<Registration> {
        self.store.get_by_department(department)
    }
}
