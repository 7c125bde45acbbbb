pub mod service;

pub use crate::domain::model::{LoadStatus, Registration, StoreSnapshot};
pub use crate::domain::ports::{ConfigProvider, RegistrationStore};
pub use crate::utils::error::Result;
