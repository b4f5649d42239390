pub mod error;
pub mod record;
pub mod service;

pub use error::Error;
pub use record::{Flags, Record, StoredEntry};
pub use service::{HealthCheck, ServiceRegistration};
