//! Application services

mod record_validator;
mod validation_engine;
mod validation_run;

pub use record_validator::RecordValidator;
pub use validation_engine::ValidationEngine;
pub use validation_run::ValidationRun;
