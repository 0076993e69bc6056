//! Domain model (record, status tokens, static snapshot, errors).

pub mod errors;
pub mod record;
pub mod snapshot;
pub mod status;

pub use self::errors::StatusError;
pub use self::record::{DevelopmentRequirement, InfraNode, StatusRecord};
pub use self::snapshot::StatusSnapshot;
pub use self::status::{ComponentStatus, PhaseStatus};
