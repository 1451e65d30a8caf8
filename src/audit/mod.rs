//! Audit logging system for Spendbook
//!
//! Records every category creation and every recorded expense in an
//! append-only, line-delimited JSON log next to the ledger.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and the entity's state after the operation.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
