//! Storage layer for Spendbook
//!
//! Provides the ledger file store with atomic writes and automatic directory
//! creation, plus the audit log that records every mutation.

pub mod file_io;
pub mod init;
pub mod ledger_file;

pub use file_io::{write_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use ledger_file::LedgerFile;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SpendbookPaths;
use crate::error::SpendbookError;
use crate::models::Ledger;

/// Main storage coordinator
pub struct Storage {
    paths: SpendbookPaths,
    pub ledger: LedgerFile,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendbookPaths) -> Result<Self, SpendbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerFile::new(paths.ledger_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendbookPaths {
        &self.paths
    }

    /// Load the ledger from disk (empty if no file exists yet)
    pub fn load(&self) -> Result<Ledger, SpendbookError> {
        self.ledger.load()
    }

    /// Overwrite the ledger file with a full snapshot
    pub fn save(&self, ledger: &Ledger) -> Result<(), SpendbookError> {
        self.ledger.save(ledger)
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SpendbookError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an appended expense in the audit log
    pub fn log_record<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
        summary: Option<String>,
    ) -> Result<(), SpendbookError> {
        self.audit.log(&AuditEntry::record(
            entity_type,
            entity_id,
            entity_name,
            entity,
            summary,
        ))
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
