// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the practice roster.
//!
//! Each owner's roster is stored as one JSON document and replaced as a
//! whole on every save. Audit events are appended to a per-owner timeline.
//!
//! ## Backends
//!
//! - [`Persistence`] stores rosters in `SQLite` through Diesel, either in a
//!   file or in a private in-memory database.
//! - [`InMemoryStore`] keeps the serialized documents in a map.
//!
//! Both implement [`SnapshotStore`], which is all the session layer depends on.
//!
//! ## Testing Philosophy
//!
//! - Tests run against in-memory `SQLite` databases, one per test
//! - File-backed behavior is exercised against temporary directories
//! - Legacy documents are tested as raw JSON, the way older versions wrote them

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use practice_roster::RosterState;
use practice_roster_audit::AuditEvent;
use practice_roster_domain::OwnerKey;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// parallel tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod document;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use document::{
    AthleteRecord, RoleRecord, SNAPSHOT_SCHEMA_VERSION, SnapshotDocument, VolunteerRecord,
    decode_snapshot, encode_snapshot,
};
pub use error::PersistenceError;
pub use store::{InMemoryStore, SnapshotStore};

/// The tables the embedded migrations create.
pub const EXPECTED_TABLES: [&str; 3] = ["audit_events", "owners", "roster_snapshots"];

/// Persistence adapter for roster snapshots and audit events.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database name via an atomic
    /// counter, so instances never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:roster_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        let mut persistence: Self = Self { conn };
        persistence.verify_schema()?;
        Ok(persistence)
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        let mut persistence: Self = Self { conn };
        persistence.verify_schema()?;
        Ok(persistence)
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Lists the user tables present in the database, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be read.
    pub fn table_names(&mut self) -> Result<Vec<String>, PersistenceError> {
        backend::sqlite::table_names(&mut self.conn)
    }

    /// Checks that every table the migrations create is present.
    ///
    /// Runs on every open, after migrations.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing table.
    pub fn verify_schema(&mut self) -> Result<(), PersistenceError> {
        let tables: Vec<String> = self.table_names()?;
        for expected in EXPECTED_TABLES {
            if !tables.iter().any(|table| table == expected) {
                return Err(PersistenceError::MigrationFailed(format!(
                    "table '{expected}' is missing"
                )));
            }
        }
        Ok(())
    }
}

impl SnapshotStore for Persistence {
    fn load_snapshot(
        &mut self,
        owner_key: &OwnerKey,
    ) -> Result<Option<RosterState>, PersistenceError> {
        queries::load_snapshot(&mut self.conn, owner_key)
    }

    fn save_snapshot(
        &mut self,
        owner_key: &OwnerKey,
        state: &RosterState,
    ) -> Result<(), PersistenceError> {
        mutations::save_snapshot(&mut self.conn, owner_key, state)
    }

    fn append_audit_event(
        &mut self,
        owner_key: &OwnerKey,
        event: &AuditEvent,
    ) -> Result<i64, PersistenceError> {
        mutations::persist_audit_event(&mut self.conn, owner_key, event)
    }

    fn list_audit_events(
        &mut self,
        owner_key: &OwnerKey,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::get_audit_timeline(&mut self.conn, owner_key)
    }
}
