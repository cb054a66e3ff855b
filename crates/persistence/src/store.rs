// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The load/save contract the roster session relies on.

use practice_roster::RosterState;
use practice_roster_audit::AuditEvent;
use practice_roster_domain::OwnerKey;
use std::collections::HashMap;

use crate::document::{decode_snapshot, encode_snapshot};
use crate::error::PersistenceError;

/// Whole-snapshot storage keyed by owner.
///
/// A roster is always read and written as a whole. There is no partial
/// load and no partial save.
pub trait SnapshotStore {
    /// Loads the roster stored for an owner, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored document
    /// is unreadable.
    fn load_snapshot(&mut self, owner_key: &OwnerKey)
    -> Result<Option<RosterState>, PersistenceError>;

    /// Replaces the roster stored for an owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous snapshot is kept.
    fn save_snapshot(
        &mut self,
        owner_key: &OwnerKey,
        state: &RosterState,
    ) -> Result<(), PersistenceError>;

    /// Appends an audit event to the owner's timeline, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn append_audit_event(
        &mut self,
        owner_key: &OwnerKey,
        event: &AuditEvent,
    ) -> Result<i64, PersistenceError>;

    /// Lists the owner's audit events, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_audit_events(&mut self, owner_key: &OwnerKey)
    -> Result<Vec<AuditEvent>, PersistenceError>;
}

/// A process-local store.
///
/// Snapshots are kept as the same JSON documents the database stores, so
/// a roster round-trips through exactly the same serialization.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshots: HashMap<OwnerKey, String>,
    audit_events: HashMap<OwnerKey, Vec<AuditEvent>>,
    next_event_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored document for an owner.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn raw_snapshot(&self, owner_key: &OwnerKey) -> Option<&str> {
        self.snapshots.get(owner_key).map(String::as_str)
    }

    /// Stores a raw document for an owner, as an older version would have
    /// written it.
    #[cfg(test)]
    pub(crate) fn insert_raw_snapshot(&mut self, owner_key: OwnerKey, json: String) {
        self.snapshots.insert(owner_key, json);
    }
}

impl SnapshotStore for InMemoryStore {
    fn load_snapshot(
        &mut self,
        owner_key: &OwnerKey,
    ) -> Result<Option<RosterState>, PersistenceError> {
        self.snapshots
            .get(owner_key)
            .map(String::as_str)
            .map(decode_snapshot)
            .transpose()
    }

    fn save_snapshot(
        &mut self,
        owner_key: &OwnerKey,
        state: &RosterState,
    ) -> Result<(), PersistenceError> {
        let json: String = encode_snapshot(state)?;
        self.snapshots.insert(owner_key.clone(), json);
        Ok(())
    }

    fn append_audit_event(
        &mut self,
        owner_key: &OwnerKey,
        event: &AuditEvent,
    ) -> Result<i64, PersistenceError> {
        self.next_event_id += 1;
        let event_id: i64 = self.next_event_id;
        let stored: AuditEvent = event
            .clone()
            .with_owner(owner_key.clone())
            .with_event_id(event_id);
        self.audit_events
            .entry(owner_key.clone())
            .or_default()
            .push(stored);
        Ok(event_id)
    }

    fn list_audit_events(
        &mut self,
        owner_key: &OwnerKey,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        Ok(self
            .audit_events
            .get(owner_key)
            .cloned()
            .unwrap_or_default())
    }
}
