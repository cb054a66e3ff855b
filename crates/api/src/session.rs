// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live roster sessions.
//!
//! A session holds one owner's roster in memory for as long as the owner is
//! signed in. Every command runs against that in-memory aggregate, and the
//! resulting snapshot is then handed to storage. Storage failures never undo
//! an edit: the in-memory roster stays authoritative for the session.

use practice_roster::{Command, Outcome, RosterState, TransitionResult, apply};
use practice_roster_audit::{Actor, AuditEvent, Cause};
use practice_roster_domain::OwnerKey;
use practice_roster_persistence::{PersistenceError, SnapshotStore};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error};

/// Errors raised by the session registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The owner already has a live session.
    #[error("A session is already active for owner '{0}'")]
    AlreadyActive(OwnerKey),
    /// The owner has no live session.
    #[error("No active session for owner '{0}'")]
    NotActive(OwnerKey),
    /// The owner's stored roster could not be loaded.
    #[error("Failed to load roster for owner '{owner_key}': {source}")]
    LoadFailed {
        /// The owner whose roster was being loaded.
        owner_key: OwnerKey,
        /// The underlying storage error.
        #[source]
        source: PersistenceError,
    },
}

/// Everything storage needs to catch up with one change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushRequest {
    /// The owner the snapshot belongs to.
    pub owner_key: OwnerKey,
    /// The whole roster as it stands after the change.
    pub state: RosterState,
    /// The audit event recording the change, if the flush follows a command.
    pub audit_event: Option<AuditEvent>,
}

/// The result of handing a snapshot to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlushStatus {
    /// The snapshot was saved and the audit event, if any, appended.
    Flushed {
        /// The id assigned to the appended audit event.
        event_id: Option<i64>,
    },
    /// The snapshot was saved but the audit event was not appended. The
    /// event is not retried, so the timeline is missing this change.
    AuditEventLost {
        /// Why the append failed.
        reason: String,
    },
    /// The snapshot was not saved. The in-memory roster is unaffected.
    Failed {
        /// Why the write failed.
        reason: String,
    },
}

impl FlushStatus {
    /// Returns `true` if the snapshot reached storage.
    #[must_use]
    pub const fn is_flushed(&self) -> bool {
        matches!(self, Self::Flushed { .. } | Self::AuditEventLost { .. })
    }
}

/// Writes a snapshot, then its audit event, to storage.
///
/// Failures are logged and reported, never returned as errors. A failed
/// snapshot save skips the audit event. A failed append after a saved
/// snapshot is reported as [`FlushStatus::AuditEventLost`].
pub fn flush<S: SnapshotStore + ?Sized>(store: &mut S, request: &FlushRequest) -> FlushStatus {
    if let Err(e) = store.save_snapshot(&request.owner_key, &request.state) {
        warn!(owner_key = %request.owner_key, error = %e, "Failed to save roster snapshot");
        return FlushStatus::Failed {
            reason: e.to_string(),
        };
    }

    let Some(event) = &request.audit_event else {
        debug!(owner_key = %request.owner_key, "Saved roster snapshot");
        return FlushStatus::Flushed { event_id: None };
    };

    match store.append_audit_event(&request.owner_key, event) {
        Ok(event_id) => {
            debug!(owner_key = %request.owner_key, event_id, action = %event.action.name, "Flushed roster change");
            FlushStatus::Flushed {
                event_id: Some(event_id),
            }
        }
        Err(e) => {
            warn!(
                owner_key = %request.owner_key,
                error = %e,
                action = %event.action.name,
                "Saved roster snapshot but failed to append audit event"
            );
            FlushStatus::AuditEventLost {
                reason: e.to_string(),
            }
        }
    }
}

/// The result of executing a command and flushing it synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    /// What the command changed.
    pub outcome: Outcome,
    /// The audit event recording the command.
    pub audit_event: AuditEvent,
    /// Whether the change reached storage.
    pub flush: FlushStatus,
}

/// One owner's live roster.
#[derive(Debug, Clone)]
pub struct RosterSession {
    owner_key: OwnerKey,
    actor: Actor,
    state: RosterState,
}

impl RosterSession {
    /// Creates a session over an already loaded roster.
    #[must_use]
    pub fn new(owner_key: OwnerKey, state: RosterState) -> Self {
        let actor: Actor = Actor::owner(&owner_key);
        Self {
            owner_key,
            actor,
            state,
        }
    }

    /// Starts a session from the owner's stored roster, or an empty one if
    /// nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored roster cannot be read.
    pub fn begin<S: SnapshotStore + ?Sized>(
        store: &mut S,
        owner_key: OwnerKey,
    ) -> Result<Self, SessionError> {
        let loaded: Option<RosterState> = match store.load_snapshot(&owner_key) {
            Ok(loaded) => loaded,
            Err(source) => return Err(SessionError::LoadFailed { owner_key, source }),
        };

        if loaded.is_some() {
            info!(owner_key = %owner_key, "Loaded stored roster");
        } else {
            info!(owner_key = %owner_key, "No stored roster, starting empty");
        }

        Ok(Self::new(owner_key, loaded.unwrap_or_default()))
    }

    /// The owner of this session.
    #[must_use]
    pub const fn owner_key(&self) -> &OwnerKey {
        &self.owner_key
    }

    /// The current in-memory roster.
    #[must_use]
    pub const fn state(&self) -> &RosterState {
        &self.state
    }

    /// Applies a command to the in-memory roster.
    ///
    /// The command runs all-or-nothing. On success the roster is replaced
    /// and the transition is returned with its audit event tagged with
    /// this session's owner. On failure the roster is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the command violates a domain rule.
    pub fn apply(&mut self, command: Command, cause: Cause) -> Result<TransitionResult, ApiError> {
        let mut result: TransitionResult =
            apply(&self.state, command, self.actor.clone(), cause).map_err(translate_core_error)?;
        result.audit_event = result.audit_event.with_owner(self.owner_key.clone());
        self.state = result.new_state.clone();
        Ok(result)
    }

    /// Builds a flush request for the current roster.
    #[must_use]
    pub fn flush_request(&self, audit_event: Option<AuditEvent>) -> FlushRequest {
        FlushRequest {
            owner_key: self.owner_key.clone(),
            state: self.state.clone(),
            audit_event,
        }
    }

    /// Applies a command and writes the result to storage.
    ///
    /// A failed write is reported in the returned [`FlushStatus`]. The
    /// command still counts as applied.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command itself is rejected.
    pub fn execute<S: SnapshotStore + ?Sized>(
        &mut self,
        store: &mut S,
        command: Command,
        cause: Cause,
    ) -> Result<Executed, ApiError> {
        let result: TransitionResult = self.apply(command, cause)?;
        let request: FlushRequest = self.flush_request(Some(result.audit_event.clone()));
        let status: FlushStatus = flush(store, &request);

        Ok(Executed {
            outcome: result.outcome,
            audit_event: result.audit_event,
            flush: status,
        })
    }
}

/// The live sessions, keyed by owner.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<OwnerKey, RosterSession>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for an owner by loading their stored roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner already has a session or the stored
    /// roster cannot be read.
    pub fn begin<S: SnapshotStore + ?Sized>(
        &mut self,
        store: &mut S,
        owner_key: OwnerKey,
    ) -> Result<&mut RosterSession, SessionError> {
        match self.sessions.entry(owner_key) {
            Entry::Occupied(entry) => Err(SessionError::AlreadyActive(entry.key().clone())),
            Entry::Vacant(entry) => {
                let session: RosterSession = RosterSession::begin(store, entry.key().clone())?;
                Ok(entry.insert(session))
            }
        }
    }

    /// Ends an owner's session, handing back the final roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner has no session.
    pub fn end(&mut self, owner_key: &OwnerKey) -> Result<RosterSession, SessionError> {
        let session: RosterSession = self
            .sessions
            .remove(owner_key)
            .ok_or_else(|| SessionError::NotActive(owner_key.clone()))?;
        info!(owner_key = %owner_key, "Ended roster session");
        Ok(session)
    }

    /// Returns an owner's session.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner has no session.
    pub fn get(&self, owner_key: &OwnerKey) -> Result<&RosterSession, SessionError> {
        self.sessions
            .get(owner_key)
            .ok_or_else(|| SessionError::NotActive(owner_key.clone()))
    }

    /// Returns an owner's session for editing.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner has no session.
    pub fn get_mut(&mut self, owner_key: &OwnerKey) -> Result<&mut RosterSession, SessionError> {
        self.sessions
            .get_mut(owner_key)
            .ok_or_else(|| SessionError::NotActive(owner_key.clone()))
    }

    /// Returns `true` if the owner has a session.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn is_active(&self, owner_key: &OwnerKey) -> bool {
        self.sessions.contains_key(owner_key)
    }

    /// The number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
