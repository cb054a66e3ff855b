// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use practice_roster::RosterState;
use practice_roster_audit::{AuditEvent, Cause};
use practice_roster_domain::OwnerKey;
use practice_roster_persistence::{PersistenceError, SnapshotStore};

use crate::{
    AddAthleteRequest, AddVolunteerRequest, RosterSession, add_athlete, add_volunteer,
    toggle_checkin,
};

pub fn create_test_owner() -> OwnerKey {
    OwnerKey::new("coach-123").unwrap()
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_test_session() -> RosterSession {
    RosterSession::new(create_test_owner(), RosterState::new())
}

/// Adds an athlete through the API and returns its id.
pub fn add_test_athlete(session: &mut RosterSession, name: &str) -> String {
    let request: AddAthleteRequest = AddAthleteRequest {
        name: name.to_string(),
        notes: String::new(),
        role_ids: Vec::new(),
    };
    add_athlete(session, request, create_test_cause())
        .unwrap()
        .response
        .athlete_id
}

/// Adds a volunteer through the API and returns its id.
pub fn add_test_volunteer(session: &mut RosterSession, name: &str) -> String {
    let request: AddVolunteerRequest = AddVolunteerRequest {
        name: name.to_string(),
        role_ids: Vec::new(),
    };
    add_volunteer(session, request, create_test_cause())
        .unwrap()
        .response
        .volunteer_id
}

pub fn check_in(session: &mut RosterSession, kind: &str, id: &str) {
    let checked_in: bool = toggle_checkin(session, kind, id, create_test_cause())
        .unwrap()
        .response
        .checked_in;
    assert!(checked_in);
}

/// A store whose writes can be switched off.
///
/// Reads behave like an empty store.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub fail_saves: bool,
    pub fail_appends: bool,
    pub fail_loads: bool,
    pub saves: usize,
    pub appends: usize,
}

impl FailingStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_saves: true,
            fail_appends: true,
            ..Self::default()
        }
    }
}

impl SnapshotStore for FailingStore {
    fn load_snapshot(
        &mut self,
        _owner_key: &OwnerKey,
    ) -> Result<Option<RosterState>, PersistenceError> {
        if self.fail_loads {
            return Err(PersistenceError::QueryFailed(String::from("disk unavailable")));
        }
        Ok(None)
    }

    fn save_snapshot(
        &mut self,
        _owner_key: &OwnerKey,
        _state: &RosterState,
    ) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::QueryFailed(String::from("disk full")));
        }
        self.saves += 1;
        Ok(())
    }

    fn append_audit_event(
        &mut self,
        _owner_key: &OwnerKey,
        _event: &AuditEvent,
    ) -> Result<i64, PersistenceError> {
        if self.fail_appends {
            return Err(PersistenceError::QueryFailed(String::from("disk full")));
        }
        self.appends += 1;
        Ok(i64::try_from(self.appends).unwrap())
    }

    fn list_audit_events(
        &mut self,
        _owner_key: &OwnerKey,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        Ok(Vec::new())
    }
}
