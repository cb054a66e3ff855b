// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_owner, create_test_roster, create_test_transition};
use crate::{InMemoryStore, SnapshotStore};
use practice_roster::RosterState;
use practice_roster_audit::AuditEvent;
use practice_roster_domain::{AthleteId, OwnerKey};

#[test]
fn test_in_memory_store_round_trips() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let owner: OwnerKey = create_test_owner("coach@example.com");
    let state: RosterState = create_test_roster();

    assert!(store.load_snapshot(&owner).unwrap().is_none());
    store.save_snapshot(&owner, &state).unwrap();

    assert!(store.raw_snapshot(&owner).unwrap().contains("checkedInAthletes"));
    assert_eq!(store.load_snapshot(&owner).unwrap().unwrap(), state);
}

#[test]
fn test_in_memory_store_reads_legacy_documents() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let owner: OwnerKey = create_test_owner("legacy");
    store.insert_raw_snapshot(
        owner.clone(),
        String::from(r#"{"athletes":[{"id":"_a1","name":"Mia"}],"editingItemId":null}"#),
    );

    let state: RosterState = store.load_snapshot(&owner).unwrap().unwrap();

    assert_eq!(
        state.find_athlete(&AthleteId::new("_a1")).unwrap().name,
        "Mia"
    );
}

#[test]
fn test_in_memory_audit_ids_increase() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let owner: OwnerKey = create_test_owner("coach@example.com");
    let event: AuditEvent = create_test_transition(&RosterState::new()).audit_event;

    let first: i64 = store.append_audit_event(&owner, &event).unwrap();
    let second: i64 = store.append_audit_event(&owner, &event).unwrap();
    let events: Vec<AuditEvent> = store.list_audit_events(&owner).unwrap();

    assert!(second > first);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].event_id, Some(second));
    assert_eq!(events[1].owner_key.as_ref(), Some(&owner));
}
