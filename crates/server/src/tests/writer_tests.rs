// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot writer tests.

use practice_roster::RosterState;
use practice_roster_api::{
    AddAthleteRequest, ApiResult, AthleteResponse, FlushStatus, RosterSession, add_athlete,
};
use practice_roster_audit::{AuditEvent, Cause};
use practice_roster_domain::OwnerKey;
use practice_roster_persistence::{Persistence, SnapshotStore};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::writer::SnapshotWriter;

fn create_test_persistence() -> Arc<Mutex<Persistence>> {
    Arc::new(Mutex::new(
        Persistence::new_in_memory().expect("Failed to create in-memory persistence"),
    ))
}

fn create_test_session() -> RosterSession {
    RosterSession::new(OwnerKey::new("coach-123").unwrap(), RosterState::default())
}

fn add(session: &mut RosterSession, name: &str) -> ApiResult<AthleteResponse> {
    let request: AddAthleteRequest = AddAthleteRequest {
        name: name.to_string(),
        notes: String::new(),
        role_ids: Vec::new(),
    };
    add_athlete(
        session,
        request,
        Cause::new(String::from("req-1"), String::from("test")),
    )
    .unwrap()
}

#[tokio::test]
async fn test_flush_now_writes_snapshot_and_event() {
    let persistence: Arc<Mutex<Persistence>> = create_test_persistence();
    let writer: SnapshotWriter = SnapshotWriter::spawn(Arc::clone(&persistence));
    let mut session: RosterSession = create_test_session();
    let result: ApiResult<AthleteResponse> = add(&mut session, "Mia");

    let status: FlushStatus = writer.flush_now(result.flush).await;

    assert!(status.is_flushed());
    let mut guard: MutexGuard<'_, Persistence> = persistence.lock().await;
    let stored: Option<RosterState> = guard.load_snapshot(session.owner_key()).unwrap();
    assert_eq!(stored.as_ref(), Some(session.state()));
    let events: Vec<AuditEvent> = guard.list_audit_events(session.owner_key()).unwrap();
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn test_settle_waits_for_submitted_flushes_in_order() {
    let persistence: Arc<Mutex<Persistence>> = create_test_persistence();
    let writer: SnapshotWriter = SnapshotWriter::spawn(Arc::clone(&persistence));
    let mut session: RosterSession = create_test_session();

    for name in ["Mia", "Leo", "Ana"] {
        let result: ApiResult<AthleteResponse> = add(&mut session, name);
        writer.submit(result.flush);
    }
    writer.settle().await;

    let mut guard: MutexGuard<'_, Persistence> = persistence.lock().await;
    let stored: RosterState = guard.load_snapshot(session.owner_key()).unwrap().unwrap();
    assert_eq!(stored.athletes().len(), 3);
    let events: Vec<AuditEvent> = guard.list_audit_events(session.owner_key()).unwrap();
    let after_counts: Vec<usize> = events.iter().map(|event| event.after.athletes).collect();
    assert_eq!(after_counts, vec![1, 2, 3]);
}
