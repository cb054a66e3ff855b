// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_owner, create_test_roster, create_test_transition};
use crate::{Persistence, PersistenceError, SnapshotStore};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use practice_roster::RosterState;
use practice_roster_audit::AuditEvent;
use practice_roster_domain::OwnerKey;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_file_database_survives_reopen() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("roster.db");
    let owner: OwnerKey = create_test_owner("coach@example.com");
    let state: RosterState = create_test_roster();

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.save_snapshot(&owner, &state).unwrap();
        persistence
            .append_audit_event(&owner, &create_test_transition(&state).audit_event)
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let loaded: RosterState = reopened.load_snapshot(&owner).unwrap().unwrap();
    let events: Vec<AuditEvent> = reopened.list_audit_events(&owner).unwrap();

    assert_eq!(loaded, state);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_reopening_does_not_rerun_migrations() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("roster.db");

    drop(Persistence::new_with_file(&path).unwrap());
    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();

    assert!(reopened.verify_schema().is_ok());
}

#[test]
fn test_opening_database_with_missing_table_fails() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("roster.db");
    drop(Persistence::new_with_file(&path).unwrap());

    let mut conn: SqliteConnection = SqliteConnection::establish(path.to_str().unwrap()).unwrap();
    diesel::sql_query("DROP TABLE audit_events")
        .execute(&mut conn)
        .unwrap();
    drop(conn);

    let result: Result<Persistence, PersistenceError> = Persistence::new_with_file(&path);

    assert!(matches!(
        result,
        Err(PersistenceError::MigrationFailed(ref message)) if message.contains("audit_events")
    ));
}
