// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use practice_roster_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use practice_roster_domain::OwnerKey;

use crate::data_models::{ActionData, ActorData, AuditEventRow, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::queries::owners::lookup_owner_id;

/// Retrieves the complete audit timeline of an owner, oldest first.
///
/// An owner that has never been persisted has an empty timeline.
///
/// # Errors
///
/// Returns an error if events cannot be retrieved or deserialized.
pub fn get_audit_timeline(
    conn: &mut SqliteConnection,
    owner_key: &OwnerKey,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let Some(owner_id) = lookup_owner_id(conn, owner_key)? else {
        return Ok(Vec::new());
    };

    tracing::debug!(owner_id, "Retrieving audit timeline");

    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::owner_id.eq(owner_id))
        .order(audit_events::event_id.asc())
        .select((
            audit_events::event_id,
            audit_events::actor_json,
            audit_events::cause_json,
            audit_events::action_json,
            audit_events::before_snapshot_json,
            audit_events::after_snapshot_json,
        ))
        .load::<AuditEventRow>(conn)?;

    rows.into_iter()
        .map(|row| event_from_row(owner_key, row))
        .collect()
}

fn event_from_row(owner_key: &OwnerKey, row: AuditEventRow) -> Result<AuditEvent, PersistenceError> {
    let (event_id, actor_json, cause_json, action_json, before_json, after_json) = row;

    let actor_data: ActorData = serde_json::from_str(&actor_json)?;
    let cause_data: CauseData = serde_json::from_str(&cause_json)?;
    let action_data: ActionData = serde_json::from_str(&action_json)?;
    let before_data: StateSnapshotData = serde_json::from_str(&before_json)?;
    let after_data: StateSnapshotData = serde_json::from_str(&after_json)?;

    Ok(AuditEvent::new(
        Actor::from(actor_data),
        Cause::from(cause_data),
        Action::from(action_data),
        StateSnapshot::from(before_data),
        StateSnapshot::from(after_data),
    )
    .with_owner(owner_key.clone())
    .with_event_id(event_id))
}
