// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event persistence.

use diesel::SqliteConnection;
use diesel::prelude::*;
use practice_roster_audit::AuditEvent;
use practice_roster_domain::OwnerKey;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema;
use crate::error::PersistenceError;
use crate::mutations::owners::ensure_owner;

/// Persists an audit event under an owner.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `owner_key` - The owner whose roster the event belongs to
/// * `event` - The audit event to persist
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    owner_key: &OwnerKey,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let actor_json: String = serde_json::to_string(&ActorData::from(&event.actor))?;
    let cause_json: String = serde_json::to_string(&CauseData::from(&event.cause))?;
    let action_json: String = serde_json::to_string(&ActionData::from(&event.action))?;
    let before_json: String = serde_json::to_string(&StateSnapshotData::from(&event.before))?;
    let after_json: String = serde_json::to_string(&StateSnapshotData::from(&event.after))?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let owner_id: i64 = ensure_owner(conn, owner_key)?;

        diesel::insert_into(diesel_schema::audit_events::table)
            .values((
                diesel_schema::audit_events::owner_id.eq(owner_id),
                diesel_schema::audit_events::action_name.eq(&event.action.name),
                diesel_schema::audit_events::actor_json.eq(&actor_json),
                diesel_schema::audit_events::cause_json.eq(&cause_json),
                diesel_schema::audit_events::action_json.eq(&action_json),
                diesel_schema::audit_events::before_snapshot_json.eq(&before_json),
                diesel_schema::audit_events::after_snapshot_json.eq(&after_json),
            ))
            .execute(conn)?;

        let event_id: i64 = get_last_insert_rowid(conn)?;
        debug!(event_id, action = %event.action.name, "Persisted audit event");

        Ok(event_id)
    })
}
