// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use practice_roster::RosterState;
use practice_roster_domain::OwnerKey;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::diesel_schema::roster_snapshots;
use crate::document::{SNAPSHOT_SCHEMA_VERSION, encode_snapshot};
use crate::error::PersistenceError;
use crate::mutations::owners::ensure_owner;

/// Replaces the stored roster of an owner with `state`.
///
/// The whole document is written in one statement, so a failed save leaves
/// the previous snapshot intact.
///
/// # Errors
///
/// Returns an error if serialization or the upsert fails.
pub fn save_snapshot(
    conn: &mut SqliteConnection,
    owner_key: &OwnerKey,
    state: &RosterState,
) -> Result<(), PersistenceError> {
    let snapshot_json: String = encode_snapshot(state)?;
    let saved_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let schema_version: i32 = i32::try_from(SNAPSHOT_SCHEMA_VERSION)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let owner_id: i64 = ensure_owner(conn, owner_key)?;

        diesel::insert_into(roster_snapshots::table)
            .values((
                roster_snapshots::owner_id.eq(owner_id),
                roster_snapshots::schema_version.eq(schema_version),
                roster_snapshots::snapshot_json.eq(&snapshot_json),
                roster_snapshots::saved_at.eq(&saved_at),
            ))
            .on_conflict(roster_snapshots::owner_id)
            .do_update()
            .set((
                roster_snapshots::schema_version.eq(schema_version),
                roster_snapshots::snapshot_json.eq(&snapshot_json),
                roster_snapshots::saved_at.eq(&saved_at),
            ))
            .execute(conn)?;

        debug!(owner_key = %owner_key, bytes = snapshot_json.len(), "Saved roster snapshot");
        Ok(())
    })
}
