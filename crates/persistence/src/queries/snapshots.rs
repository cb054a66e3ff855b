// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use practice_roster::RosterState;
use practice_roster_domain::OwnerKey;
use tracing::debug;

use crate::diesel_schema::roster_snapshots;
use crate::document::decode_snapshot;
use crate::error::PersistenceError;
use crate::queries::owners::lookup_owner_id;

/// Loads the stored roster of an owner.
///
/// Returns `None` when the owner has no snapshot yet.
///
/// # Errors
///
/// Returns an error if the query fails or the stored document cannot be
/// read.
pub fn load_snapshot(
    conn: &mut SqliteConnection,
    owner_key: &OwnerKey,
) -> Result<Option<RosterState>, PersistenceError> {
    let Some(owner_id) = lookup_owner_id(conn, owner_key)? else {
        debug!(owner_key = %owner_key, "No owner row; nothing to load");
        return Ok(None);
    };

    let snapshot_json: Option<String> = roster_snapshots::table
        .filter(roster_snapshots::owner_id.eq(owner_id))
        .select(roster_snapshots::snapshot_json)
        .first::<String>(conn)
        .optional()?;

    match snapshot_json {
        Some(json) => {
            let state: RosterState = decode_snapshot(&json)?;
            debug!(owner_key = %owner_key, athletes = state.athletes().len(), "Loaded roster snapshot");
            Ok(Some(state))
        }
        None => Ok(None),
    }
}
