// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use practice_roster_domain::OwnerKey;
use tracing::debug;

use crate::diesel_schema::owners;
use crate::error::PersistenceError;
use crate::queries::lookup_owner_id;

/// Returns the row id for an owner, creating the owner row on first use.
///
/// # Errors
///
/// Returns an error if the insert or lookup fails.
pub fn ensure_owner(
    conn: &mut SqliteConnection,
    owner_key: &OwnerKey,
) -> Result<i64, PersistenceError> {
    let inserted: usize = diesel::insert_or_ignore_into(owners::table)
        .values(owners::owner_key.eq(owner_key.value()))
        .execute(conn)?;
    if inserted > 0 {
        debug!(owner_key = %owner_key, "Created owner row");
    }

    lookup_owner_id(conn, owner_key)?
        .ok_or_else(|| PersistenceError::NotFound(format!("owner '{owner_key}'")))
}
