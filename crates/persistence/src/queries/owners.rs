// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use practice_roster_domain::OwnerKey;

use crate::diesel_schema::owners;
use crate::error::PersistenceError;

/// Looks up the row id of an owner.
///
/// Returns `None` if the owner has never saved anything.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn lookup_owner_id(
    conn: &mut SqliteConnection,
    owner_key: &OwnerKey,
) -> Result<Option<i64>, PersistenceError> {
    Ok(owners::table
        .filter(owners::owner_key.eq(owner_key.value()))
        .select(owners::owner_id)
        .first::<i64>(conn)
        .optional()?)
}
