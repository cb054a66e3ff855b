// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stored roster document.
//!
//! A roster is saved as one JSON object. Field names follow the layout the
//! roster has always been stored under, so documents written by earlier
//! versions of the application load unchanged:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "athletes": [{ "id": "_a1", "name": "Mia", "roles": ["_r1"] }],
//!   "volunteers": [{ "id": "_v1", "name": "Sam", "roles": [] }],
//!   "checkedInAthletes": ["_a1"],
//!   "checkedInVolunteers": ["_v1"],
//!   "assignments": { "_a1": ["_v1"] },
//!   "athleteNotes": { "_a1": "" },
//!   "volunteerHistory": { "_a1": ["_v1"] },
//!   "athleteRoles": [{ "id": "_r1", "name": "Sprinter" }],
//!   "volunteerRoles": []
//! }
//! ```
//!
//! Loading is lenient. Missing or `null` collections and `roles` default to
//! empty, and unknown fields (such as the old `editingItemId` and
//! `editingItemType` form state) are ignored.

use practice_roster::{RosterParts, RosterState};
use practice_roster_domain::{Athlete, AthleteId, Role, RoleId, Volunteer, VolunteerId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::PersistenceError;

/// The document layout written by this version.
///
/// Documents without a version are treated as version 0 and read with the
/// same rules.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serializable representation of an athlete record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteRecord {
    pub id: AthleteId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<RoleId>,
}

/// Serializable representation of a volunteer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerRecord {
    pub id: VolunteerId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<RoleId>,
}

/// Serializable representation of a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: RoleId,
    pub name: String,
}

/// Serializable representation of a whole roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub schema_version: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub athletes: Vec<AthleteRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteers: Vec<VolunteerRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub checked_in_athletes: Vec<AthleteId>,
    #[serde(deserialize_with = "null_as_default")]
    pub checked_in_volunteers: Vec<VolunteerId>,
    #[serde(deserialize_with = "null_as_default")]
    pub assignments: BTreeMap<AthleteId, Vec<VolunteerId>>,
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_notes: BTreeMap<AthleteId, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteer_history: BTreeMap<AthleteId, Vec<VolunteerId>>,
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_roles: Vec<RoleRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteer_roles: Vec<RoleRecord>,
}

/// Reads a field that may be `null`, treating `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SnapshotDocument {
    /// Captures a roster as a document at the current schema version.
    #[must_use]
    pub fn from_state(state: &RosterState) -> Self {
        let parts: RosterParts = state.to_parts();
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            athletes: parts
                .athletes
                .into_iter()
                .map(|athlete| AthleteRecord {
                    id: athlete.id,
                    name: athlete.name,
                    roles: athlete.roles,
                })
                .collect(),
            volunteers: parts
                .volunteers
                .into_iter()
                .map(|volunteer| VolunteerRecord {
                    id: volunteer.id,
                    name: volunteer.name,
                    roles: volunteer.roles,
                })
                .collect(),
            checked_in_athletes: parts.checked_in_athletes,
            checked_in_volunteers: parts.checked_in_volunteers,
            assignments: parts.assignments,
            athlete_notes: parts.athlete_notes,
            volunteer_history: parts.volunteer_history,
            athlete_roles: parts.athlete_roles.into_iter().map(RoleRecord::from).collect(),
            volunteer_roles: parts
                .volunteer_roles
                .into_iter()
                .map(RoleRecord::from)
                .collect(),
        }
    }

    /// Rebuilds the roster, restoring its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the document was written by a newer schema.
    pub fn into_state(self) -> Result<RosterState, PersistenceError> {
        if self.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(PersistenceError::UnsupportedSchemaVersion(
                self.schema_version,
            ));
        }

        let parts: RosterParts = RosterParts {
            athletes: self
                .athletes
                .into_iter()
                .map(|record| Athlete::new(record.id, record.name, record.roles))
                .collect(),
            athlete_notes: self.athlete_notes,
            volunteers: self
                .volunteers
                .into_iter()
                .map(|record| Volunteer::new(record.id, record.name, record.roles))
                .collect(),
            athlete_roles: self.athlete_roles.into_iter().map(Role::from).collect(),
            volunteer_roles: self.volunteer_roles.into_iter().map(Role::from).collect(),
            checked_in_athletes: self.checked_in_athletes,
            checked_in_volunteers: self.checked_in_volunteers,
            assignments: self.assignments,
            volunteer_history: self.volunteer_history,
        };

        Ok(RosterState::from_parts(parts))
    }
}

impl From<Role> for RoleRecord {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
        }
    }
}

impl From<RoleRecord> for Role {
    fn from(record: RoleRecord) -> Self {
        Self::new(record.id, record.name)
    }
}

/// Serializes a roster into its stored JSON form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_snapshot(state: &RosterState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&SnapshotDocument::from_state(state))?)
}

/// Parses a stored JSON document back into a roster.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or was written by a newer
/// schema.
pub fn decode_snapshot(json: &str) -> Result<RosterState, PersistenceError> {
    let document: SnapshotDocument = serde_json::from_str(json)?;
    document.into_state()
}
