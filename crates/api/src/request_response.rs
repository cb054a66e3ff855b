// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to add an athlete.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddAthleteRequest {
    /// The athlete's display name.
    pub name: String,
    /// Free-form notes about the athlete.
    #[serde(default)]
    pub notes: String,
    /// Athlete-namespace role ids.
    #[serde(default)]
    pub role_ids: Vec<String>,
}

/// API request to edit an athlete.
///
/// Name, notes and roles are all replaced.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateAthleteRequest {
    /// The new display name.
    pub name: String,
    /// The new notes.
    #[serde(default)]
    pub notes: String,
    /// The new athlete-namespace role ids.
    #[serde(default)]
    pub role_ids: Vec<String>,
}

/// API response for a successful athlete add or edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AthleteResponse {
    /// The athlete identifier.
    pub athlete_id: String,
    /// A success message.
    pub message: String,
}

/// API request to add a volunteer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddVolunteerRequest {
    /// The volunteer's display name.
    pub name: String,
    /// Volunteer-namespace role ids.
    #[serde(default)]
    pub role_ids: Vec<String>,
}

/// API request to edit a volunteer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateVolunteerRequest {
    /// The new display name.
    pub name: String,
    /// The new volunteer-namespace role ids.
    #[serde(default)]
    pub role_ids: Vec<String>,
}

/// API response for a successful volunteer add or edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VolunteerResponse {
    /// The volunteer identifier.
    pub volunteer_id: String,
    /// A success message.
    pub message: String,
}

/// API request to define a role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddRoleRequest {
    /// The role name, unique within its namespace.
    pub name: String,
}

/// API response for a successful role definition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddRoleResponse {
    /// The role namespace (`athlete` or `volunteer`).
    pub namespace: String,
    /// The new role identifier.
    pub role_id: String,
    /// A success message.
    pub message: String,
}

/// API response for a role deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteRoleResponse {
    /// The role namespace.
    pub namespace: String,
    /// The deleted role identifier.
    pub role_id: String,
    /// Whether the role existed.
    pub existed: bool,
    /// How many entities lost the role.
    pub removed_from_entity_count: usize,
    /// A success message.
    pub message: String,
}

/// API response describing how widely a role is used.
///
/// Callers show this before asking the owner to confirm a deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleUsageResponse {
    /// The role namespace.
    pub namespace: String,
    /// The role identifier.
    pub role_id: String,
    /// The role name.
    pub name: String,
    /// How many entities carry the role.
    pub usage: usize,
}

/// API response for a check-in toggle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckinToggleResponse {
    /// The entity kind.
    pub kind: String,
    /// The entity identifier.
    pub id: String,
    /// Whether the entity is now checked in.
    pub checked_in: bool,
    /// A success message.
    pub message: String,
}

/// API response for finalizing check-in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FinalizeCheckinResponse {
    /// Checked-in athletes carried into the new round.
    pub retained_athletes: usize,
    /// Athletes whose assignments and history were discarded.
    pub dropped_athletes: Vec<String>,
    /// Assignment links that were released.
    pub released_assignments: usize,
    /// A success message.
    pub message: String,
}

/// API request to assign a volunteer to an athlete.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignVolunteerRequest {
    /// The athlete receiving the volunteer.
    pub athlete_id: String,
    /// The volunteer being assigned.
    pub volunteer_id: String,
}

/// API request to move a volunteer between athletes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReassignVolunteerRequest {
    /// The volunteer being moved.
    pub volunteer_id: String,
    /// The athlete the volunteer is leaving.
    pub from_athlete_id: String,
    /// The athlete the volunteer is joining.
    pub to_athlete_id: String,
}

/// API response for an assign or unassign.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignmentResponse {
    /// The athlete identifier.
    pub athlete_id: String,
    /// The volunteer identifier.
    pub volunteer_id: String,
    /// Whether the roster changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API response for a reassignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReassignVolunteerResponse {
    /// Whether the volunteer moved. `false` when dropped on its own athlete.
    pub moved: bool,
    /// A success message.
    pub message: String,
}

/// API response for beginning or ending a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionResponse {
    /// The session owner.
    pub owner_key: String,
    /// Athletes on the roster.
    pub athletes: usize,
    /// Volunteers on the roster.
    pub volunteers: usize,
    /// A success message.
    pub message: String,
}

/// One entry in an owner's audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditEventInfo {
    /// The stored event identifier.
    pub event_id: Option<i64>,
    /// The action name.
    pub action: String,
    /// The action details.
    pub details: Option<String>,
    /// The actor identifier.
    pub actor_id: String,
    /// The actor type.
    pub actor_type: String,
    /// The cause identifier.
    pub cause_id: String,
    /// The cause description.
    pub cause_description: String,
    /// Summary of the roster before the action.
    pub before_snapshot: String,
    /// Summary of the roster after the action.
    pub after_snapshot: String,
}

/// API response listing an owner's audit timeline, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditTimelineResponse {
    /// The timeline owner.
    pub owner_key: String,
    /// The events.
    pub events: Vec<AuditEventInfo>,
}
