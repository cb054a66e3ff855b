// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use practice_roster_domain::{AthleteId, EntityKind, EntityRef, RoleId, VolunteerId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new athlete.
    AddAthlete {
        /// The athlete's name.
        name: String,
        /// Free-text notes.
        notes: String,
        /// Athlete-namespace role ids.
        role_ids: Vec<RoleId>,
    },
    /// Replace an athlete's name, notes and roles.
    UpdateAthlete {
        /// The athlete to edit.
        athlete_id: AthleteId,
        /// The new name.
        name: String,
        /// The new notes.
        notes: String,
        /// The complete new role set.
        role_ids: Vec<RoleId>,
    },
    /// Add a new volunteer.
    AddVolunteer {
        /// The volunteer's name.
        name: String,
        /// Volunteer-namespace role ids.
        role_ids: Vec<RoleId>,
    },
    /// Replace a volunteer's name and roles.
    UpdateVolunteer {
        /// The volunteer to edit.
        volunteer_id: VolunteerId,
        /// The new name.
        name: String,
        /// The complete new role set.
        role_ids: Vec<RoleId>,
    },
    /// Define a role in a namespace.
    AddRole {
        /// The namespace of the role.
        namespace: EntityKind,
        /// The role name.
        name: String,
    },
    /// Delete a role and remove it from every entity in its namespace.
    DeleteRole {
        /// The namespace of the role.
        namespace: EntityKind,
        /// The role to delete.
        role_id: RoleId,
    },
    /// Flip an athlete's or volunteer's check-in state.
    ToggleCheckin {
        /// The entity to toggle.
        entity: EntityRef,
    },
    /// Assign a volunteer to an athlete.
    AssignVolunteer {
        /// The athlete receiving the volunteer.
        athlete_id: AthleteId,
        /// The volunteer being assigned.
        volunteer_id: VolunteerId,
    },
    /// Remove a volunteer from an athlete's assignments.
    UnassignVolunteer {
        /// The athlete losing the volunteer.
        athlete_id: AthleteId,
        /// The volunteer being removed.
        volunteer_id: VolunteerId,
    },
    /// Move a volunteer from one athlete to another.
    ReassignVolunteer {
        /// The volunteer being moved.
        volunteer_id: VolunteerId,
        /// The athlete the volunteer is dragged from.
        from_athlete_id: AthleteId,
        /// The athlete the volunteer is dropped on.
        to_athlete_id: AthleteId,
    },
    /// Prune assignments and history down to the checked-in athletes.
    FinalizeCheckin,
}

impl Command {
    /// Returns the name recorded as the audit action for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddAthlete { .. } => "AddAthlete",
            Self::UpdateAthlete { .. } => "UpdateAthlete",
            Self::AddVolunteer { .. } => "AddVolunteer",
            Self::UpdateVolunteer { .. } => "UpdateVolunteer",
            Self::AddRole { .. } => "AddRole",
            Self::DeleteRole { .. } => "DeleteRole",
            Self::ToggleCheckin { .. } => "ToggleCheckin",
            Self::AssignVolunteer { .. } => "AssignVolunteer",
            Self::UnassignVolunteer { .. } => "UnassignVolunteer",
            Self::ReassignVolunteer { .. } => "ReassignVolunteer",
            Self::FinalizeCheckin => "FinalizeCheckin",
        }
    }
}
