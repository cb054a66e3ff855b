// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! What a transition changed.
//!
//! The core never calls back into a presentation layer. Instead every
//! operation reports what it did, and the caller decides what to refresh.

use practice_roster_domain::{AthleteId, EntityKind, EntityRef, RoleId, VolunteerId};

/// The effect of an assign or unassign on the assignment ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentChange {
    /// The athlete whose assignments were targeted.
    pub athlete_id: AthleteId,
    /// The volunteer that was assigned or unassigned.
    pub volunteer_id: VolunteerId,
    /// Whether the athlete's assignment list changed.
    pub assignments_changed: bool,
    /// Whether the athlete's history gained the volunteer.
    pub history_changed: bool,
    /// Whether the athlete was dropped from the assignment map because its
    /// list became empty.
    pub pruned: bool,
}

/// The two halves of a volunteer moving between athletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    /// The removal from the source athlete.
    pub unassigned: AssignmentChange,
    /// The addition to the destination athlete.
    pub assigned: AssignmentChange,
}

/// The effect of deleting a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDeletion {
    /// Whether the role existed in the namespace.
    pub existed: bool,
    /// How many entities had the role removed.
    pub removed_from_entity_count: usize,
}

/// The effect of finalizing check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeSummary {
    /// Checked-in athletes carried into the new round.
    pub retained_athletes: usize,
    /// Athletes whose assignments or history were discarded because they
    /// were not checked in.
    pub dropped_athletes: Vec<AthleteId>,
    /// Assignment links removed, either because the volunteer left or
    /// because the athlete was dropped.
    pub released_assignments: usize,
}

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An athlete was added.
    AthleteAdded {
        /// The new athlete's id.
        athlete_id: AthleteId,
    },
    /// An athlete was edited.
    AthleteUpdated {
        /// The edited athlete's id.
        athlete_id: AthleteId,
    },
    /// A volunteer was added.
    VolunteerAdded {
        /// The new volunteer's id.
        volunteer_id: VolunteerId,
    },
    /// A volunteer was edited.
    VolunteerUpdated {
        /// The edited volunteer's id.
        volunteer_id: VolunteerId,
    },
    /// A role was defined.
    RoleAdded {
        /// The namespace of the role.
        namespace: EntityKind,
        /// The new role's id.
        role_id: RoleId,
    },
    /// A role was deleted, cascading into entity role sets.
    RoleDeleted {
        /// The namespace of the role.
        namespace: EntityKind,
        /// The deleted role's id.
        role_id: RoleId,
        /// What the deletion affected.
        deletion: RoleDeletion,
    },
    /// An athlete or volunteer was checked in or out.
    CheckinToggled {
        /// The entity whose presence changed.
        entity: EntityRef,
        /// Whether the entity is now checked in.
        checked_in: bool,
    },
    /// A volunteer was assigned to an athlete.
    Assigned(AssignmentChange),
    /// A volunteer was unassigned from an athlete.
    Unassigned(AssignmentChange),
    /// A volunteer was moved between athletes. `None` for a self-drop.
    Reassigned(Option<Reassignment>),
    /// Check-in was finalized.
    CheckinFinalized(FinalizeSummary),
}

impl Outcome {
    /// Returns `true` if the transition left the roster unchanged.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        match self {
            Self::RoleDeleted { deletion, .. } => {
                !deletion.existed && deletion.removed_from_entity_count == 0
            }
            Self::Assigned(change) => !change.assignments_changed && !change.history_changed,
            Self::Unassigned(change) => !change.assignments_changed && !change.pruned,
            Self::Reassigned(reassignment) => reassignment.is_none(),
            Self::AthleteAdded { .. }
            | Self::AthleteUpdated { .. }
            | Self::VolunteerAdded { .. }
            | Self::VolunteerUpdated { .. }
            | Self::RoleAdded { .. }
            | Self::CheckinToggled { .. }
            | Self::CheckinFinalized(_) => false,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AthleteAdded { athlete_id } => write!(f, "Added athlete '{athlete_id}'"),
            Self::AthleteUpdated { athlete_id } => write!(f, "Updated athlete '{athlete_id}'"),
            Self::VolunteerAdded { volunteer_id } => {
                write!(f, "Added volunteer '{volunteer_id}'")
            }
            Self::VolunteerUpdated { volunteer_id } => {
                write!(f, "Updated volunteer '{volunteer_id}'")
            }
            Self::RoleAdded { namespace, role_id } => {
                write!(f, "Added {namespace} role '{role_id}'")
            }
            Self::RoleDeleted {
                namespace,
                role_id,
                deletion,
            } => write!(
                f,
                "Deleted {namespace} role '{role_id}' (removed from {} entities)",
                deletion.removed_from_entity_count
            ),
            Self::CheckinToggled { entity, checked_in } => {
                let verb: &str = if *checked_in {
                    "Checked in"
                } else {
                    "Checked out"
                };
                write!(f, "{verb} {} '{}'", entity.kind(), entity.id_value())
            }
            Self::Assigned(change) => write!(
                f,
                "Assigned volunteer '{}' to athlete '{}'",
                change.volunteer_id, change.athlete_id
            ),
            Self::Unassigned(change) => write!(
                f,
                "Unassigned volunteer '{}' from athlete '{}'",
                change.volunteer_id, change.athlete_id
            ),
            Self::Reassigned(Some(reassignment)) => write!(
                f,
                "Moved volunteer '{}' from athlete '{}' to athlete '{}'",
                reassignment.assigned.volunteer_id,
                reassignment.unassigned.athlete_id,
                reassignment.assigned.athlete_id
            ),
            Self::Reassigned(None) => write!(f, "Volunteer dropped on its own athlete"),
            Self::CheckinFinalized(summary) => write!(
                f,
                "Finalized check-in: {} athletes retained, {} dropped, {} assignments released",
                summary.retained_athletes,
                summary.dropped_athletes.len(),
                summary.released_assignments
            ),
        }
    }
}
