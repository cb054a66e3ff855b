// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over a roster.
//!
//! Views are rebuilt from the roster on every call and hold no state of
//! their own. Ids that no longer resolve (a deleted role, a volunteer id
//! left behind in a history list) are skipped rather than reported.

use practice_roster::RosterState;
use practice_roster_domain::{
    Athlete, AthleteId, EntityKind, EntityRef, Role, RoleId, Volunteer, VolunteerId,
};

/// A role with its current usage count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleView {
    /// The role identifier.
    pub id: String,
    /// The role name.
    pub name: String,
    /// How many entities carry the role.
    pub usage: usize,
}

/// An athlete as shown on the roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AthleteView {
    /// The athlete identifier.
    pub id: String,
    /// The athlete's display name.
    pub name: String,
    /// The athlete's notes.
    pub notes: String,
    /// The athlete's role ids.
    pub role_ids: Vec<String>,
    /// The names of the athlete's roles that still exist.
    pub role_names: Vec<String>,
}

/// A volunteer as shown on the roster.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VolunteerView {
    /// The volunteer identifier.
    pub id: String,
    /// The volunteer's display name.
    pub name: String,
    /// The volunteer's role ids.
    pub role_ids: Vec<String>,
    /// The names of the volunteer's roles that still exist.
    pub role_names: Vec<String>,
}

/// The whole roster with roles resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterView {
    /// Athletes in roster order.
    pub athletes: Vec<AthleteView>,
    /// Volunteers in roster order.
    pub volunteers: Vec<VolunteerView>,
    /// Athlete-namespace roles in definition order.
    pub athlete_roles: Vec<RoleView>,
    /// Volunteer-namespace roles in definition order.
    pub volunteer_roles: Vec<RoleView>,
}

/// An entity with its check-in flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckinEntry {
    /// The entity identifier.
    pub id: String,
    /// The entity's display name.
    pub name: String,
    /// Whether the entity is checked in.
    pub checked_in: bool,
}

/// Every roster entity with its check-in flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckinView {
    /// Athletes in roster order.
    pub athletes: Vec<CheckinEntry>,
    /// Volunteers in roster order.
    pub volunteers: Vec<CheckinEntry>,
}

/// A volunteer reduced to what a card needs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VolunteerSummary {
    /// The volunteer identifier.
    pub id: String,
    /// The volunteer's display name.
    pub name: String,
}

/// One checked-in athlete on the assignment board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AthleteCard {
    /// The athlete identifier.
    pub id: String,
    /// The athlete's display name.
    pub name: String,
    /// The athlete's notes.
    pub notes: String,
    /// The volunteers currently assigned, in assignment order.
    pub volunteers: Vec<VolunteerSummary>,
}

/// A checked-in volunteer available for assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailableVolunteer {
    /// The volunteer identifier.
    pub id: String,
    /// The volunteer's display name.
    pub name: String,
    /// Whether the volunteer is already assigned to some athlete.
    pub assigned_elsewhere: bool,
}

/// The assignment board for the current round.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignmentBoard {
    /// One card per checked-in athlete, in check-in order.
    pub athletes: Vec<AthleteCard>,
    /// Checked-in volunteers, in check-in order.
    pub available_volunteers: Vec<AvailableVolunteer>,
}

/// Volunteers who worked with an athlete before but are not assigned now.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PastVolunteersView {
    /// The athlete identifier.
    pub athlete_id: String,
    /// The past volunteers, in history order.
    pub volunteers: Vec<VolunteerSummary>,
}

fn role_views(state: &RosterState, namespace: EntityKind) -> Vec<RoleView> {
    state
        .roles(namespace)
        .iter()
        .map(|role: &Role| RoleView {
            id: role.id.value().to_string(),
            name: role.name.clone(),
            usage: state.role_usage(namespace, &role.id),
        })
        .collect()
}

fn role_names(state: &RosterState, namespace: EntityKind, role_ids: &[RoleId]) -> Vec<String> {
    state
        .role_names(namespace, role_ids)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn volunteer_summary(volunteer: &Volunteer) -> VolunteerSummary {
    VolunteerSummary {
        id: volunteer.id.value().to_string(),
        name: volunteer.name.clone(),
    }
}

fn resolve_volunteers<'a, I>(state: &RosterState, volunteer_ids: I) -> Vec<VolunteerSummary>
where
    I: IntoIterator<Item = &'a VolunteerId>,
{
    volunteer_ids
        .into_iter()
        .filter_map(|volunteer_id| state.find_volunteer(volunteer_id))
        .map(volunteer_summary)
        .collect()
}

/// Builds the roster view.
#[must_use]
pub fn build_roster_view(state: &RosterState) -> RosterView {
    RosterView {
        athletes: state
            .athletes()
            .iter()
            .map(|athlete: &Athlete| AthleteView {
                id: athlete.id.value().to_string(),
                name: athlete.name.clone(),
                notes: state.athlete_notes(&athlete.id).to_string(),
                role_ids: athlete.roles.iter().map(|id| id.value().to_string()).collect(),
                role_names: role_names(state, EntityKind::Athlete, &athlete.roles),
            })
            .collect(),
        volunteers: state
            .volunteers()
            .iter()
            .map(|volunteer: &Volunteer| VolunteerView {
                id: volunteer.id.value().to_string(),
                name: volunteer.name.clone(),
                role_ids: volunteer
                    .roles
                    .iter()
                    .map(|id| id.value().to_string())
                    .collect(),
                role_names: role_names(state, EntityKind::Volunteer, &volunteer.roles),
            })
            .collect(),
        athlete_roles: role_views(state, EntityKind::Athlete),
        volunteer_roles: role_views(state, EntityKind::Volunteer),
    }
}

/// Builds the check-in view.
#[must_use]
pub fn build_checkin_view(state: &RosterState) -> CheckinView {
    CheckinView {
        athletes: state
            .athletes()
            .iter()
            .map(|athlete| CheckinEntry {
                id: athlete.id.value().to_string(),
                name: athlete.name.clone(),
                checked_in: state.is_checked_in(&EntityRef::Athlete(athlete.id.clone())),
            })
            .collect(),
        volunteers: state
            .volunteers()
            .iter()
            .map(|volunteer| CheckinEntry {
                id: volunteer.id.value().to_string(),
                name: volunteer.name.clone(),
                checked_in: state.is_checked_in(&EntityRef::Volunteer(volunteer.id.clone())),
            })
            .collect(),
    }
}

/// Builds the assignment board.
///
/// Only checked-in athletes get a card. Every checked-in volunteer is listed
/// as available, flagged if already assigned somewhere.
#[must_use]
pub fn build_assignment_board(state: &RosterState) -> AssignmentBoard {
    AssignmentBoard {
        athletes: state
            .checked_in_athletes()
            .iter()
            .filter_map(|athlete_id| state.find_athlete(athlete_id))
            .map(|athlete| AthleteCard {
                id: athlete.id.value().to_string(),
                name: athlete.name.clone(),
                notes: state.athlete_notes(&athlete.id).to_string(),
                volunteers: resolve_volunteers(state, state.list_assigned(&athlete.id)),
            })
            .collect(),
        available_volunteers: state
            .checked_in_volunteers()
            .iter()
            .filter_map(|volunteer_id| state.find_volunteer(volunteer_id))
            .map(|volunteer| AvailableVolunteer {
                id: volunteer.id.value().to_string(),
                name: volunteer.name.clone(),
                assigned_elsewhere: state.is_assigned_anywhere(&volunteer.id),
            })
            .collect(),
    }
}

/// Builds the past-volunteer list for an athlete.
///
/// Returns `None` if the athlete is not on the roster.
#[must_use]
pub fn build_past_volunteers(
    state: &RosterState,
    athlete_id: &AthleteId,
) -> Option<PastVolunteersView> {
    let athlete: &Athlete = state.find_athlete(athlete_id)?;
    Some(PastVolunteersView {
        athlete_id: athlete.id.value().to_string(),
        volunteers: resolve_volunteers(state, state.past_volunteers(athlete_id)),
    })
}
