// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::Outcome;
use practice_roster_audit::{AuditEvent, StateSnapshot};
use practice_roster_domain::{
    Athlete, AthleteId, Role, RoleId, Volunteer, VolunteerId, normalize_role_ids,
};
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// The complete roster of one owner.
///
/// This aggregate owns every collection the roster components work on:
///
/// - the athlete and volunteer records plus athlete notes (roster store)
/// - the athlete and volunteer role namespaces (role registry)
/// - the checked-in athlete and volunteer ids (check-in tracker)
/// - the current assignments and the cumulative volunteer history
///   (assignment ledger)
///
/// It is loaded and saved as a whole. The component operations live in
/// `impl RosterState` blocks next to each component and always take the
/// aggregate by explicit reference.
///
/// Invariants maintained by every operation:
/// - no athlete maps to an empty assignment list
/// - assignment lists, history lists and check-in sets hold no duplicates
/// - role names are unique within their namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    pub(crate) athletes: Vec<Athlete>,
    pub(crate) athlete_notes: BTreeMap<AthleteId, String>,
    pub(crate) volunteers: Vec<Volunteer>,
    pub(crate) athlete_roles: Vec<Role>,
    pub(crate) volunteer_roles: Vec<Role>,
    pub(crate) checked_in_athletes: Vec<AthleteId>,
    pub(crate) checked_in_volunteers: Vec<VolunteerId>,
    pub(crate) assignments: BTreeMap<AthleteId, Vec<VolunteerId>>,
    pub(crate) volunteer_history: BTreeMap<AthleteId, Vec<VolunteerId>>,
}

/// The raw collections of a roster, used to move rosters across the
/// persistence boundary.
///
/// `RosterParts` carries no guarantees; converting it into a `RosterState`
/// normalizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterParts {
    /// Athlete records in roster order.
    pub athletes: Vec<Athlete>,
    /// Free-text notes keyed by athlete id.
    pub athlete_notes: BTreeMap<AthleteId, String>,
    /// Volunteer records in roster order.
    pub volunteers: Vec<Volunteer>,
    /// Athlete-namespace roles.
    pub athlete_roles: Vec<Role>,
    /// Volunteer-namespace roles.
    pub volunteer_roles: Vec<Role>,
    /// Checked-in athlete ids in check-in order.
    pub checked_in_athletes: Vec<AthleteId>,
    /// Checked-in volunteer ids in check-in order.
    pub checked_in_volunteers: Vec<VolunteerId>,
    /// Current assignments, athlete to volunteers in assignment order.
    pub assignments: BTreeMap<AthleteId, Vec<VolunteerId>>,
    /// Every volunteer ever assigned to each athlete, in first-assignment order.
    pub volunteer_history: BTreeMap<AthleteId, Vec<VolunteerId>>,
}

impl RosterState {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            athletes: Vec::new(),
            athlete_notes: BTreeMap::new(),
            volunteers: Vec::new(),
            athlete_roles: Vec::new(),
            volunteer_roles: Vec::new(),
            checked_in_athletes: Vec::new(),
            checked_in_volunteers: Vec::new(),
            assignments: BTreeMap::new(),
            volunteer_history: BTreeMap::new(),
        }
    }

    /// Builds a roster from raw collections, restoring the invariants.
    ///
    /// Data written by older versions of the roster may contain duplicate
    /// ids or empty assignment lists. Duplicates are collapsed keeping the
    /// first occurrence, and empty assignment lists are dropped. Empty
    /// history lists are kept. Dangling ids are left alone.
    #[must_use]
    pub fn from_parts(parts: RosterParts) -> Self {
        let RosterParts {
            athletes,
            athlete_notes,
            volunteers,
            athlete_roles,
            volunteer_roles,
            checked_in_athletes,
            checked_in_volunteers,
            assignments,
            volunteer_history,
        } = parts;

        let athletes: Vec<Athlete> = athletes
            .into_iter()
            .map(|mut athlete| {
                athlete.roles = normalize_role_ids(athlete.roles);
                athlete
            })
            .collect();
        let volunteers: Vec<Volunteer> = volunteers
            .into_iter()
            .map(|mut volunteer| {
                volunteer.roles = normalize_role_ids(volunteer.roles);
                volunteer
            })
            .collect();

        let assignments: BTreeMap<AthleteId, Vec<VolunteerId>> = assignments
            .into_iter()
            .map(|(athlete_id, volunteer_ids)| (athlete_id, dedup_in_order(volunteer_ids)))
            .filter(|(_, volunteer_ids)| !volunteer_ids.is_empty())
            .collect();
        let volunteer_history: BTreeMap<AthleteId, Vec<VolunteerId>> = volunteer_history
            .into_iter()
            .map(|(athlete_id, volunteer_ids)| (athlete_id, dedup_in_order(volunteer_ids)))
            .collect();

        Self {
            athletes,
            athlete_notes,
            volunteers,
            athlete_roles,
            volunteer_roles,
            checked_in_athletes: dedup_in_order(checked_in_athletes),
            checked_in_volunteers: dedup_in_order(checked_in_volunteers),
            assignments,
            volunteer_history,
        }
    }

    /// Copies the roster out into raw collections.
    #[must_use]
    pub fn to_parts(&self) -> RosterParts {
        RosterParts {
            athletes: self.athletes.clone(),
            athlete_notes: self.athlete_notes.clone(),
            volunteers: self.volunteers.clone(),
            athlete_roles: self.athlete_roles.clone(),
            volunteer_roles: self.volunteer_roles.clone(),
            checked_in_athletes: self.checked_in_athletes.clone(),
            checked_in_volunteers: self.checked_in_volunteers.clone(),
            assignments: self.assignments.clone(),
            volunteer_history: self.volunteer_history.clone(),
        }
    }

    /// Returns the athlete records in roster order.
    #[must_use]
    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    /// Returns the volunteer records in roster order.
    #[must_use]
    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    /// Returns the notes map keyed by athlete id.
    #[must_use]
    pub const fn athlete_notes_map(&self) -> &BTreeMap<AthleteId, String> {
        &self.athlete_notes
    }

    /// Returns the current assignment map.
    #[must_use]
    pub const fn assignments(&self) -> &BTreeMap<AthleteId, Vec<VolunteerId>> {
        &self.assignments
    }

    /// Returns the cumulative volunteer history map.
    #[must_use]
    pub const fn volunteer_history_map(&self) -> &BTreeMap<AthleteId, Vec<VolunteerId>> {
        &self.volunteer_history
    }

    /// Summarizes the roster for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            athletes: self.athletes.len(),
            volunteers: self.volunteers.len(),
            athlete_roles: self.athlete_roles.len(),
            volunteer_roles: self.volunteer_roles.len(),
            checked_in_athletes: self.checked_in_athletes.len(),
            checked_in_volunteers: self.checked_in_volunteers.len(),
            assigned_athletes: self.assignments.len(),
            assignment_links: self.assignments.values().map(Vec::len).sum(),
            history_links: self.volunteer_history.values().map(Vec::len).sum(),
        }
    }

    /// Generates a role id not yet used in either namespace.
    pub(crate) fn fresh_role_id(&self) -> RoleId {
        loop {
            let candidate: RoleId = RoleId::generate();
            let taken: bool = self
                .athlete_roles
                .iter()
                .chain(self.volunteer_roles.iter())
                .any(|role| role.id == candidate);
            if !taken {
                return candidate;
            }
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: RosterState,
    /// What the transition changed, so callers know what to refresh.
    pub outcome: Outcome,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// Removes duplicates from a list, keeping the first occurrence of each value.
pub(crate) fn dedup_in_order<T: Eq + Hash + Clone>(values: Vec<T>) -> Vec<T> {
    let mut seen: HashSet<T> = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
