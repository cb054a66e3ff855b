// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment ledger: current assignments and cumulative volunteer history.
//!
//! Assignment lists never contain the same volunteer twice and are removed
//! as soon as they become empty. History lists only grow here; they are
//! rewritten only by check-in finalization.

use crate::outcome::{AssignmentChange, Reassignment};
use crate::state::RosterState;
use practice_roster_domain::{AthleteId, VolunteerId};
use std::collections::btree_map::Entry;

impl RosterState {
    /// Assigns a volunteer to an athlete.
    ///
    /// Assigning an already assigned volunteer leaves the assignment list
    /// alone. The volunteer is recorded in the athlete's history either way.
    pub fn assign(
        &mut self,
        athlete_id: &AthleteId,
        volunteer_id: &VolunteerId,
    ) -> AssignmentChange {
        let assigned: &mut Vec<VolunteerId> =
            self.assignments.entry(athlete_id.clone()).or_default();
        let assignments_changed: bool = push_unique(assigned, volunteer_id);

        let history: &mut Vec<VolunteerId> =
            self.volunteer_history.entry(athlete_id.clone()).or_default();
        let history_changed: bool = push_unique(history, volunteer_id);

        AssignmentChange {
            athlete_id: athlete_id.clone(),
            volunteer_id: volunteer_id.clone(),
            assignments_changed,
            history_changed,
            pruned: false,
        }
    }

    /// Removes a volunteer from an athlete's assignments.
    ///
    /// When the athlete's list becomes empty the athlete is dropped from the
    /// assignment map. History is never touched.
    pub fn unassign(
        &mut self,
        athlete_id: &AthleteId,
        volunteer_id: &VolunteerId,
    ) -> AssignmentChange {
        let mut assignments_changed: bool = false;
        let mut pruned: bool = false;

        if let Entry::Occupied(mut entry) = self.assignments.entry(athlete_id.clone()) {
            let assigned: &mut Vec<VolunteerId> = entry.get_mut();
            if let Some(index) = assigned.iter().position(|id| id == volunteer_id) {
                assigned.remove(index);
                assignments_changed = true;
            }
            if entry.get().is_empty() {
                entry.remove();
                pruned = true;
            }
        }

        AssignmentChange {
            athlete_id: athlete_id.clone(),
            volunteer_id: volunteer_id.clone(),
            assignments_changed,
            history_changed: false,
            pruned,
        }
    }

    /// Moves a volunteer from one athlete to another.
    ///
    /// This is an unassign from `from_athlete_id` followed by an assign to
    /// `to_athlete_id`. Dropping a volunteer back onto the athlete it came
    /// from changes nothing and returns `None`.
    pub fn reassign(
        &mut self,
        volunteer_id: &VolunteerId,
        from_athlete_id: &AthleteId,
        to_athlete_id: &AthleteId,
    ) -> Option<Reassignment> {
        if from_athlete_id == to_athlete_id {
            return None;
        }

        let unassigned: AssignmentChange = self.unassign(from_athlete_id, volunteer_id);
        let assigned: AssignmentChange = self.assign(to_athlete_id, volunteer_id);

        Some(Reassignment {
            unassigned,
            assigned,
        })
    }

    /// Returns the volunteers currently assigned to an athlete.
    ///
    /// Unknown or unassigned athletes yield an empty list.
    #[must_use]
    pub fn list_assigned(&self, athlete_id: &AthleteId) -> &[VolunteerId] {
        self.assignments.get(athlete_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks whether a volunteer is assigned to any athlete.
    ///
    /// Computed on every call by scanning the assignment map.
    #[must_use]
    pub fn is_assigned_anywhere(&self, volunteer_id: &VolunteerId) -> bool {
        self.assignments
            .values()
            .any(|assigned| assigned.contains(volunteer_id))
    }

    /// Returns every volunteer ever assigned to an athlete, in first-assignment order.
    #[must_use]
    pub fn volunteer_history(&self, athlete_id: &AthleteId) -> &[VolunteerId] {
        self.volunteer_history
            .get(athlete_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the athlete's past volunteers: history entries that are not
    /// currently assigned to that athlete.
    #[must_use]
    pub fn past_volunteers(&self, athlete_id: &AthleteId) -> Vec<&VolunteerId> {
        let current: &[VolunteerId] = self.list_assigned(athlete_id);
        self.volunteer_history(athlete_id)
            .iter()
            .filter(|volunteer_id| !current.contains(*volunteer_id))
            .collect()
    }
}

fn push_unique(list: &mut Vec<VolunteerId>, volunteer_id: &VolunteerId) -> bool {
    if list.contains(volunteer_id) {
        return false;
    }
    list.push(volunteer_id.clone());
    true
}
