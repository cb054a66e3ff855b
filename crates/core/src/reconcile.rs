// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session reconciler: finalizing check-in before a new assignment round.

use crate::outcome::FinalizeSummary;
use crate::state::RosterState;
use practice_roster_domain::{AthleteId, VolunteerId};
use std::collections::{BTreeMap, BTreeSet, HashSet};

impl RosterState {
    /// Prunes assignments and history down to the checked-in athletes.
    ///
    /// For every checked-in athlete:
    /// - assignments keep only volunteers that are checked in; an athlete
    ///   left with none is dropped from the assignment map
    /// - history is carried over unfiltered, or starts empty
    ///
    /// Athletes that are not checked in lose both their assignments and
    /// their history. Both maps are rebuilt first and swapped in together.
    pub fn finalize_checkin(&mut self) -> FinalizeSummary {
        let present_volunteers: HashSet<&VolunteerId> =
            self.checked_in_volunteers.iter().collect();

        let mut assignments: BTreeMap<AthleteId, Vec<VolunteerId>> = BTreeMap::new();
        let mut volunteer_history: BTreeMap<AthleteId, Vec<VolunteerId>> = BTreeMap::new();
        let mut released_assignments: usize = 0;

        for athlete_id in &self.checked_in_athletes {
            if let Some(assigned) = self.assignments.get(athlete_id) {
                let kept: Vec<VolunteerId> = assigned
                    .iter()
                    .filter(|volunteer_id| present_volunteers.contains(volunteer_id))
                    .cloned()
                    .collect();
                released_assignments += assigned.len() - kept.len();
                if !kept.is_empty() {
                    assignments.insert(athlete_id.clone(), kept);
                }
            }

            let history: Vec<VolunteerId> = self
                .volunteer_history
                .get(athlete_id)
                .cloned()
                .unwrap_or_default();
            volunteer_history.insert(athlete_id.clone(), history);
        }

        let dropped_athletes: Vec<AthleteId> = self
            .assignments
            .keys()
            .chain(self.volunteer_history.keys())
            .filter(|athlete_id| !volunteer_history.contains_key(*athlete_id))
            .cloned()
            .collect::<BTreeSet<AthleteId>>()
            .into_iter()
            .collect();
        released_assignments += self
            .assignments
            .iter()
            .filter(|(athlete_id, _)| !volunteer_history.contains_key(*athlete_id))
            .map(|(_, assigned)| assigned.len())
            .sum::<usize>();

        let retained_athletes: usize = volunteer_history.len();
        self.assignments = assignments;
        self.volunteer_history = volunteer_history;

        FinalizeSummary {
            retained_athletes,
            dropped_athletes,
            released_assignments,
        }
    }
}
