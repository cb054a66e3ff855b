// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-in tracker: which athletes and volunteers are present.
//!
//! Membership is not validated against the roster store. An id that is not
//! on the roster can still be checked in; read-views skip it.

use crate::state::RosterState;
use practice_roster_domain::{AthleteId, EntityRef, VolunteerId};

impl RosterState {
    /// Flips the check-in state of an athlete or volunteer.
    ///
    /// Returns the new membership state: `true` if the entity is now present.
    pub fn toggle_checkin(&mut self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Athlete(athlete_id) => {
                toggle_member(&mut self.checked_in_athletes, athlete_id)
            }
            EntityRef::Volunteer(volunteer_id) => {
                toggle_member(&mut self.checked_in_volunteers, volunteer_id)
            }
        }
    }

    /// Checks whether an athlete or volunteer is checked in.
    #[must_use]
    pub fn is_checked_in(&self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Athlete(athlete_id) => self.checked_in_athletes.contains(athlete_id),
            EntityRef::Volunteer(volunteer_id) => {
                self.checked_in_volunteers.contains(volunteer_id)
            }
        }
    }

    /// Returns the checked-in athlete ids in check-in order.
    #[must_use]
    pub fn checked_in_athletes(&self) -> &[AthleteId] {
        &self.checked_in_athletes
    }

    /// Returns the checked-in volunteer ids in check-in order.
    #[must_use]
    pub fn checked_in_volunteers(&self) -> &[VolunteerId] {
        &self.checked_in_volunteers
    }
}

fn toggle_member<T: PartialEq + Clone>(members: &mut Vec<T>, id: &T) -> bool {
    if let Some(index) = members.iter().position(|member| member == id) {
        members.remove(index);
        false
    } else {
        members.push(id.clone());
        true
    }
}
