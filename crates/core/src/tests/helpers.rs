// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RosterState;
use practice_roster_audit::{Actor, Cause};
use practice_roster_domain::{AthleteId, EntityRef, VolunteerId};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("coach-123"), String::from("owner"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Coach request"))
}

pub fn add_test_athlete(state: &mut RosterState, name: &str) -> AthleteId {
    state.add_athlete(name, "", Vec::new()).unwrap()
}

pub fn add_test_volunteer(state: &mut RosterState, name: &str) -> VolunteerId {
    state.add_volunteer(name, Vec::new()).unwrap()
}

pub fn check_in_athlete(state: &mut RosterState, athlete_id: &AthleteId) {
    assert!(state.toggle_checkin(&EntityRef::Athlete(athlete_id.clone())));
}

pub fn check_in_volunteer(state: &mut RosterState, volunteer_id: &VolunteerId) {
    assert!(state.toggle_checkin(&EntityRef::Volunteer(volunteer_id.clone())));
}
