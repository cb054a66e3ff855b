// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RosterState;
use crate::tests::helpers::{add_test_athlete, add_test_volunteer};
use practice_roster_domain::{AthleteId, EntityRef, VolunteerId};

#[test]
fn test_toggle_checks_in_then_out() {
    let mut state: RosterState = RosterState::new();
    let athlete_id: AthleteId = add_test_athlete(&mut state, "Mia");
    let entity: EntityRef = EntityRef::Athlete(athlete_id.clone());

    assert!(state.toggle_checkin(&entity));
    assert!(state.is_checked_in(&entity));
    assert_eq!(state.checked_in_athletes(), &[athlete_id]);

    assert!(!state.toggle_checkin(&entity));
    assert!(!state.is_checked_in(&entity));
    assert!(state.checked_in_athletes().is_empty());
}

#[test]
fn test_athlete_and_volunteer_sets_are_separate() {
    let mut state: RosterState = RosterState::new();
    let volunteer_id: VolunteerId = add_test_volunteer(&mut state, "Sam");

    state.toggle_checkin(&EntityRef::Volunteer(volunteer_id.clone()));

    assert_eq!(state.checked_in_volunteers(), &[volunteer_id.clone()]);
    assert!(!state.is_checked_in(&EntityRef::Athlete(AthleteId::new(volunteer_id.value()))));
}

#[test]
fn test_unknown_ids_can_be_checked_in() {
    let mut state: RosterState = RosterState::new();
    let ghost: EntityRef = EntityRef::Athlete(AthleteId::new("_ghost"));

    assert!(state.toggle_checkin(&ghost));
    assert!(state.is_checked_in(&ghost));
}

#[test]
fn test_checkin_order_is_preserved() {
    let mut state: RosterState = RosterState::new();
    let first: VolunteerId = add_test_volunteer(&mut state, "Sam");
    let second: VolunteerId = add_test_volunteer(&mut state, "Ada");

    state.toggle_checkin(&EntityRef::Volunteer(second.clone()));
    state.toggle_checkin(&EntityRef::Volunteer(first.clone()));

    assert_eq!(state.checked_in_volunteers(), &[second, first]);
}
