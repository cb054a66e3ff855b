// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod file_tests;
mod store_tests;

use practice_roster::{Command, RosterState, TransitionResult, apply};
use practice_roster_audit::{Actor, Cause};
use practice_roster_domain::{EntityKind, OwnerKey};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("test-actor"), String::from("owner"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_owner(key: &str) -> OwnerKey {
    OwnerKey::new(key).unwrap()
}

/// Builds a small roster: two athletes, one volunteer, one athlete role,
/// with Mia checked in and assigned to Sam.
pub fn create_test_roster() -> RosterState {
    let mut state: RosterState = RosterState::new();
    let sprinter = state.add_role(EntityKind::Athlete, "Sprinter").unwrap();
    let mia = state
        .add_athlete("Mia", "prefers lane 2", vec![sprinter])
        .unwrap();
    state.add_athlete("Leo", "", Vec::new()).unwrap();
    let sam = state.add_volunteer("Sam", Vec::new()).unwrap();
    state.toggle_checkin(&practice_roster_domain::EntityRef::Athlete(mia.clone()));
    state.toggle_checkin(&practice_roster_domain::EntityRef::Volunteer(sam.clone()));
    state.assign(&mia, &sam);
    state
}

pub fn create_test_transition(state: &RosterState) -> TransitionResult {
    apply(
        state,
        Command::AddVolunteer {
            name: String::from("Ada"),
            role_ids: Vec::new(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
}
