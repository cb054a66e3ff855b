// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RosterState;
use practice_roster_domain::{AthleteId, EntityKind, EntityRef, RoleId, VolunteerId};
use proptest::prelude::*;
use std::collections::HashSet;

const POOL: usize = 4;

fn athlete(index: usize) -> AthleteId {
    AthleteId::new(&format!("_a{index}"))
}

fn volunteer(index: usize) -> VolunteerId {
    VolunteerId::new(&format!("_v{index}"))
}

#[derive(Debug, Clone)]
enum LedgerOp {
    Assign(usize, usize),
    Unassign(usize, usize),
}

fn ledger_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        (0..POOL, 0..POOL).prop_map(|(a, v)| LedgerOp::Assign(a, v)),
        (0..POOL, 0..POOL).prop_map(|(a, v)| LedgerOp::Unassign(a, v)),
    ]
}

fn run_ledger(ops: &[LedgerOp]) -> RosterState {
    let mut state: RosterState = RosterState::new();
    for op in ops {
        match op {
            LedgerOp::Assign(a, v) => {
                state.assign(&athlete(*a), &volunteer(*v));
            }
            LedgerOp::Unassign(a, v) => {
                state.unassign(&athlete(*a), &volunteer(*v));
            }
        }
    }
    state
}

proptest! {
    #[test]
    fn assign_is_idempotent(ops in prop::collection::vec(ledger_op(), 0..30), a in 0..POOL, v in 0..POOL) {
        let mut once: RosterState = run_ledger(&ops);
        once.assign(&athlete(a), &volunteer(v));
        let mut twice: RosterState = once.clone();
        twice.assign(&athlete(a), &volunteer(v));

        prop_assert_eq!(once.list_assigned(&athlete(a)), twice.list_assigned(&athlete(a)));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn assignment_lists_are_never_empty(ops in prop::collection::vec(ledger_op(), 0..40)) {
        let state: RosterState = run_ledger(&ops);

        prop_assert!(state.assignments().values().all(|assigned| !assigned.is_empty()));
        for assigned in state.assignments().values() {
            let unique: HashSet<&VolunteerId> = assigned.iter().collect();
            prop_assert_eq!(unique.len(), assigned.len());
        }
    }

    #[test]
    fn unassign_leaves_history_alone(ops in prop::collection::vec(ledger_op(), 0..30), a in 0..POOL, v in 0..POOL) {
        let mut state: RosterState = run_ledger(&ops);
        let before: Vec<VolunteerId> = state.volunteer_history(&athlete(a)).to_vec();

        state.unassign(&athlete(a), &volunteer(v));

        prop_assert_eq!(state.volunteer_history(&athlete(a)), before.as_slice());
    }

    #[test]
    fn reassign_is_unassign_then_assign(
        ops in prop::collection::vec(ledger_op(), 0..30),
        from in 0..POOL,
        to in 0..POOL,
        v in 0..POOL,
    ) {
        prop_assume!(from != to);
        let mut state: RosterState = run_ledger(&ops);
        let mut expected_to: Vec<VolunteerId> = state.list_assigned(&athlete(to)).to_vec();
        if !expected_to.contains(&volunteer(v)) {
            expected_to.push(volunteer(v));
        }

        state.reassign(&volunteer(v), &athlete(from), &athlete(to));

        prop_assert!(!state.list_assigned(&athlete(from)).contains(&volunteer(v)));
        prop_assert_eq!(state.list_assigned(&athlete(to)), expected_to.as_slice());
        prop_assert!(state.volunteer_history(&athlete(to)).contains(&volunteer(v)));
    }

    #[test]
    fn deleted_role_disappears_everywhere(
        athlete_roles in prop::collection::vec(prop::collection::vec(0..POOL, 0..POOL), 0..6),
        doomed in 0..POOL,
    ) {
        let mut state: RosterState = RosterState::new();
        let role_ids: Vec<RoleId> = (0..POOL)
            .map(|index| state.add_role(EntityKind::Athlete, &format!("role {index}")).unwrap())
            .collect();
        for (index, picks) in athlete_roles.iter().enumerate() {
            let roles: Vec<RoleId> = picks.iter().map(|pick| role_ids[*pick].clone()).collect();
            state.add_athlete(&format!("athlete {index}"), "", roles).unwrap();
        }
        let doomed_id: RoleId = role_ids[doomed].clone();

        state.delete_role(EntityKind::Athlete, &doomed_id);

        prop_assert!(state.athletes().iter().all(|a| !a.roles.contains(&doomed_id)));
        prop_assert!(state.find_role(EntityKind::Athlete, &doomed_id).is_none());
        prop_assert_eq!(state.roles(EntityKind::Athlete).len(), POOL - 1);
    }

    #[test]
    fn finalize_keeps_only_present_pairs(
        ops in prop::collection::vec(ledger_op(), 0..40),
        present_athletes in prop::collection::hash_set(0..POOL, 0..POOL),
        present_volunteers in prop::collection::hash_set(0..POOL, 0..POOL),
    ) {
        let mut state: RosterState = run_ledger(&ops);
        for a in &present_athletes {
            state.toggle_checkin(&EntityRef::Athlete(athlete(*a)));
        }
        for v in &present_volunteers {
            state.toggle_checkin(&EntityRef::Volunteer(volunteer(*v)));
        }
        let athletes_in: HashSet<AthleteId> = present_athletes.iter().map(|a| athlete(*a)).collect();
        let volunteers_in: HashSet<VolunteerId> =
            present_volunteers.iter().map(|v| volunteer(*v)).collect();

        let before: RosterState = state.clone();

        state.finalize_checkin();

        for athlete_id in &athletes_in {
            let kept: Vec<VolunteerId> = before
                .list_assigned(athlete_id)
                .iter()
                .filter(|v| volunteers_in.contains(*v))
                .cloned()
                .collect();
            prop_assert_eq!(state.list_assigned(athlete_id), kept.as_slice());
            prop_assert_eq!(
                state.volunteer_history_map().get(athlete_id),
                Some(&before.volunteer_history(athlete_id).to_vec())
            );
        }
        prop_assert_eq!(state.volunteer_history_map().len(), athletes_in.len());
        for (athlete_id, assigned) in state.assignments() {
            prop_assert!(athletes_in.contains(athlete_id));
            prop_assert!(!assigned.is_empty());
            prop_assert!(assigned.iter().all(|v| volunteers_in.contains(v)));
        }
        for athlete_id in state.volunteer_history_map().keys() {
            prop_assert!(athletes_in.contains(athlete_id));
        }
    }
}
