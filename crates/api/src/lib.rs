// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the practice roster.
//!
//! This crate owns the live roster sessions and turns requests into core
//! commands. It never talks HTTP. Callers get back plain response types
//! and a [`FlushRequest`] describing what storage needs to write.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;
mod session;
mod views;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    ApiResult, add_athlete, add_role, add_volunteer, assign_volunteer, begin_session,
    delete_role, end_session, finalize_checkin, get_assignment_board, get_audit_timeline,
    get_checkin, get_past_volunteers, get_role_usage, get_roster, reassign_volunteer,
    toggle_checkin, unassign_volunteer, update_athlete, update_volunteer,
};
pub use request_response::{
    AddAthleteRequest, AddRoleRequest, AddRoleResponse, AddVolunteerRequest,
    AssignVolunteerRequest, AssignmentResponse, AthleteResponse, AuditEventInfo,
    AuditTimelineResponse, CheckinToggleResponse, DeleteRoleResponse, FinalizeCheckinResponse,
    ReassignVolunteerRequest, ReassignVolunteerResponse, RoleUsageResponse, SessionResponse,
    UpdateAthleteRequest, UpdateVolunteerRequest, VolunteerResponse,
};
pub use session::{
    Executed, FlushRequest, FlushStatus, RosterSession, SessionError, SessionRegistry, flush,
};
pub use views::{
    AssignmentBoard, AthleteCard, AthleteView, AvailableVolunteer, CheckinEntry, CheckinView,
    PastVolunteersView, RoleView, RosterView, VolunteerSummary, VolunteerView,
    build_assignment_board, build_checkin_view, build_past_volunteers, build_roster_view,
};
