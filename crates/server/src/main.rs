// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
#![allow(clippy::multiple_crate_versions)]

mod session;
mod writer;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use practice_roster_api::{
    AddAthleteRequest, AddRoleRequest, AddRoleResponse, AddVolunteerRequest, ApiError, ApiResult,
    AssignVolunteerRequest, AssignmentBoard, AssignmentResponse, AthleteResponse,
    AuditTimelineResponse, CheckinToggleResponse, CheckinView, DeleteRoleResponse,
    FinalizeCheckinResponse, FlushStatus, PastVolunteersView, ReassignVolunteerRequest,
    ReassignVolunteerResponse, RoleUsageResponse, RosterSession, RosterView, SessionRegistry,
    SessionResponse, UpdateAthleteRequest, UpdateVolunteerRequest, VolunteerResponse,
    add_athlete, add_role, add_volunteer, assign_volunteer, begin_session, delete_role,
    end_session, finalize_checkin, get_assignment_board, get_audit_timeline, get_checkin,
    get_past_volunteers, get_role_usage, get_roster, reassign_volunteer, toggle_checkin,
    unassign_volunteer, update_athlete, update_volunteer,
};
use practice_roster_audit::Cause;
use practice_roster_domain::{OwnerKey, generate_id};
use practice_roster_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, OwnedMutexGuard};
use tracing::{debug, error, info, warn};

use crate::session::Owner;
use crate::writer::SnapshotWriter;

/// Practice roster server - HTTP server for athlete check-in and volunteer assignment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// Locks are always taken sessions first, then persistence. Persistence is
/// only locked from the blocking pool.
#[derive(Clone)]
struct AppState {
    /// The live roster sessions.
    sessions: Arc<Mutex<SessionRegistry>>,
    /// The persistence layer for snapshots and audit events.
    persistence: Arc<Mutex<Persistence>>,
    /// The background writer that flushes snapshots.
    writer: SnapshotWriter,
}

impl AppState {
    /// Builds the state and starts the snapshot writer.
    fn new(persistence: Persistence) -> Self {
        let persistence: Arc<Mutex<Persistence>> = Arc::new(Mutex::new(persistence));
        Self {
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
            writer: SnapshotWriter::spawn(Arc::clone(&persistence)),
            persistence,
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } | ApiError::SessionAlreadyActive { .. } => {
                StatusCode::CONFLICT
            }
            ApiError::ResourceNotFound { .. } | ApiError::NoActiveSession { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Builds the cause recorded for one request.
fn request_cause(description: &str) -> Cause {
    Cause::new(generate_id(), description.to_string())
}

/// Runs a storage operation on the blocking pool.
async fn with_store<T, F>(persistence: &Arc<Mutex<Persistence>>, operation: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&mut Persistence) -> Result<T, ApiError> + Send + 'static,
{
    let persistence: Arc<Mutex<Persistence>> = Arc::clone(persistence);
    let result: Result<Result<T, ApiError>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || {
            let mut guard: MutexGuard<'_, Persistence> = persistence.blocking_lock();
            operation(&mut guard)
        })
        .await;

    match result {
        Ok(outcome) => outcome.map_err(HttpError::from),
        Err(e) => Err(HttpError::from(ApiError::Internal {
            message: format!("Storage task failed: {e}"),
        })),
    }
}

/// Runs a roster edit against the owner's session and queues its flush.
///
/// The flush is queued while the session lock is held, so snapshots reach
/// the writer in the order the edits were applied.
async fn mutate<T, F>(
    app_state: &AppState,
    owner_key: &OwnerKey,
    operation: F,
) -> Result<Json<T>, HttpError>
where
    F: FnOnce(&mut RosterSession) -> Result<ApiResult<T>, ApiError>,
{
    let mut sessions = app_state.sessions.lock().await;
    let session: &mut RosterSession = sessions.get_mut(owner_key).map_err(ApiError::from)?;
    let result: ApiResult<T> = operation(session)?;
    app_state.writer.submit(result.flush);
    drop(sessions);

    Ok(Json(result.response))
}

/// Reads from the owner's session.
async fn read<T, F>(app_state: &AppState, owner_key: &OwnerKey, view: F) -> Result<Json<T>, HttpError>
where
    F: FnOnce(&RosterSession) -> Result<T, ApiError>,
{
    let sessions = app_state.sessions.lock().await;
    let session: &RosterSession = sessions.get(owner_key).map_err(ApiError::from)?;
    let response: T = view(session)?;
    drop(sessions);

    Ok(Json(response))
}

/// Handler for POST `/session` endpoint.
///
/// Loads the owner's stored roster into a live session.
async fn handle_begin_session(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<SessionResponse>, HttpError> {
    info!(owner_key = %owner_key, "Handling begin session request");

    let mut sessions: OwnedMutexGuard<SessionRegistry> =
        Arc::clone(&app_state.sessions).lock_owned().await;
    let (response, active): (SessionResponse, usize) =
        with_store(&app_state.persistence, move |store| {
            let response: SessionResponse = begin_session(&mut sessions, store, owner_key)?;
            Ok((response, sessions.len()))
        })
        .await?;
    debug!(active_sessions = active, "Session registry updated");

    Ok(Json(response))
}

/// Handler for DELETE `/session` endpoint.
///
/// Writes the final roster before the session is discarded. The session
/// lock is held until that write completes, so a new session for the same
/// owner cannot load an older roster.
#[allow(clippy::significant_drop_tightening)]
async fn handle_end_session(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<SessionResponse>, HttpError> {
    info!(owner_key = %owner_key, "Handling end session request");

    let mut sessions = app_state.sessions.lock().await;
    let result: ApiResult<SessionResponse> = end_session(&mut sessions, &owner_key)?;
    let status: FlushStatus = app_state.writer.flush_now(result.flush).await;
    let active: usize = sessions.len();
    drop(sessions);
    debug!(active_sessions = active, "Session registry updated");

    if !status.is_flushed() {
        warn!(owner_key = %owner_key, status = ?status, "Final roster was not saved");
    }

    Ok(Json(result.response))
}

/// Handler for GET `/roster` endpoint.
async fn handle_get_roster(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<RosterView>, HttpError> {
    read(&app_state, &owner_key, |session| Ok(get_roster(session))).await
}

/// Handler for GET `/checkin` endpoint.
async fn handle_get_checkin(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<CheckinView>, HttpError> {
    read(&app_state, &owner_key, |session| Ok(get_checkin(session))).await
}

/// Handler for GET `/assignments` endpoint.
async fn handle_get_assignments(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<AssignmentBoard>, HttpError> {
    read(&app_state, &owner_key, |session| {
        Ok(get_assignment_board(session))
    })
    .await
}

/// Handler for GET `/athletes/{id}/past_volunteers` endpoint.
async fn handle_get_past_volunteers(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path(athlete_id): Path<String>,
) -> Result<Json<PastVolunteersView>, HttpError> {
    read(&app_state, &owner_key, |session| {
        get_past_volunteers(session, &athlete_id)
    })
    .await
}

/// Handler for GET `/audit` endpoint.
///
/// Waits for queued flushes so the timeline includes every accepted edit.
/// Does not need a live session.
async fn handle_get_audit(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    app_state.writer.settle().await;

    let response: AuditTimelineResponse = with_store(&app_state.persistence, move |store| {
        get_audit_timeline(store, &owner_key)
    })
    .await?;

    Ok(Json(response))
}

/// Handler for POST `/athletes` endpoint.
async fn handle_add_athlete(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Json(request): Json<AddAthleteRequest>,
) -> Result<Json<AthleteResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        add_athlete(session, request, request_cause("Add athlete"))
    })
    .await
}

/// Handler for PUT `/athletes/{id}` endpoint.
async fn handle_update_athlete(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path(athlete_id): Path<String>,
    Json(request): Json<UpdateAthleteRequest>,
) -> Result<Json<AthleteResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        update_athlete(session, &athlete_id, request, request_cause("Edit athlete"))
    })
    .await
}

/// Handler for POST `/volunteers` endpoint.
async fn handle_add_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Json(request): Json<AddVolunteerRequest>,
) -> Result<Json<VolunteerResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        add_volunteer(session, request, request_cause("Add volunteer"))
    })
    .await
}

/// Handler for PUT `/volunteers/{id}` endpoint.
async fn handle_update_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path(volunteer_id): Path<String>,
    Json(request): Json<UpdateVolunteerRequest>,
) -> Result<Json<VolunteerResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        update_volunteer(
            session,
            &volunteer_id,
            request,
            request_cause("Edit volunteer"),
        )
    })
    .await
}

/// Handler for POST `/roles/{namespace}` endpoint.
async fn handle_add_role(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path(namespace): Path<String>,
    Json(request): Json<AddRoleRequest>,
) -> Result<Json<AddRoleResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        add_role(session, &namespace, request, request_cause("Add role"))
    })
    .await
}

/// Handler for GET `/roles/{namespace}/{role_id}/usage` endpoint.
async fn handle_get_role_usage(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path((namespace, role_id)): Path<(String, String)>,
) -> Result<Json<RoleUsageResponse>, HttpError> {
    read(&app_state, &owner_key, |session| {
        get_role_usage(session, &namespace, &role_id)
    })
    .await
}

/// Handler for DELETE `/roles/{namespace}/{role_id}` endpoint.
async fn handle_delete_role(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path((namespace, role_id)): Path<(String, String)>,
) -> Result<Json<DeleteRoleResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        delete_role(session, &namespace, &role_id, request_cause("Delete role"))
    })
    .await
}

/// Handler for POST `/checkin/{kind}/{id}/toggle` endpoint.
async fn handle_toggle_checkin(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<CheckinToggleResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        toggle_checkin(session, &kind, &id, request_cause("Toggle check-in"))
    })
    .await
}

/// Handler for POST `/checkin/finalize` endpoint.
async fn handle_finalize_checkin(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
) -> Result<Json<FinalizeCheckinResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        finalize_checkin(session, request_cause("Finalize check-in"))
    })
    .await
}

/// Handler for POST `/assignments` endpoint.
async fn handle_assign_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Json(request): Json<AssignVolunteerRequest>,
) -> Result<Json<AssignmentResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        assign_volunteer(session, request, request_cause("Assign volunteer"))
    })
    .await
}

/// Handler for DELETE `/assignments/{athlete_id}/{volunteer_id}` endpoint.
async fn handle_unassign_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Path((athlete_id, volunteer_id)): Path<(String, String)>,
) -> Result<Json<AssignmentResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        unassign_volunteer(
            session,
            &athlete_id,
            &volunteer_id,
            request_cause("Unassign volunteer"),
        )
    })
    .await
}

/// Handler for POST `/assignments/reassign` endpoint.
async fn handle_reassign_volunteer(
    AxumState(app_state): AxumState<AppState>,
    Owner(owner_key): Owner,
    Json(request): Json<ReassignVolunteerRequest>,
) -> Result<Json<ReassignVolunteerResponse>, HttpError> {
    mutate(&app_state, &owner_key, |session| {
        reassign_volunteer(session, request, request_cause("Move volunteer"))
    })
    .await
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/session",
            post(handle_begin_session).delete(handle_end_session),
        )
        .route("/roster", get(handle_get_roster))
        .route("/checkin", get(handle_get_checkin))
        .route(
            "/assignments",
            get(handle_get_assignments).post(handle_assign_volunteer),
        )
        .route(
            "/athletes/{id}/past_volunteers",
            get(handle_get_past_volunteers),
        )
        .route("/audit", get(handle_get_audit))
        .route("/athletes", post(handle_add_athlete))
        .route("/athletes/{id}", put(handle_update_athlete))
        .route("/volunteers", post(handle_add_volunteer))
        .route("/volunteers/{id}", put(handle_update_volunteer))
        .route("/roles/{namespace}", post(handle_add_role))
        .route(
            "/roles/{namespace}/{role_id}/usage",
            get(handle_get_role_usage),
        )
        .route("/roles/{namespace}/{role_id}", delete(handle_delete_role))
        .route("/checkin/{kind}/{id}/toggle", post(handle_toggle_checkin))
        .route("/checkin/finalize", post(handle_finalize_checkin))
        .route("/assignments/reassign", post(handle_reassign_volunteer))
        .route(
            "/assignments/{athlete_id}/{volunteer_id}",
            delete(handle_unassign_volunteer),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing practice roster server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState::new(persistence);

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
