// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `owners`: Owner rows keyed by the opaque owner key
//! - `snapshots`: Whole-roster snapshot upserts
//! - `audit`: Audit event inserts
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported from
//! the `backend` module. All other code uses Diesel DSL exclusively.

pub mod audit;
pub mod owners;
pub mod snapshots;

pub use audit::persist_audit_event;
pub use owners::ensure_owner;
pub use snapshots::save_snapshot;
