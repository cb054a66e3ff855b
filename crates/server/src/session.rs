// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Owner identification for the server.
//!
//! The identity provider sits in front of this server and tells it which
//! owner a request belongs to through the `X-Owner-Key` header.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use practice_roster_domain::OwnerKey;
use tracing::{debug, warn};

/// The header carrying the owner key.
pub const OWNER_KEY_HEADER: &str = "X-Owner-Key";

/// Extractor for the requesting owner.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     Owner(owner_key): Owner,
/// ) -> Result<Json<Response>, HttpError> {
///     // owner_key: OwnerKey
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if the header is missing, is not valid
/// text, or is blank.
pub struct Owner(pub OwnerKey);

impl<S: Send + Sync> FromRequestParts<S> for Owner {
    type Rejection = OwnerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw: &str = parts
            .headers
            .get(OWNER_KEY_HEADER)
            .ok_or_else(|| {
                debug!("Missing owner key header");
                OwnerError::MissingHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid owner key header encoding");
                OwnerError::InvalidHeader
            })?;

        let owner_key: OwnerKey = OwnerKey::new(raw).map_err(|e| {
            warn!(error = %e, "Rejected owner key");
            OwnerError::InvalidHeader
        })?;

        Ok(Self(owner_key))
    }
}

/// Owner extraction errors.
#[derive(Debug)]
pub enum OwnerError {
    /// The owner key header is missing.
    MissingHeader,
    /// The owner key header is not usable.
    InvalidHeader,
}

impl IntoResponse for OwnerError {
    fn into_response(self) -> Response {
        let message: &str = match self {
            Self::MissingHeader => "Missing X-Owner-Key header",
            Self::InvalidHeader => "Invalid X-Owner-Key header",
        };

        (StatusCode::UNAUTHORIZED, message).into_response()
    }
}
