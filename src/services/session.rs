use actix_web::http::StatusCode;
use actix_web::{dev::Payload, error::ResponseError, FromRequest, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Caller roles, as assigned by the upstream authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Agent,
    Volunteer,
    ExternalVet,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "agent" => Some(Role::Agent),
            "volunteer" => Some(Role::Volunteer),
            "external_vet" => Some(Role::ExternalVet),
            _ => None,
        }
    }
}

/// Explicit session context passed into each operation.
///
/// The upstream gate authenticates the caller and forwards the identity in
/// the `x-session-user` / `x-session-role` headers; this service only checks
/// that an identity was supplied. Read endpoints require authentication, not
/// an elevated role.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub caller: String,
    pub role: Role,
}

impl SessionContext {
    /// Require one of the given roles; read-only handlers don't use this, it
    /// exists for any mutating surface the surrounding system mounts.
    pub fn require_role(&self, roles: &[Role]) -> Result<(), SessionError> {
        if roles.contains(&self.role) {
            Ok(())
        } else {
            Err(SessionError::Forbidden)
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Caller identity missing")]
    Unauthenticated,

    #[error("Unknown caller role: {0}")]
    UnknownRole(String),

    #[error("Caller role not allowed for this operation")]
    Forbidden,
}

impl ResponseError for SessionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SessionError::Unauthenticated | SessionError::UnknownRole(_) => {
                StatusCode::UNAUTHORIZED
            }
            SessionError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: "unauthenticated".to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

impl FromRequest for SessionContext {
    type Error = SessionError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_session(req))
    }
}

fn extract_session(req: &HttpRequest) -> Result<SessionContext, SessionError> {
    let caller = match header_value(req, "x-session-user") {
        Some(value) if !value.is_empty() => value,
        _ => return Err(SessionError::Unauthenticated),
    };

    let role_raw = header_value(req, "x-session-role").unwrap_or_default();
    let role = Role::parse(&role_raw).ok_or(SessionError::UnknownRole(role_raw))?;

    Ok(SessionContext { caller, role })
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
