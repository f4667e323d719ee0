//! Caller identity and role guards.
//!
//! Authentication decisions are made by the host; this module only
//! models the authenticated caller handed to the core and the explicit
//! guard composed in front of role-restricted operations.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Roles recognized by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
        }
    }
}

/// Opaque identity of an already-authenticated caller.
///
/// `subject` is forwarded to model calls for attribution; the core never
/// re-derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    pub subject: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl AuthenticatedIdentity {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Gate an operation on a caller role.
///
/// Returns `AccessDenied` (403) when the caller does not hold `role`.
pub fn require_role(caller: &AuthenticatedIdentity, role: Role) -> Result<(), ServiceError> {
    if caller.has_role(role) {
        Ok(())
    } else {
        tracing::warn!(
            target: "caseforge::auth",
            subject = %caller.subject,
            role = role.as_str(),
            "caller lacks required role"
        );
        Err(ServiceError::AccessDenied {
            role: role.as_str().to_string(),
        })
    }
}
