//! Error types

use crate::access::{Resource, Role};

/// Errors raised by the authorization context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// A role name that is not one of the known roles.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    /// No role has been chosen yet.
    #[error("Sign in required to open {resource}")]
    NotSignedIn {
        /// The resource that was requested.
        resource: Resource,
    },

    /// The role may not open the resource.
    #[error("Role '{role}' may not open {resource}")]
    Forbidden {
        /// The current role.
        role: Role,
        /// The resource that was requested.
        resource: Resource,
    },
}

impl AccessError {
    /// Where the client should navigate instead.
    ///
    /// Unauthenticated users go to the role selector, forbidden requests
    /// fall back to the dashboard.
    pub fn redirect_path(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) | Self::NotSignedIn { .. } => "/",
            Self::Forbidden { .. } => Resource::Dashboard.path(),
        }
    }
}
