//! Roles, resources and the authorization context.
//!
//! Access is a pure capability check: [`is_allowed`] answers whether a role
//! may open a resource, and an [`AuthContext`] carrying the signed-in role is
//! passed down to whatever needs to ask.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::AccessError;

/// User roles of the hospital client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Receptionist,
    Patient,
}

impl Role {
    /// All roles, in role-selector order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Receptionist, Role::Patient];

    /// Lowercase role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}

/// Navigable resources (pages) of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Dashboard,
    Patients,
    PatientDetails,
    Doctors,
    DoctorDetails,
    Appointments,
    MedicalRecords,
    Users,
}

impl Resource {
    /// Sidebar entries, in display order.
    pub const MENU: [Resource; 6] = [
        Resource::Dashboard,
        Resource::Patients,
        Resource::Doctors,
        Resource::Appointments,
        Resource::MedicalRecords,
        Resource::Users,
    ];

    /// Route path. Detail pages use an `:id` placeholder.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Dashboard => "/dashboard",
            Resource::Patients => "/patients",
            Resource::PatientDetails => "/patients/:id",
            Resource::Doctors => "/doctors",
            Resource::DoctorDetails => "/doctors/:id",
            Resource::Appointments => "/appointments",
            Resource::MedicalRecords => "/records",
            Resource::Users => "/users",
        }
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Dashboard => "Dashboard",
            Resource::Patients => "Patients",
            Resource::PatientDetails => "Patient Details",
            Resource::Doctors => "Doctors",
            Resource::DoctorDetails => "Doctor Details",
            Resource::Appointments => "Appointments",
            Resource::MedicalRecords => "Medical Records",
            Resource::Users => "User Management",
        }
    }

    /// Resolve a concrete route path such as `/patients/12`.
    pub fn from_path(path: &str) -> Option<Resource> {
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').skip(1).collect();
        match segments.as_slice() {
            ["dashboard"] => Some(Resource::Dashboard),
            ["patients"] => Some(Resource::Patients),
            ["patients", id] if !id.is_empty() => Some(Resource::PatientDetails),
            ["doctors"] => Some(Resource::Doctors),
            ["doctors", id] if !id.is_empty() => Some(Resource::DoctorDetails),
            ["appointments"] => Some(Resource::Appointments),
            ["records"] => Some(Resource::MedicalRecords),
            ["users"] => Some(Resource::Users),
            _ => None,
        }
    }

    /// Roles allowed to open this resource.
    pub fn allowed_roles(&self) -> &'static [Role] {
        use Role::*;
        match self {
            Resource::Dashboard | Resource::Appointments => &[Admin, Doctor, Receptionist, Patient],
            Resource::Patients | Resource::PatientDetails => &[Admin, Doctor, Receptionist],
            Resource::Doctors | Resource::DoctorDetails => &[Admin, Receptionist],
            Resource::MedicalRecords => &[Admin, Doctor],
            Resource::Users => &[Admin],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether `role` may open `resource`.
pub fn is_allowed(role: Role, resource: Resource) -> bool {
    resource.allowed_roles().contains(&role)
}

/// The signed-in role, passed explicitly to pages and navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    role: Option<Role>,
}

impl AuthContext {
    /// Context with no role chosen.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context signed in as `role`.
    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Parse a stored role name into a context.
    pub fn from_role_name(name: &str) -> Result<Self, AccessError> {
        Ok(Self::with_role(name.parse()?))
    }

    /// The current role, if signed in.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns `true` if a role has been chosen.
    pub fn is_signed_in(&self) -> bool {
        self.role.is_some()
    }

    /// Forget the role.
    pub fn sign_out(&mut self) {
        log::debug!("AuthContext: signing out {:?}", self.role);
        self.role = None;
    }

    /// Check access to `resource`.
    pub fn authorize(&self, resource: Resource) -> Result<(), AccessError> {
        let Some(role) = self.role else {
            return Err(AccessError::NotSignedIn { resource });
        };
        if is_allowed(role, resource) {
            Ok(())
        } else {
            log::debug!("AuthContext: {} denied {}", role, resource.path());
            Err(AccessError::Forbidden { role, resource })
        }
    }

    /// Sidebar entries available to the current role.
    pub fn menu(&self) -> Vec<Resource> {
        match self.role {
            Some(role) => Resource::MENU
                .into_iter()
                .filter(|r| is_allowed(role, *r))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Where to go on entering the app: the dashboard when signed in,
    /// the role selector otherwise.
    pub fn landing_path(&self) -> &'static str {
        if self.is_signed_in() {
            Resource::Dashboard.path()
        } else {
            "/"
        }
    }
}
