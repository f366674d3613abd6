//! Hospital administration client layer.
//!
//! Wires the generic [`hms_grid`] engine to the hospital's entities:
//! - [`access`]: roles, resources and the authorization context
//! - [`entities`]: per-entity column presets and record normalization
//! - [`page`]: role-gated entity pages hosting a data grid

pub mod access;
pub mod entities;
pub mod error;
pub mod page;

pub use access::{AuthContext, Resource, Role, is_allowed};
pub use entities::Entity;
pub use error::AccessError;
pub use page::EntityPage;
