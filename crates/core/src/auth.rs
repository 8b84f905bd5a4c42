// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Roles and the authorization collaborator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::component::{ComponentId, ComponentTree};
use crate::error::{Error, Result};
use crate::issue::UserId;

/// A permission a user can hold on a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browse the component and change its issues.
    #[default]
    User,
    /// Administer the component.
    Admin,
    /// See the component's source code.
    CodeViewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::CodeViewer => "codeviewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "codeviewer" => Ok(Role::CodeViewer),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// Decides whether a user holds a role on a component.
///
/// Implementations must fail closed: anything they cannot confirm is a
/// refusal.
pub trait AuthorizationProvider: Send + Sync {
    fn is_authorized(&self, component_id: ComponentId, user_id: UserId, role: Role) -> bool;
}

impl<A: AuthorizationProvider + ?Sized> AuthorizationProvider for &A {
    fn is_authorized(&self, component_id: ComponentId, user_id: UserId, role: Role) -> bool {
        (**self).is_authorized(component_id, user_id, role)
    }
}

impl<A: AuthorizationProvider + ?Sized> AuthorizationProvider for std::sync::Arc<A> {
    fn is_authorized(&self, component_id: ComponentId, user_id: UserId, role: Role) -> bool {
        (**self).is_authorized(component_id, user_id, role)
    }
}

/// Explicit (component, user, role) grants.
///
/// A grant on a component also covers every component beneath it, so
/// granting `user` on a project authorizes its files.
#[derive(Debug, Clone, Default)]
pub struct RoleGrants {
    components: ComponentTree,
    grants: HashSet<(ComponentId, UserId, Role)>,
}

impl RoleGrants {
    pub fn new(components: ComponentTree) -> Self {
        RoleGrants {
            components,
            grants: HashSet::new(),
        }
    }

    /// Grants `role` on `component_id` and its descendants (builder pattern).
    pub fn grant(mut self, component_id: ComponentId, user_id: UserId, role: Role) -> Self {
        self.grants.insert((component_id, user_id, role));
        self
    }

    /// Returns true if the grant was present.
    pub fn revoke(&mut self, component_id: ComponentId, user_id: UserId, role: Role) -> bool {
        self.grants.remove(&(component_id, user_id, role))
    }
}

impl AuthorizationProvider for RoleGrants {
    fn is_authorized(&self, component_id: ComponentId, user_id: UserId, role: Role) -> bool {
        self.components
            .ancestors_and_self(component_id)
            .any(|component| self.grants.contains(&(component.id, user_id, role)))
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
