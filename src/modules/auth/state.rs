//! State for the auth container.

use serde::{Deserialize, Serialize};

use crate::store::State;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl User {
    /// Demo role rule: addresses containing "admin" get the admin role.
    pub fn from_email(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        let email = email.into();
        let role = if email.contains("admin") {
            UserRole::Admin
        } else {
            UserRole::User
        };
        Self {
            id: id.into(),
            email,
            name: name.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl State for AuthState {}
