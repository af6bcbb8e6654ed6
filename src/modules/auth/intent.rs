//! Intents for the auth container.

use serde_json::Value;

use crate::store::{Action, Intent};

use super::state::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthIntent {
    LoginStart,
    LoginSuccess(User),
    LoginFailure(String),
    Logout,
}

impl Intent for AuthIntent {}

impl AuthIntent {
    /// Parse a namespaced action into a typed intent.
    pub fn from_action(action: &Action) -> Option<Self> {
        if action.namespace() != super::NAMESPACE {
            return None;
        }
        match action.name() {
            "loginStart" => Some(AuthIntent::LoginStart),
            "loginSuccess" => {
                let user = action
                    .payload
                    .clone()
                    .and_then(|p| serde_json::from_value::<User>(p).ok());
                if user.is_none() {
                    tracing::warn!(kind = %action.kind, "expected user payload, dispatch is a no-op");
                }
                user.map(AuthIntent::LoginSuccess)
            }
            "loginFailure" => {
                let message = action
                    .payload
                    .as_ref()
                    .and_then(Value::as_str)
                    .map(str::to_string);
                if message.is_none() {
                    tracing::warn!(kind = %action.kind, "expected error message payload, dispatch is a no-op");
                }
                message.map(AuthIntent::LoginFailure)
            }
            "logout" => Some(AuthIntent::Logout),
            other => {
                tracing::debug!(operation = %other, "unknown auth operation");
                None
            }
        }
    }
}
