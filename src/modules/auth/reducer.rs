//! Reducer for the auth container.

use crate::store::Reducer;

use super::intent::AuthIntent;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::LoginStart => AuthState {
                is_loading: true,
                error: None,
                ..state
            },
            AuthIntent::LoginSuccess(user) => AuthState {
                user: Some(user),
                is_authenticated: true,
                is_loading: false,
                error: None,
            },
            AuthIntent::LoginFailure(message) => AuthState {
                user: None,
                is_authenticated: false,
                is_loading: false,
                error: Some(message),
            },
            AuthIntent::Logout => AuthState::default(),
        }
    }
}
