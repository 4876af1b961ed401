use leptos::*;

use crate::api::client::{self, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::api::types::{AuthResponse, UserResponse};
use crate::utils::storage as storage_utils;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Rebuilds the session from localStorage. A token whose `exp` claim has
/// passed is treated as absent and the stale entries are removed.
fn restore_session() -> AuthState {
    let Ok(storage) = storage_utils::local_storage() else {
        return AuthState::default();
    };
    let token = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten();
    let user_json = storage.get_item(USER_STORAGE_KEY).ok().flatten();
    let (Some(token), Some(user_json)) = (token, user_json) else {
        return AuthState::default();
    };
    let now_secs = js_sys::Date::now() / 1000.0;
    if !client::token_is_active(&token, now_secs) {
        client::clear_session();
        return AuthState::default();
    }
    match serde_json::from_str::<UserResponse>(&user_json) {
        Ok(user) => AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        },
        Err(_) => {
            client::clear_session();
            AuthState::default()
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth, set_auth) = create_signal(restore_session());
    provide_context::<AuthContext>((auth, set_auth));
    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Installs a fresh session after a successful login or registration. The
/// token itself is already in localStorage at this point.
pub fn apply_session(set_auth: WriteSignal<AuthState>, auth: &AuthResponse) {
    set_auth.set(AuthState {
        user: Some(auth.user.clone()),
        is_authenticated: true,
        loading: false,
    });
}

/// Replaces the in-memory user after a profile or avatar update so the
/// header greeting stays current.
pub fn apply_user_update(set_auth: WriteSignal<AuthState>, user: &UserResponse) {
    let user = user.clone();
    set_auth.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
    });
}

pub fn logout(set_auth: WriteSignal<AuthState>) {
    client::clear_session();
    set_auth.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn use_auth_outside_a_provider_defaults_to_signed_out() {
        crate::test_support::ssr::with_runtime(|| {
            let (auth, _) = use_auth();
            let state = auth.get_untracked();
            assert!(!state.is_authenticated);
            assert!(state.user.is_none());
            assert!(!state.loading);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn restore_session_on_the_host_is_signed_out() {
        let state = restore_session();
        assert!(!state.is_authenticated);
    }
}
