use std::rc::Rc;

use leptos::*;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AuthResponse, RegisterRequest};
use crate::state::auth::{apply_session, use_auth};

use super::repository::RegisterRepository;

/// Client-side check before the request goes out. The backend repeats the
/// same rules authoritatively.
pub(super) fn validate(
    first_name: &str,
    last_name: &str,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if first_name.is_empty()
        || last_name.is_empty()
        || username.is_empty()
        || email.is_empty()
        || password.is_empty()
    {
        return Err("Please fill in all fields.".to_string());
    }
    if password != confirm_password {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[derive(Clone)]
pub struct RegisterViewModel {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submitting: Signal<bool>,
    submit_action: Action<RegisterRequest, Result<AuthResponse, ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        let first_name = self.first_name.get().trim().to_string();
        let last_name = self.last_name.get().trim().to_string();
        let username = self.username.get().trim().to_string();
        let email = self.email.get().trim().to_string();
        let password = self.password.get();
        let confirm_password = self.confirm_password.get();

        if let Err(message) = validate(
            &first_name,
            &last_name,
            &username,
            &email,
            &password,
            &confirm_password,
        ) {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(RegisterRequest {
            first_name,
            last_name,
            username,
            email,
            password,
        });
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = RegisterRepository::new_with_client(Rc::new(client));
    let (_, set_auth) = use_auth();

    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &RegisterRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move { repository.register(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(auth) => {
                    apply_session(set_auth, &auth);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/tasks");
                    }
                }
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    RegisterViewModel {
        first_name,
        last_name,
        username,
        email,
        password,
        confirm_password,
        error,
        submitting: submit_action.pending().into(),
        submit_action,
    }
}
