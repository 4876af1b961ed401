use std::rc::Rc;

use leptos::*;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AuthResponse, LoginRequest};
use crate::state::auth::{apply_session, use_auth};

use super::repository::LoginRepository;

#[derive(Clone)]
pub struct LoginViewModel {
    pub email_or_username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submitting: Signal<bool>,
    submit_action: Action<LoginRequest, Result<AuthResponse, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        let email_or_username = self.email_or_username.get().trim().to_string();
        let password = self.password.get();
        if email_or_username.is_empty() || password.is_empty() {
            self.error
                .set(Some("Please enter your credentials.".to_string()));
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(LoginRequest {
            email_or_username,
            password,
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = LoginRepository::new_with_client(Rc::new(client));
    let (_, set_auth) = use_auth();

    let email_or_username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &LoginRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move { repository.login(&request).await }
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

    LoginViewModel {
        email_or_username,
        password,
        error,
        submitting: submit_action.pending().into(),
        submit_action,
    }
}
