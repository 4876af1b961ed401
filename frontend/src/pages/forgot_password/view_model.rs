use std::rc::Rc;

use leptos::*;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, MessageResponse};

use super::repository::ForgotPasswordRepository;

#[derive(Clone)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submitting: Signal<bool>,
    submit_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn submit(&self) {
        let email = self.email.get().trim().to_string();
        if email.is_empty() {
            self.error
                .set(Some("Please enter your email address.".to_string()));
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(email);
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(client));

    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |email: &String| {
        let repository = repository.clone();
        let email = email.clone();
        async move { repository.request_reset(email).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => success.set(Some(response.message)),
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    ForgotPasswordViewModel {
        email,
        error,
        success,
        submitting: submit_action.pending().into(),
        submit_action,
    }
}
