use std::rc::Rc;

use leptos::*;
use leptos_router::use_query_map;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, MessageResponse, ResetPasswordRequest};

use super::repository::ResetPasswordRepository;

pub(super) fn validate(token: &str, password: &str, confirm_password: &str) -> Result<(), String> {
    if token.is_empty() {
        return Err("This reset link is invalid or incomplete.".to_string());
    }
    if password.is_empty() {
        return Err("Please enter a new password.".to_string());
    }
    if password != confirm_password {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub token: Signal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submitting: Signal<bool>,
    submit_action: Action<ResetPasswordRequest, Result<MessageResponse, ApiError>>,
}

impl ResetPasswordViewModel {
    pub fn submit(&self) {
        let token = self.token.get();
        let password = self.password.get();
        let confirm_password = self.confirm_password.get();
        if let Err(message) = validate(&token, &password, &confirm_password) {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(ResetPasswordRequest {
            token,
            new_password: password,
        });
    }
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = ResetPasswordRepository::new_with_client(Rc::new(client));
    let query = use_query_map();
    let token = Signal::derive(move || query.with(|q| q.get("token").cloned().unwrap_or_default()));

    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &ResetPasswordRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move { repository.reset(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => success.set(Some(response.message)),
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    ResetPasswordViewModel {
        token,
        password,
        confirm_password,
        error,
        success,
        submitting: submit_action.pending().into(),
        submit_action,
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn rejects_a_missing_token() {
        let error = validate("", "pw", "pw").expect_err("missing token");
        assert_eq!(error, "This reset link is invalid or incomplete.");
    }

    #[test]
    fn rejects_mismatched_passwords() {
        let error = validate("tok", "pw1", "pw2").expect_err("mismatch");
        assert_eq!(error, "Passwords do not match.");
    }

    #[test]
    fn accepts_a_valid_submission() {
        assert!(validate("tok", "pw", "pw").is_ok());
    }
}
