use std::rc::Rc;

use leptos::*;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, ChangePasswordRequest, MessageResponse, UpdateProfileRequest, UserMessageResponse,
    UserResponse,
};
use crate::config;
use crate::state::auth::{apply_user_update, use_auth};

use super::repository::ProfileRepository;

/// Avatar paths come back as `/uploads/...` relative to the server root,
/// while the configured base URL points at `/api`. Strip the suffix so the
/// image resolves against the right origin.
pub(super) fn avatar_url(api_base: &str, avatar_path: &str) -> String {
    let root = api_base.trim_end_matches('/').trim_end_matches("/api");
    format!("{root}{avatar_path}")
}

pub(super) fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), String> {
    if current.is_empty() || new.is_empty() {
        return Err("Please fill in all password fields.".to_string());
    }
    if new != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[derive(Clone)]
pub struct ProfileViewModel {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub profile_error: RwSignal<Option<String>>,
    pub profile_success: RwSignal<Option<String>>,
    pub profile_submitting: Signal<bool>,

    pub current_password: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm_new_password: RwSignal<String>,
    pub password_error: RwSignal<Option<String>>,
    pub password_success: RwSignal<Option<String>>,
    pub password_submitting: Signal<bool>,

    pub avatar_src: RwSignal<Option<String>>,
    pub avatar_error: RwSignal<Option<String>>,
    pub avatar_uploading: Signal<bool>,

    update_action: Action<UpdateProfileRequest, Result<UserMessageResponse, ApiError>>,
    password_action: Action<ChangePasswordRequest, Result<MessageResponse, ApiError>>,
    upload_action: Action<(String, String, Vec<u8>), Result<UserMessageResponse, ApiError>>,
}

impl ProfileViewModel {
    pub fn submit_profile(&self) {
        let first_name = self.first_name.get().trim().to_string();
        let last_name = self.last_name.get().trim().to_string();
        let username = self.username.get().trim().to_string();
        let email = self.email.get().trim().to_string();
        if first_name.is_empty() || last_name.is_empty() || username.is_empty() || email.is_empty()
        {
            self.profile_error
                .set(Some("Please fill in all fields.".to_string()));
            return;
        }
        self.profile_error.set(None);
        self.profile_success.set(None);
        self.update_action.dispatch(UpdateProfileRequest {
            first_name,
            last_name,
            username,
            email,
        });
    }

    pub fn submit_password_change(&self) {
        let current = self.current_password.get();
        let new = self.new_password.get();
        let confirm = self.confirm_new_password.get();
        if let Err(message) = validate_password_change(&current, &new, &confirm) {
            self.password_error.set(Some(message));
            return;
        }
        self.password_error.set(None);
        self.password_success.set(None);
        self.password_action.dispatch(ChangePasswordRequest {
            current_password: current,
            new_password: new,
        });
    }

    pub fn upload_avatar(&self, file_name: String, mime_type: String, bytes: Vec<u8>) {
        self.avatar_error.set(None);
        self.upload_action.dispatch((file_name, mime_type, bytes));
    }
}

fn prefill_from(user: &UserResponse, vm: &ProfileViewModel) {
    vm.first_name.set(user.first_name.clone());
    vm.last_name.set(user.last_name.clone());
    vm.username.set(user.username.clone());
    vm.email.set(user.email.clone());
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = ProfileRepository::new_with_client(Rc::new(client));
    let (auth, set_auth) = use_auth();

    let load_action = {
        let repository = repository.clone();
        create_action(move |_: &()| {
            let repository = repository.clone();
            async move { repository.load().await }
        })
    };
    let update_action = {
        let repository = repository.clone();
        create_action(move |request: &UpdateProfileRequest| {
            let repository = repository.clone();
            let request = request.clone();
            async move { repository.update(&request).await }
        })
    };
    let password_action = {
        let repository = repository.clone();
        create_action(move |request: &ChangePasswordRequest| {
            let repository = repository.clone();
            let request = request.clone();
            async move { repository.change_password(&request).await }
        })
    };
    let upload_action = create_action(move |input: &(String, String, Vec<u8>)| {
        let repository = repository.clone();
        let (file_name, mime_type, bytes) = input.clone();
        async move { repository.upload_avatar(file_name, mime_type, bytes).await }
    });

    let vm = ProfileViewModel {
        first_name: create_rw_signal(String::new()),
        last_name: create_rw_signal(String::new()),
        username: create_rw_signal(String::new()),
        email: create_rw_signal(String::new()),
        profile_error: create_rw_signal(None),
        profile_success: create_rw_signal(None),
        profile_submitting: update_action.pending().into(),

        current_password: create_rw_signal(String::new()),
        new_password: create_rw_signal(String::new()),
        confirm_new_password: create_rw_signal(String::new()),
        password_error: create_rw_signal(None),
        password_success: create_rw_signal(None),
        password_submitting: password_action.pending().into(),

        avatar_src: create_rw_signal(None),
        avatar_error: create_rw_signal(None),
        avatar_uploading: upload_action.pending().into(),

        update_action,
        password_action,
        upload_action,
    };

    // Prefill from the session straight away, then refresh from the server.
    if let Some(user) = auth.get_untracked().user {
        prefill_from(&user, &vm);
    }
    create_effect(move |already_ran: Option<()>| {
        if already_ran.is_none() {
            load_action.dispatch(());
        }
    });

    {
        let vm = vm.clone();
        create_effect(move |_| {
            if let Some(result) = load_action.value().get() {
                match result {
                    Ok(user) => {
                        prefill_from(&user, &vm);
                        apply_user_update(set_auth, &user);
                    }
                    Err(api_error) => vm.profile_error.set(Some(api_error.message)),
                }
            }
        });
    }

    {
        let vm = vm.clone();
        create_effect(move |_| {
            if let Some(result) = vm.update_action.value().get() {
                match result {
                    Ok(updated) => {
                        prefill_from(&updated.user, &vm);
                        apply_user_update(set_auth, &updated.user);
                        vm.profile_success.set(Some(updated.message));
                    }
                    Err(api_error) => vm.profile_error.set(Some(api_error.message)),
                }
            }
        });
    }

    {
        let vm = vm.clone();
        create_effect(move |_| {
            if let Some(result) = vm.password_action.value().get() {
                match result {
                    Ok(response) => {
                        vm.current_password.set(String::new());
                        vm.new_password.set(String::new());
                        vm.confirm_new_password.set(String::new());
                        vm.password_success.set(Some(response.message));
                    }
                    Err(api_error) => vm.password_error.set(Some(api_error.message)),
                }
            }
        });
    }

    {
        let vm = vm.clone();
        create_effect(move |_| {
            if let Some(result) = vm.upload_action.value().get() {
                match result {
                    Ok(updated) => apply_user_update(set_auth, &updated.user),
                    Err(api_error) => vm.avatar_error.set(Some(api_error.message)),
                }
            }
        });
    }

    // The avatar path is origin-relative; resolve it against the configured
    // server once the session user carries one.
    {
        let avatar_src = vm.avatar_src;
        create_effect(move |_| {
            let avatar = auth.get().user.and_then(|user| user.avatar);
            match avatar {
                Some(path) => spawn_local(async move {
                    let base = config::await_api_base_url().await;
                    avatar_src.set(Some(avatar_url(&base, &path)));
                }),
                None => avatar_src.set(None),
            }
        });
    }

    vm
}
