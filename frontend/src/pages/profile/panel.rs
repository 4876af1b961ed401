use leptos::*;
use wasm_bindgen_futures::JsFuture;

use crate::components::layout::{ErrorMessage, SuccessMessage};

use super::view_model::{use_profile_view_model, ProfileViewModel};

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();

    view! {
        <div class="mx-auto max-w-2xl space-y-8">
            <h1 class="text-2xl font-bold text-fg">"Profile"</h1>
            <AvatarSection vm=vm.clone()/>
            <ProfileForm vm=vm.clone()/>
            <PasswordForm vm=vm/>
        </div>
    }
}

#[component]
fn AvatarSection(vm: ProfileViewModel) -> impl IntoView {
    let avatar_src = vm.avatar_src;
    let avatar_error = vm.avatar_error;
    let uploading = vm.avatar_uploading;

    let on_file_change = {
        let vm = vm.clone();
        move |ev: leptos::ev::Event| {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(files) = input.files() else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            let file_name = file.name();
            let mime_type = file.type_();
            let vm = vm.clone();
            spawn_local(async move {
                match JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        vm.upload_avatar(file_name, mime_type, bytes);
                    }
                    Err(_) => vm
                        .avatar_error
                        .set(Some("Failed to read the selected file.".to_string())),
                }
            });
        }
    };

    view! {
        <section class="rounded-lg bg-surface p-6 shadow">
            <h2 class="mb-4 text-lg font-semibold text-fg">"Avatar"</h2>
            {move || avatar_error.get().map(|message| view! { <ErrorMessage message/> })}
            <div class="flex items-center gap-4">
                {move || match avatar_src.get() {
                    Some(src) => view! {
                        <img class="h-16 w-16 rounded-full object-cover" src=src alt="Avatar"/>
                    }
                    .into_view(),
                    None => view! {
                        <div class="flex h-16 w-16 items-center justify-center rounded-full bg-canvas text-fg-muted">
                            "?"
                        </div>
                    }
                    .into_view(),
                }}
                <label class="cursor-pointer rounded-md border border-edge px-4 py-2 text-sm text-fg">
                    {move || if uploading.get() { "Uploading..." } else { "Upload new avatar" }}
                    <input
                        class="hidden"
                        type="file"
                        accept="image/*"
                        on:change=on_file_change
                    />
                </label>
            </div>
        </section>
    }
}

#[component]
fn ProfileForm(vm: ProfileViewModel) -> impl IntoView {
    let error = vm.profile_error;
    let success = vm.profile_success;
    let submitting = vm.profile_submitting;

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_profile();
        }
    };

    let text_input = |id: &'static str, label: &'static str, field: RwSignal<String>| {
        view! {
            <div>
                <label class="mb-1 block text-sm font-medium text-fg" for=id>
                    {label}
                </label>
                <input
                    id=id
                    class="w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                    type="text"
                    prop:value=move || field.get()
                    on:input=move |ev| field.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <section class="rounded-lg bg-surface p-6 shadow">
            <h2 class="mb-4 text-lg font-semibold text-fg">"Account details"</h2>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            {move || success.get().map(|message| view! { <SuccessMessage message/> })}
            <form on:submit=on_submit>
                <div class="mb-4 grid grid-cols-1 gap-4 sm:grid-cols-2">
                    {text_input("first-name", "First name", vm.first_name)}
                    {text_input("last-name", "Last name", vm.last_name)}
                    {text_input("username", "Username", vm.username)}
                    {text_input("email", "Email", vm.email)}
                </div>
                <button
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-medium text-action-primary-fg disabled:opacity-50"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn PasswordForm(vm: ProfileViewModel) -> impl IntoView {
    let error = vm.password_error;
    let success = vm.password_success;
    let submitting = vm.password_submitting;

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_password_change();
        }
    };

    let password_input = |id: &'static str, label: &'static str, field: RwSignal<String>| {
        view! {
            <div class="mb-4">
                <label class="mb-1 block text-sm font-medium text-fg" for=id>
                    {label}
                </label>
                <input
                    id=id
                    class="w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                    type="password"
                    prop:value=move || field.get()
                    on:input=move |ev| field.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <section class="rounded-lg bg-surface p-6 shadow">
            <h2 class="mb-4 text-lg font-semibold text-fg">"Change password"</h2>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            {move || success.get().map(|message| view! { <SuccessMessage message/> })}
            <form on:submit=on_submit>
                {password_input("current-password", "Current password", vm.current_password)}
                {password_input("new-password", "New password", vm.new_password)}
                {password_input(
                    "confirm-new-password",
                    "Confirm new password",
                    vm.confirm_new_password,
                )}
                <button
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-medium text-action-primary-fg disabled:opacity-50"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Updating..." } else { "Update password" }}
                </button>
            </form>
        </section>
    }
}
