use leptos::*;
use leptos_router::A;

use crate::components::layout::{ErrorMessage, SuccessMessage};

use super::view_model::use_reset_password_view_model;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let error = vm.error;
    let success = vm.success;
    let submitting = vm.submitting;

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };

    view! {
        <div class="mx-auto max-w-md rounded-lg bg-surface p-8 shadow">
            <h1 class="mb-6 text-2xl font-bold text-fg">"Choose a new password"</h1>
            <Show
                when=move || success.get().is_some()
                fallback=move || {
                    let on_submit = on_submit.clone();
                    view! {
                        {move || error.get().map(|message| view! { <ErrorMessage message/> })}
                        <form on:submit=on_submit.clone()>
                            <label class="mb-1 block text-sm font-medium text-fg" for="new-password">
                                "New password"
                            </label>
                            <input
                                id="new-password"
                                class="mb-4 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                                type="password"
                                prop:value=move || vm.password.get()
                                on:input={
                                    let field = vm.password;
                                    move |ev| field.set(event_target_value(&ev))
                                }
                            />
                            <label class="mb-1 block text-sm font-medium text-fg" for="confirm-new-password">
                                "Confirm new password"
                            </label>
                            <input
                                id="confirm-new-password"
                                class="mb-6 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                                type="password"
                                prop:value=move || vm.confirm_password.get()
                                on:input={
                                    let field = vm.confirm_password;
                                    move |ev| field.set(event_target_value(&ev))
                                }
                            />
                            <button
                                class="w-full rounded-md bg-action-primary-bg px-4 py-2 font-medium text-action-primary-fg disabled:opacity-50"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Resetting..." } else { "Reset password" }}
                            </button>
                        </form>
                    }
                        .into_view()
                }
            >
                {move || success.get().map(|message| view! { <SuccessMessage message/> })}
                <A href="/login" class="text-sm text-action-primary-bg hover:underline">
                    "Back to login"
                </A>
            </Show>
        </div>
    }
}
