use leptos::*;
use leptos_router::A;

use crate::components::layout::{ErrorMessage, SuccessMessage};

use super::view_model::use_forgot_password_view_model;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
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
            <h1 class="mb-2 text-2xl font-bold text-fg">"Forgot your password?"</h1>
            <Show
                when=move || success.get().is_some()
                fallback=move || {
                    let on_submit = on_submit.clone();
                    view! {
                        <p class="mb-6 text-sm text-fg-muted">
                            "Enter the email tied to your account and we will send you a reset link."
                        </p>
                        {move || error.get().map(|message| view! { <ErrorMessage message/> })}
                        <form on:submit=on_submit.clone()>
                            <label class="mb-1 block text-sm font-medium text-fg" for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                class="mb-6 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                                type="email"
                                prop:value=move || vm.email.get()
                                on:input={
                                    let field = vm.email;
                                    move |ev| field.set(event_target_value(&ev))
                                }
                            />
                            <button
                                class="w-full rounded-md bg-action-primary-bg px-4 py-2 font-medium text-action-primary-fg disabled:opacity-50"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send reset link" }}
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
