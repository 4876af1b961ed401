use leptos::*;
use leptos_router::A;

use crate::components::layout::ErrorMessage;

use super::view_model::use_login_view_model;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let error = vm.error;
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
            <h1 class="mb-6 text-2xl font-bold text-fg">"Sign in to TaskY"</h1>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            <form on:submit=on_submit>
                <label class="mb-1 block text-sm font-medium text-fg" for="email-or-username">
                    "Email or username"
                </label>
                <input
                    id="email-or-username"
                    class="mb-4 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                    type="text"
                    prop:value=move || vm.email_or_username.get()
                    on:input={
                        let field = vm.email_or_username;
                        move |ev| field.set(event_target_value(&ev))
                    }
                />
                <label class="mb-1 block text-sm font-medium text-fg" for="password">
                    "Password"
                </label>
                <input
                    id="password"
                    class="mb-6 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                    type="password"
                    prop:value=move || vm.password.get()
                    on:input={
                        let field = vm.password;
                        move |ev| field.set(event_target_value(&ev))
                    }
                />
                <button
                    class="w-full rounded-md bg-action-primary-bg px-4 py-2 font-medium text-action-primary-fg disabled:opacity-50"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <div class="mt-4 flex justify-between text-sm">
                <A href="/forgot-password" class="text-action-primary-bg hover:underline">
                    "Forgot password?"
                </A>
                <A href="/register" class="text-action-primary-bg hover:underline">
                    "Create an account"
                </A>
            </div>
        </div>
    }
}
