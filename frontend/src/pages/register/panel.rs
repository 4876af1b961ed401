use leptos::*;
use leptos_router::A;

use crate::components::layout::ErrorMessage;

use super::view_model::use_register_view_model;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let error = vm.error;
    let submitting = vm.submitting;

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };

    let text_input = |id: &'static str, label: &'static str, field: RwSignal<String>| {
        view! {
            <label class="mb-1 block text-sm font-medium text-fg" for=id>
                {label}
            </label>
            <input
                id=id
                class="mb-4 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                type="text"
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            />
        }
    };

    let password_input = |id: &'static str, label: &'static str, field: RwSignal<String>| {
        view! {
            <label class="mb-1 block text-sm font-medium text-fg" for=id>
                {label}
            </label>
            <input
                id=id
                class="mb-4 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                type="password"
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="mx-auto max-w-md rounded-lg bg-surface p-8 shadow">
            <h1 class="mb-6 text-2xl font-bold text-fg">"Create your TaskY account"</h1>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            <form on:submit=on_submit>
                {text_input("first-name", "First name", vm.first_name)}
                {text_input("last-name", "Last name", vm.last_name)}
                {text_input("username", "Username", vm.username)}
                {text_input("email", "Email", vm.email)}
                {password_input("password", "Password", vm.password)}
                {password_input("confirm-password", "Confirm password", vm.confirm_password)}
                <button
                    class="w-full rounded-md bg-action-primary-bg px-4 py-2 font-medium text-action-primary-fg disabled:opacity-50"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="mt-4 text-center text-sm text-fg-muted">
                "Already have an account? "
                <A href="/login" class="text-action-primary-bg hover:underline">
                    "Sign in"
                </A>
            </p>
        </div>
    }
}
