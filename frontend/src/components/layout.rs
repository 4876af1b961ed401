use leptos::*;
use leptos_router::A;

use crate::state::auth::{logout, use_auth};

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="h-8 w-8 animate-spin rounded-full border-4 border-action-primary-bg border-t-transparent"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="mb-4 rounded-md bg-status-error-bg px-4 py-3 text-sm text-status-error-fg" role="alert">
            {message}
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="mb-4 rounded-md bg-status-success-bg px-4 py-3 text-sm text-status-success-fg" role="status">
            {message}
        </div>
    }
}

/// Top navigation. Shows the task links and greeting for signed-in users,
/// login and register links otherwise.
#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome, {}!", user.first_name))
    };

    let on_logout = move |_| {
        logout(set_auth);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <header class="border-b border-edge bg-surface">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                <A href="/" class="text-xl font-bold text-action-primary-bg">
                    "TaskY"
                </A>
                <button
                    class="rounded-md p-2 sm:hidden"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="block h-0.5 w-5 bg-fg"></span>
                    <span class="mt-1 block h-0.5 w-5 bg-fg"></span>
                    <span class="mt-1 block h-0.5 w-5 bg-fg"></span>
                </button>
                <nav class=move || {
                    if menu_open.get() {
                        "absolute left-0 top-14 z-10 flex w-full flex-col gap-2 border-b border-edge bg-surface p-4 sm:static sm:z-auto sm:flex sm:w-auto sm:flex-row sm:items-center sm:gap-4 sm:border-0 sm:p-0"
                    } else {
                        "hidden sm:flex sm:items-center sm:gap-4"
                    }
                }>
                    <Show
                        when=move || auth.get().is_authenticated
                        fallback=|| {
                            view! {
                                <A href="/login" class="text-sm text-fg hover:text-action-primary-bg">
                                    "Login"
                                </A>
                                <A
                                    href="/register"
                                    class="rounded-md bg-action-primary-bg px-3 py-1.5 text-sm text-action-primary-fg"
                                >
                                    "Register"
                                </A>
                            }
                        }
                    >
                        <A href="/tasks" class="text-sm text-fg hover:text-action-primary-bg">
                            "My Active Tasks"
                        </A>
                        <A href="/new-task" class="text-sm text-fg hover:text-action-primary-bg">
                            "New Task"
                        </A>
                        <A href="/completed" class="text-sm text-fg hover:text-action-primary-bg">
                            "Completed Tasks"
                        </A>
                        <A href="/trash" class="text-sm text-fg hover:text-action-primary-bg">
                            "Trash"
                        </A>
                        <A href="/profile" class="text-sm text-fg hover:text-action-primary-bg">
                            "Profile"
                        </A>
                        <span class="text-sm font-medium text-fg-muted">{greeting}</span>
                        <button
                            class="rounded-md bg-action-danger-bg px-3 py-1.5 text-sm text-action-danger-fg"
                            on:click=on_logout
                        >
                            "Logout"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-canvas text-fg">
            <Header/>
            <main class="mx-auto max-w-5xl px-4 py-8">{children()}</main>
        </div>
    }
}
