use leptos::*;
use leptos_router::A;

use crate::components::layout::Layout;
use crate::state::auth::use_auth;

/// Public landing page. Signed-in visitors get a shortcut to their tasks
/// instead of the sign-up call to action.
#[component]
pub fn LandingPage() -> impl IntoView {
    let (auth, _) = use_auth();

    view! {
        <Layout>
            <div class="mx-auto max-w-2xl py-16 text-center">
                <h1 class="text-4xl font-bold text-fg">"Welcome to TaskY"</h1>
                <p class="mt-4 text-lg text-fg-muted">
                    "Capture your tasks, check them off, and keep your day on track."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <Show
                        when=move || auth.get().is_authenticated
                        fallback=|| {
                            view! {
                                <A
                                    href="/register"
                                    class="rounded-md bg-action-primary-bg px-6 py-3 font-medium text-action-primary-fg"
                                >
                                    "Get Started"
                                </A>
                                <A
                                    href="/login"
                                    class="rounded-md border border-edge px-6 py-3 font-medium text-fg"
                                >
                                    "Sign in"
                                </A>
                            }
                        }
                    >
                        <A
                            href="/tasks"
                            class="rounded-md bg-action-primary-bg px-6 py-3 font-medium text-action-primary-fg"
                        >
                            "Go to my tasks"
                        </A>
                    </Show>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::{render_authed_view_to_html, render_view_to_html};

    #[test]
    fn signed_out_visitors_see_the_sign_up_call_to_action() {
        let html = render_view_to_html(|| view! { <LandingPage/> });
        assert!(html.contains("Welcome to TaskY"));
        assert!(html.contains("Get Started"));
    }

    #[test]
    fn signed_in_visitors_get_a_tasks_shortcut() {
        let html = render_authed_view_to_html(|| view! { <LandingPage/> });
        assert!(html.contains("Go to my tasks"));
        assert!(!html.contains("Get Started"));
    }
}
