use leptos::*;

use crate::components::layout::LoadingSpinner;
use crate::state::auth::use_auth;

fn should_render_children(is_authenticated: bool, loading: bool) -> bool {
    is_authenticated && !loading
}

/// Wraps a protected page. Unauthenticated visitors are sent to the login
/// page; while the session is being established a spinner renders instead of
/// the children.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();

    let gate = create_memo(move |_| {
        let state = auth.get();
        (state.is_authenticated, state.loading)
    });

    create_effect(move |_| {
        let (is_authenticated, loading) = gate.get();
        if !is_authenticated && !loading {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    });

    view! {
        <Show
            when=move || {
                let (is_authenticated, loading) = gate.get();
                should_render_children(is_authenticated, loading)
            }
            fallback=|| view! { <LoadingSpinner/> }
        >
            {children()}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::{render_authed_view_to_html, render_view_to_html};

    #[test]
    fn gate_opens_only_for_settled_authenticated_sessions() {
        assert!(should_render_children(true, false));
        assert!(!should_render_children(true, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(false, true));
    }

    #[test]
    fn authed_sessions_see_the_protected_content() {
        let html = render_authed_view_to_html(|| {
            view! { <RequireAuth>"protected content"</RequireAuth> }
        });
        assert!(html.contains("protected content"));
    }

    #[test]
    fn signed_out_sessions_see_the_fallback() {
        let html = render_view_to_html(|| {
            view! { <RequireAuth>"protected content"</RequireAuth> }
        });
        assert!(!html.contains("protected content"));
        assert!(html.contains("animate-spin"));
    }
}
