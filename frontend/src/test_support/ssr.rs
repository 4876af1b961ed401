use leptos::ssr::render_to_string;
use leptos::*;
use leptos_router::Router;

/// Runs `f` inside a fresh reactive runtime and tears it down afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-side renders a view to HTML. The view is wrapped in a `Router` so
/// links and query-map hooks resolve, and resource loading is suppressed so
/// components that fetch on mount render their initial frame only.
pub fn render_view_to_html<F, V>(view_fn: F) -> String
where
    F: FnOnce() -> V + 'static,
    V: IntoView,
{
    let runtime = create_runtime();
    leptos_reactive::suppress_resource_load(true);
    let html = render_to_string(move || {
        view! { <Router>{view_fn().into_view()}</Router> }
    })
    .to_string();
    leptos_reactive::suppress_resource_load(false);
    runtime.dispose();
    html
}

/// Renders with an authenticated session already in context.
pub fn render_authed_view_to_html<F, V>(view_fn: F) -> String
where
    F: FnOnce() -> V + 'static,
    V: IntoView,
{
    use crate::state::auth::{AuthContext, AuthState};

    let runtime = create_runtime();
    leptos_reactive::suppress_resource_load(true);
    let html = render_to_string(move || {
        let (auth, set_auth) = create_signal(AuthState {
            user: Some(super::sample_user()),
            is_authenticated: true,
            loading: false,
        });
        provide_context::<AuthContext>((auth, set_auth));
        view! { <Router>{view_fn().into_view()}</Router> }
    })
    .to_string();
    leptos_reactive::suppress_resource_load(false);
    runtime.dispose();
    html
}
