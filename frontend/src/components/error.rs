use leptos::*;

/// Inline variant for rendering a failure next to the control that caused
/// it, without the block spacing of the banner components.
#[component]
pub fn InlineErrorMessage(message: String) -> impl IntoView {
    view! {
        <p class="mt-1 text-sm text-status-error-fg" role="alert">
            {message}
        </p>
    }
}
