mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::components::layout::Layout;
use panel::ResetPasswordPanel;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <Layout>
            <ResetPasswordPanel/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_view_to_html;

    #[test]
    fn reset_password_page_renders_the_new_password_form() {
        let html = render_view_to_html(|| view! { <ResetPasswordPage/> });
        assert!(html.contains("Choose a new password"));
        assert!(html.contains("New password"));
        assert!(html.contains("Confirm new password"));
    }
}
