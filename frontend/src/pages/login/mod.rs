mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::components::layout::Layout;
use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Layout>
            <LoginPanel/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_view_to_html;

    #[test]
    fn login_page_renders_the_credentials_form() {
        let html = render_view_to_html(|| view! { <LoginPage/> });
        assert!(html.contains("Email or username"));
        assert!(html.contains("Password"));
        assert!(html.contains("Forgot password?"));
    }
}
