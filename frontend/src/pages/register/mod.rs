mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::components::layout::Layout;
use panel::RegisterPanel;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Layout>
            <RegisterPanel/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_view_to_html;

    #[test]
    fn register_page_renders_all_profile_fields() {
        let html = render_view_to_html(|| view! { <RegisterPage/> });
        assert!(html.contains("First name"));
        assert!(html.contains("Last name"));
        assert!(html.contains("Username"));
        assert!(html.contains("Email"));
        assert!(html.contains("Confirm password"));
    }
}
