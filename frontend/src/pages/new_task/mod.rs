mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::components::layout::Layout;
use panel::NewTaskPanel;

#[component]
pub fn NewTaskPage() -> impl IntoView {
    view! {
        <Layout>
            <NewTaskPanel/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_authed_view_to_html;

    #[test]
    fn new_task_page_renders_the_task_form() {
        let html = render_authed_view_to_html(|| view! { <NewTaskPage/> });
        assert!(html.contains("New Task"));
        assert!(html.contains("Title"));
        assert!(html.contains("Description"));
    }
}
