mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::api::types::TaskStatusFilter;
use crate::components::layout::Layout;
use panel::TasksPanel;

#[component]
pub fn ActiveTasksPage() -> impl IntoView {
    view! {
        <Layout>
            <TasksPanel status=TaskStatusFilter::Active/>
        </Layout>
    }
}

#[component]
pub fn CompletedTasksPage() -> impl IntoView {
    view! {
        <Layout>
            <TasksPanel status=TaskStatusFilter::Completed/>
        </Layout>
    }
}

#[component]
pub fn TrashPage() -> impl IntoView {
    view! {
        <Layout>
            <TasksPanel status=TaskStatusFilter::Trash/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_authed_view_to_html;

    #[test]
    fn each_status_page_renders_its_heading() {
        let active = render_authed_view_to_html(|| view! { <ActiveTasksPage/> });
        assert!(active.contains("My Active Tasks"));

        let completed = render_authed_view_to_html(|| view! { <CompletedTasksPage/> });
        assert!(completed.contains("Completed Tasks"));

        let trash = render_authed_view_to_html(|| view! { <TrashPage/> });
        assert!(trash.contains("Trash"));
    }
}
