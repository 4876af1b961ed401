mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::components::layout::Layout;
use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Layout>
            <ProfilePanel/>
        </Layout>
    }
}
