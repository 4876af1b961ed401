mod panel;
mod repository;
mod view_model;

use leptos::*;

use crate::components::layout::Layout;
use panel::ForgotPasswordPanel;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <Layout>
            <ForgotPasswordPanel/>
        </Layout>
    }
}
