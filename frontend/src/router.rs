use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::api::client::ApiClient;
use crate::components::guard::RequireAuth;
use crate::pages::{
    ActiveTasksPage, CompletedTasksPage, ForgotPasswordPage, LandingPage, LoginPage, NewTaskPage,
    ProfilePage, RegisterPage, ResetPasswordPage, TrashPage,
};
use crate::state::auth::AuthProvider;

pub const ROUTE_PATHS: [&str; 10] = [
    "/",
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
    "/tasks",
    "/completed",
    "/trash",
    "/new-task",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: [&str; 5] =
    ["/tasks", "/completed", "/trash", "/new-task", "/profile"];

pub const PUBLIC_ROUTE_PATHS: [&str; 5] = [
    "/",
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
];

#[component]
fn ProtectedActiveTasks() -> impl IntoView {
    view! { <RequireAuth><ActiveTasksPage/></RequireAuth> }
}

#[component]
fn ProtectedCompletedTasks() -> impl IntoView {
    view! { <RequireAuth><CompletedTasksPage/></RequireAuth> }
}

#[component]
fn ProtectedTrash() -> impl IntoView {
    view! { <RequireAuth><TrashPage/></RequireAuth> }
}

#[component]
fn ProtectedNewTask() -> impl IntoView {
    view! { <RequireAuth><NewTaskPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
pub fn AppRoot() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());

    view! {
        <Title text="TaskY"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/forgot-password" view=ForgotPasswordPage/>
                    <Route path="/reset-password" view=ResetPasswordPage/>
                    <Route path="/tasks" view=ProtectedActiveTasks/>
                    <Route path="/completed" view=ProtectedCompletedTasks/>
                    <Route path="/trash" view=ProtectedTrash/>
                    <Route path="/new-task" view=ProtectedNewTask/>
                    <Route path="/profile" view=ProtectedProfile/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

pub fn mount_app() {
    mount_to_body(|| view! { <AppRoot/> });
}
