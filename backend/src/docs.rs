#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::models::{
    task::{CreateTaskRequest, TaskMessageResponse, TaskResponse, UpdateTaskRequest},
    user::{
        AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
        ResetPasswordRequest, UpdateProfileRequest, UserMessageResponse, UserResponse,
    },
    MessageResponse,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        register_doc,
        login_doc,
        change_password_doc,
        forgot_password_doc,
        reset_password_doc,
        upload_avatar_doc,
        get_profile_doc,
        update_profile_doc,
        create_task_doc,
        list_tasks_doc,
        get_task_doc,
        update_task_doc,
        delete_task_doc,
        restore_task_doc,
        complete_task_doc,
        incomplete_task_doc,
        hard_delete_task_doc
    ),
    components(
        schemas(
            // auth
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            ChangePasswordRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            // user
            UpdateProfileRequest,
            UserResponse,
            UserMessageResponse,
            // tasks
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskResponse,
            TaskMessageResponse,
            // shared
            MessageResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Registration, login and password flows"),
        (name = "User", description = "Profile management"),
        (name = "Tasks", description = "Task CRUD and state transitions")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or weak password", body = MessageResponse),
        (status = 409, description = "Email or username taken", body = MessageResponse)
    ),
    tag = "Auth",
    security(())
)]
fn register_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse)
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    patch,
    path = "/api/auth/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Wrong current password or weak new password", body = MessageResponse)
    ),
    tag = "Auth"
)]
fn change_password_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses((status = 200, description = "Neutral acknowledgement", body = MessageResponse)),
    tag = "Auth",
    security(())
)]
fn forgot_password_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset", body = MessageResponse),
        (status = 400, description = "Invalid or expired token", body = MessageResponse)
    ),
    tag = "Auth",
    security(())
)]
fn reset_password_doc() {}

#[utoipa::path(
    patch,
    path = "/api/auth/avatar",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar stored", body = UserMessageResponse),
        (status = 400, description = "Missing file, wrong type or too large", body = MessageResponse)
    ),
    tag = "Auth"
)]
fn upload_avatar_doc() {}

#[utoipa::path(
    get,
    path = "/api/user",
    responses((status = 200, description = "Current user", body = UserResponse)),
    tag = "User"
)]
fn get_profile_doc() {}

#[utoipa::path(
    patch,
    path = "/api/user",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserMessageResponse),
        (status = 409, description = "Email or username taken", body = MessageResponse)
    ),
    tag = "User"
)]
fn update_profile_doc() {}

#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskMessageResponse),
        (status = 400, description = "Missing title", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn create_task_doc() {}

#[utoipa::path(
    get,
    path = "/api/tasks",
    params(("status" = Option<String>, Query, description = "active | completed | trash")),
    responses((status = 200, description = "Tasks in the requested state", body = [TaskResponse])),
    tag = "Tasks"
)]
fn list_tasks_doc() {}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = TaskResponse),
        (status = 404, description = "Absent or not owned", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn get_task_doc() {}

#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskMessageResponse),
        (status = 404, description = "Absent or not owned", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn update_task_doc() {}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task moved to trash", body = MessageResponse),
        (status = 404, description = "Absent, not owned or already trashed", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn delete_task_doc() {}

#[utoipa::path(
    patch,
    path = "/api/tasks/restore/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task restored as active", body = MessageResponse),
        (status = 404, description = "Not in trash or not owned", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn restore_task_doc() {}

#[utoipa::path(
    patch,
    path = "/api/tasks/complete/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task completed", body = MessageResponse),
        (status = 404, description = "Not active or not owned", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn complete_task_doc() {}

#[utoipa::path(
    patch,
    path = "/api/tasks/incomplete/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task reverted to active", body = MessageResponse),
        (status = 404, description = "Not completed or not owned", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn incomplete_task_doc() {}

#[utoipa::path(
    delete,
    path = "/api/tasks/hard-delete/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task permanently removed", body = MessageResponse),
        (status = 400, description = "Task is not trashed", body = MessageResponse),
        (status = 404, description = "Absent or not owned", body = MessageResponse)
    ),
    tag = "Tasks"
)]
fn hard_delete_task_doc() {}
