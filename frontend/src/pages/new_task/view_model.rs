use std::rc::Rc;

use leptos::*;
use leptos_router::use_query_map;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, CreateTaskRequest, TaskMessageResponse, TaskResponse, UpdateTaskRequest,
};

use super::repository::NewTaskRepository;

/// Blank descriptions are dropped rather than stored as empty strings.
pub(super) fn normalized_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

enum SubmitRequest {
    Create(CreateTaskRequest),
    Update(String, UpdateTaskRequest),
}

#[derive(Clone)]
pub struct NewTaskViewModel {
    pub editing_id: Signal<Option<String>>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submitting: Signal<bool>,
    submit_action: Action<(), Result<TaskMessageResponse, ApiError>>,
}

impl NewTaskViewModel {
    pub fn submit(&self) {
        let title = self.title.get().trim().to_string();
        if title.is_empty() {
            self.error.set(Some("Title is required.".to_string()));
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(());
    }
}

pub fn use_new_task_view_model() -> NewTaskViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = NewTaskRepository::new_with_client(Rc::new(client));
    let query = use_query_map();
    let editing_id = Signal::derive(move || {
        query.with(|q| q.get("id").cloned().filter(|id| !id.is_empty()))
    });

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let load_action = {
        let repository = repository.clone();
        create_action(move |task_id: &String| {
            let repository = repository.clone();
            let task_id = task_id.clone();
            async move { repository.load(&task_id).await }
        })
    };

    let submit_action = create_action(move |_: &()| {
        let repository = repository.clone();
        let request = match editing_id.get_untracked() {
            Some(id) => SubmitRequest::Update(
                id,
                UpdateTaskRequest {
                    title: Some(title.get_untracked().trim().to_string()),
                    description: normalized_description(&description.get_untracked()),
                },
            ),
            None => SubmitRequest::Create(CreateTaskRequest {
                title: title.get_untracked().trim().to_string(),
                description: normalized_description(&description.get_untracked()),
            }),
        };
        async move {
            match request {
                SubmitRequest::Create(request) => repository.create(&request).await,
                SubmitRequest::Update(id, request) => repository.update(&id, &request).await,
            }
        }
    });

    // Prefill the form when the page was opened with ?id=.
    create_effect(move |already_ran: Option<()>| {
        if already_ran.is_none() {
            if let Some(id) = editing_id.get_untracked() {
                load_action.dispatch(id);
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(task) => apply_loaded_task(&task, title, description),
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/tasks");
                    }
                }
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    NewTaskViewModel {
        editing_id,
        title,
        description,
        error,
        submitting: submit_action.pending().into(),
        submit_action,
    }
}

fn apply_loaded_task(task: &TaskResponse, title: RwSignal<String>, description: RwSignal<String>) {
    title.set(task.title.clone());
    description.set(task.description.clone().unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::normalized_description;

    #[test]
    fn blank_descriptions_become_none() {
        assert_eq!(normalized_description(""), None);
        assert_eq!(normalized_description("   "), None);
    }

    #[test]
    fn descriptions_are_trimmed() {
        assert_eq!(
            normalized_description("  walk the dog  "),
            Some("walk the dog".to_string())
        );
    }
}
