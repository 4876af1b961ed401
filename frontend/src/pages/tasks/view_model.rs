use std::rc::Rc;

use leptos::*;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, MessageResponse, TaskResponse, TaskStatusFilter};

use super::repository::TasksRepository;

/// A mutation on one task. Trash and hard-delete go through the confirm
/// dialog first; the rest dispatch immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Complete(String),
    MarkIncomplete(String),
    MoveToTrash(String),
    Restore(String),
    DeleteForever(String),
}

impl TaskAction {
    pub fn needs_confirmation(&self) -> bool {
        matches!(
            self,
            TaskAction::MoveToTrash(_) | TaskAction::DeleteForever(_)
        )
    }

    pub fn confirm_title(&self) -> &'static str {
        match self {
            TaskAction::DeleteForever(_) => "Delete forever?",
            _ => "Move to trash?",
        }
    }

    pub fn confirm_message(&self) -> &'static str {
        match self {
            TaskAction::DeleteForever(_) => {
                "This task will be permanently deleted. This cannot be undone."
            }
            _ => "You can restore the task from the trash later.",
        }
    }
}

pub fn heading_for(status: TaskStatusFilter) -> &'static str {
    match status {
        TaskStatusFilter::Active => "My Active Tasks",
        TaskStatusFilter::Completed => "Completed Tasks",
        TaskStatusFilter::Trash => "Trash",
    }
}

pub fn empty_state_for(status: TaskStatusFilter) -> (&'static str, &'static str) {
    match status {
        TaskStatusFilter::Active => (
            "No active tasks",
            "Create your first task to get started.",
        ),
        TaskStatusFilter::Completed => (
            "No completed tasks yet",
            "Tasks you complete will show up here.",
        ),
        TaskStatusFilter::Trash => ("Trash is empty", "Deleted tasks land here."),
    }
}

#[derive(Clone)]
pub struct TasksViewModel {
    pub status: TaskStatusFilter,
    pub tasks: RwSignal<Vec<TaskResponse>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub pending_confirmation: RwSignal<Option<TaskAction>>,
    fetch_action: Action<TaskStatusFilter, Result<Vec<TaskResponse>, ApiError>>,
    mutate_action: Action<TaskAction, Result<MessageResponse, ApiError>>,
}

impl TasksViewModel {
    pub fn refresh(&self) {
        self.fetch_action.dispatch(self.status);
    }

    /// Entry point for the row buttons. Destructive actions park in
    /// `pending_confirmation` until the dialog resolves them.
    pub fn request(&self, action: TaskAction) {
        if action.needs_confirmation() {
            self.pending_confirmation.set(Some(action));
        } else {
            self.mutate_action.dispatch(action);
        }
    }

    pub fn confirm_pending(&self) {
        if let Some(action) = self.pending_confirmation.get_untracked() {
            self.pending_confirmation.set(None);
            self.mutate_action.dispatch(action);
        }
    }

    pub fn cancel_pending(&self) {
        self.pending_confirmation.set(None);
    }
}

pub fn use_tasks_view_model(status: TaskStatusFilter) -> TasksViewModel {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let repository = TasksRepository::new_with_client(Rc::new(client));

    let tasks = create_rw_signal(Vec::<TaskResponse>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let pending_confirmation = create_rw_signal(None::<TaskAction>);

    let fetch_action = {
        let repository = repository.clone();
        create_action(move |status: &TaskStatusFilter| {
            let repository = repository.clone();
            let status = *status;
            async move { repository.list(status).await }
        })
    };

    let mutate_action = create_action(move |action: &TaskAction| {
        let repository = repository.clone();
        let action = action.clone();
        async move {
            match &action {
                TaskAction::Complete(id) => repository.complete(id).await,
                TaskAction::MarkIncomplete(id) => repository.mark_incomplete(id).await,
                TaskAction::MoveToTrash(id) => repository.move_to_trash(id).await,
                TaskAction::Restore(id) => repository.restore(id).await,
                TaskAction::DeleteForever(id) => repository.delete_forever(id).await,
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = fetch_action.value().get() {
            loading.set(false);
            match result {
                Ok(list) => {
                    error.set(None);
                    tasks.set(list);
                }
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    // Every mutation refetches the list; there is no client-side cache.
    create_effect(move |_| {
        if let Some(result) = mutate_action.value().get() {
            match result {
                Ok(_) => {
                    loading.set(true);
                    fetch_action.dispatch(status);
                }
                Err(api_error) => error.set(Some(api_error.message)),
            }
        }
    });

    // Initial load. Effects only run in the browser, so server rendering
    // shows the loading frame.
    create_effect(move |already_ran: Option<()>| {
        if already_ran.is_none() {
            fetch_action.dispatch(status);
        }
    });

    TasksViewModel {
        status,
        tasks,
        loading,
        error,
        pending_confirmation,
        fetch_action,
        mutate_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_match_their_status() {
        assert_eq!(heading_for(TaskStatusFilter::Active), "My Active Tasks");
        assert_eq!(heading_for(TaskStatusFilter::Completed), "Completed Tasks");
        assert_eq!(heading_for(TaskStatusFilter::Trash), "Trash");
    }

    #[test]
    fn only_destructive_actions_need_confirmation() {
        assert!(TaskAction::MoveToTrash("t1".into()).needs_confirmation());
        assert!(TaskAction::DeleteForever("t1".into()).needs_confirmation());
        assert!(!TaskAction::Complete("t1".into()).needs_confirmation());
        assert!(!TaskAction::MarkIncomplete("t1".into()).needs_confirmation());
        assert!(!TaskAction::Restore("t1".into()).needs_confirmation());
    }

    #[test]
    fn hard_delete_confirmation_warns_about_permanence() {
        let action = TaskAction::DeleteForever("t1".into());
        assert_eq!(action.confirm_title(), "Delete forever?");
        assert!(action.confirm_message().contains("cannot be undone"));

        let trash = TaskAction::MoveToTrash("t1".into());
        assert_eq!(trash.confirm_title(), "Move to trash?");
        assert!(trash.confirm_message().contains("restore"));
    }

    #[test]
    fn empty_states_describe_each_view() {
        let (title, _) = empty_state_for(TaskStatusFilter::Active);
        assert_eq!(title, "No active tasks");
        let (title, _) = empty_state_for(TaskStatusFilter::Trash);
        assert_eq!(title, "Trash is empty");
    }
}
