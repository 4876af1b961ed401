use leptos::*;
use leptos_router::A;

use crate::api::types::{TaskResponse, TaskStatusFilter};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

use super::view_model::{
    empty_state_for, heading_for, use_tasks_view_model, TaskAction, TasksViewModel,
};

#[component]
pub fn TasksPanel(status: TaskStatusFilter) -> impl IntoView {
    let vm = use_tasks_view_model(status);
    let tasks = vm.tasks;
    let loading = vm.loading;
    let error = vm.error;
    let heading = heading_for(status);
    let (empty_title, empty_hint) = empty_state_for(status);

    let (dialog_open, set_dialog_open) = create_signal(false);
    let pending = vm.pending_confirmation;
    create_effect(move |_| {
        set_dialog_open.set(pending.get().is_some());
    });

    let dialog_title = move || {
        pending
            .get()
            .map(|action| action.confirm_title())
            .unwrap_or("Move to trash?")
            .to_string()
    };
    let dialog_message = move || {
        pending
            .get()
            .map(|action| action.confirm_message())
            .unwrap_or_default()
            .to_string()
    };

    let on_confirm = {
        let vm = vm.clone();
        Callback::new(move |_| vm.confirm_pending())
    };
    let on_cancel = {
        let vm = vm.clone();
        Callback::new(move |_| vm.cancel_pending())
    };

    let vm = store_value(vm);

    view! {
        <div>
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-2xl font-bold text-fg">{heading}</h1>
                {matches!(status, TaskStatusFilter::Active)
                    .then(|| {
                        view! {
                            <A
                                href="/new-task"
                                class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-medium text-action-primary-fg"
                            >
                                "New Task"
                            </A>
                        }
                    })}
            </div>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner/> }
            >
                <Show
                    when=move || !tasks.get().is_empty()
                    fallback=move || view! { <EmptyState title=empty_title hint=empty_hint/> }
                >
                    <ul class="space-y-3">
                        <For
                            each=move || tasks.get()
                            key=|task| task.id.clone()
                            children=move |task| view! { <TaskRow task=task vm=vm.get_value()/> }
                        />
                    </ul>
                </Show>
            </Show>
            {move || {
                view! {
                    <ConfirmDialog
                        open=dialog_open
                        title=dialog_title()
                        message=dialog_message()
                        confirm_label="Confirm"
                        cancel_label="Cancel"
                        on_confirm=on_confirm
                        on_cancel=on_cancel
                    />
                }
            }}
        </div>
    }
}

#[component]
fn TaskRow(task: TaskResponse, vm: TasksViewModel) -> impl IntoView {
    let created = task.date_created.format("%b %e, %Y").to_string();
    let task_id = task.id.clone();
    let status = vm.status;

    view! {
        <li class="rounded-lg border border-edge bg-surface p-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h2 class=move || {
                        if task.is_completed {
                            "font-medium text-fg-muted line-through"
                        } else {
                            "font-medium text-fg"
                        }
                    }>{task.title.clone()}</h2>
                    {task
                        .description
                        .clone()
                        .map(|description| view! { <p class="mt-1 text-sm text-fg-muted">{description}</p> })}
                    <p class="mt-2 text-xs text-fg-muted">"Created " {created}</p>
                </div>
                <div class="flex shrink-0 flex-wrap justify-end gap-2">
                    <TaskRowActions task_id=task_id status=status vm=vm/>
                </div>
            </div>
        </li>
    }
}

#[component]
fn TaskRowActions(task_id: String, status: TaskStatusFilter, vm: TasksViewModel) -> impl IntoView {
    let action_button = |label: &'static str, class: &'static str, vm: TasksViewModel, action: TaskAction| {
        view! {
            <button class=class on:click=move |_| vm.request(action.clone())>
                {label}
            </button>
        }
    };

    let primary = "rounded-md bg-action-primary-bg px-3 py-1.5 text-xs font-medium text-action-primary-fg";
    let neutral = "rounded-md border border-edge px-3 py-1.5 text-xs font-medium text-fg";
    let danger = "rounded-md bg-action-danger-bg px-3 py-1.5 text-xs font-medium text-action-danger-fg";

    match status {
        TaskStatusFilter::Active => view! {
            <>
                {action_button("Complete", primary, vm.clone(), TaskAction::Complete(task_id.clone()))}
                <A
                    href=format!("/new-task?id={task_id}")
                    class="rounded-md border border-edge px-3 py-1.5 text-xs font-medium text-fg"
                >
                    "Edit"
                </A>
                {action_button("Trash", danger, vm, TaskAction::MoveToTrash(task_id))}
            </>
        }
        .into_view(),
        TaskStatusFilter::Completed => view! {
            <>
                {action_button(
                    "Mark incomplete",
                    neutral,
                    vm.clone(),
                    TaskAction::MarkIncomplete(task_id.clone()),
                )}
                {action_button("Trash", danger, vm, TaskAction::MoveToTrash(task_id))}
            </>
        }
        .into_view(),
        TaskStatusFilter::Trash => view! {
            <>
                {action_button("Restore", neutral, vm.clone(), TaskAction::Restore(task_id.clone()))}
                {action_button("Delete forever", danger, vm, TaskAction::DeleteForever(task_id))}
            </>
        }
        .into_view(),
    }
}
