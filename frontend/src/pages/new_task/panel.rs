use leptos::*;
use leptos_router::A;

use crate::components::layout::ErrorMessage;

use super::view_model::use_new_task_view_model;

#[component]
pub fn NewTaskPanel() -> impl IntoView {
    let vm = use_new_task_view_model();
    let error = vm.error;
    let submitting = vm.submitting;
    let editing_id = vm.editing_id;

    let heading = move || {
        if editing_id.get().is_some() {
            "Edit Task"
        } else {
            "New Task"
        }
    };
    let submit_label = move || {
        if submitting.get() {
            "Saving..."
        } else if editing_id.get().is_some() {
            "Save changes"
        } else {
            "Create task"
        }
    };

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };

    view! {
        <div class="mx-auto max-w-lg rounded-lg bg-surface p-8 shadow">
            <h1 class="mb-6 text-2xl font-bold text-fg">{heading}</h1>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            <form on:submit=on_submit>
                <label class="mb-1 block text-sm font-medium text-fg" for="title">
                    "Title"
                </label>
                <input
                    id="title"
                    class="mb-4 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                    type="text"
                    prop:value=move || vm.title.get()
                    on:input={
                        let field = vm.title;
                        move |ev| field.set(event_target_value(&ev))
                    }
                />
                <label class="mb-1 block text-sm font-medium text-fg" for="description">
                    "Description"
                </label>
                <textarea
                    id="description"
                    class="mb-6 h-32 w-full rounded-md border border-edge bg-canvas px-3 py-2 text-fg"
                    prop:value=move || vm.description.get()
                    on:input={
                        let field = vm.description;
                        move |ev| field.set(event_target_value(&ev))
                    }
                ></textarea>
                <div class="flex items-center justify-end gap-3">
                    <A href="/tasks" class="rounded-md border border-edge px-4 py-2 text-sm text-fg">
                        "Cancel"
                    </A>
                    <button
                        class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-medium text-action-primary-fg disabled:opacity-50"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}
