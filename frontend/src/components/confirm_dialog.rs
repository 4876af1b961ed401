use leptos::*;

/// Modal confirmation used before destructive task actions. The dialog only
/// renders while `open` is true; both buttons close it through the provided
/// callbacks.
#[component]
pub fn ConfirmDialog(
    open: ReadSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirm".to_string());
    let cancel_label = cancel_label.unwrap_or_else(|| "Cancel".to_string());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="fixed inset-0 z-20 flex items-center justify-center bg-black/50">
                <div class="w-full max-w-sm rounded-lg bg-surface p-6 shadow-xl" role="dialog" aria-modal="true">
                    <h2 class="text-lg font-semibold text-fg">{title.clone()}</h2>
                    <p class="mt-2 text-sm text-fg-muted">{message.clone()}</p>
                    <div class="mt-6 flex justify-end gap-3">
                        <button
                            class="rounded-md border border-edge px-4 py-2 text-sm text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            {cancel_label.clone()}
                        </button>
                        <button
                            class="rounded-md bg-action-danger-bg px-4 py-2 text-sm text-action-danger-fg"
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
