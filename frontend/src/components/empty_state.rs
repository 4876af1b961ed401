use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-dashed border-edge py-12 text-center">
            <p class="text-lg font-medium text-fg">{title}</p>
            {hint.map(|hint| view! { <p class="mt-2 text-sm text-fg-muted">{hint}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::render_view_to_html;

    #[test]
    fn renders_title_and_optional_hint() {
        let html = render_view_to_html(|| {
            view! { <EmptyState title="No tasks yet" hint="Create your first task to get started."/> }
        });
        assert!(html.contains("No tasks yet"));
        assert!(html.contains("Create your first task"));
    }
}
