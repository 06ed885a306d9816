use leptos::*;
use shared::ResourceDraft;

use crate::components::{Button, ResourceForm};

/// Pretty JSON for the submitted-draft preview.
fn draft_json(draft: &ResourceDraft) -> String {
    serde_json::to_string_pretty(draft).unwrap_or_else(|err| {
        log::error!("failed to serialize resource draft: {}", err);
        format!("{:?}", draft)
    })
}

#[component]
pub fn App() -> impl IntoView {
    let form_open = create_rw_signal(true);
    let last_draft = create_rw_signal(Option::<ResourceDraft>::None);

    let on_submit = move |draft: ResourceDraft| {
        last_draft.set(Some(draft));
        form_open.set(false);
    };
    let on_cancel = move |_: ()| form_open.set(false);

    view! {
        <main class="container">
            <Show
                when=move || form_open.get()
                fallback=move || view! {
                    <Button on_click=Callback::new(move |_| form_open.set(true))>
                        "New resource"
                    </Button>
                    {move || last_draft.get().map(|draft| view! {
                        <pre class="draft-preview">{draft_json(&draft)}</pre>
                    })}
                }
            >
                <ResourceForm on_submit=on_submit on_cancel=on_cancel />
            </Show>
        </main>
    }
}
