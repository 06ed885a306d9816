use leptos::*;

/// Label plus control wrapper used for every field of a form.
///
/// The label text may be reactive. `sr_only` keeps the label for screen
/// readers while hiding it visually.
#[component]
pub fn FormGroup(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional)] sr_only: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let label_class = if sr_only { "form-label sr-only" } else { "form-label" };
    let group_class = super::with_extra_class("form-group", class.as_deref());

    view! {
        <div class=group_class>
            <label class=label_class for=for_id>
                {move || label.get()}
            </label>
            {children()}
        </div>
    }
}
