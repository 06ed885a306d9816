use leptos::*;

/// Checkbox followed by its label.
#[component]
pub fn Checkbox(
    #[prop(into)] checked: RwSignal<bool>,
    #[prop(into)] label: String,
    #[prop(into)] id: String,
) -> impl IntoView {
    view! {
        <div class="form-checkbox">
            <input
                type="checkbox"
                id=id.clone()
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    checked.set(event_target_checked(&ev));
                }
            />
            <label for=id>{label}</label>
        </div>
    }
}
