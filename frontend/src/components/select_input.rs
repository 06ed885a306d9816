use leptos::*;

use super::with_extra_class;

/// Select dropdown over `(value, label)` pairs.
///
/// The selected value is read from `value`; user choices are reported through
/// `on_change` so the owner decides how to store them.
#[component]
pub fn SelectInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = with_extra_class("form-select", class.as_deref());

    view! {
        <select
            class=full_class
            id=id
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            {move || {
                options.get().into_iter().map(|(val, label)| {
                    let val_clone = val.clone();
                    view! {
                        <option
                            value=val
                            selected=move || value.get() == val_clone
                        >
                            {label}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}
