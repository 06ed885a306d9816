use leptos::*;

use super::with_extra_class;

/// Controlled text input. Also used for number fields, whose value is kept
/// as the raw text the user typed.
#[component]
pub fn TextInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let full_class = with_extra_class("form-input", class.as_deref());

    view! {
        <input
            type=input_type
            class=full_class
            id=id
            placeholder=placeholder
            readonly=readonly
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}
