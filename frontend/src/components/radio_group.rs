use leptos::*;

/// Inline group of radio buttons sharing one `name`.
///
/// Each option gets the id `{name}-{value}`. Like [`super::SelectInput`],
/// the checked option follows `value` and selections go out via `on_change`.
#[component]
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Vec<(String, String)>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="radio-group" role="radiogroup">
            {options.into_iter().map(|(val, label)| {
                let option_id = format!("{}-{}", name, val);
                let val_for_check = val.clone();
                let val_for_change = val.clone();
                view! {
                    <label class="radio-option" for=option_id.clone()>
                        <input
                            type="radio"
                            id=option_id
                            name=name.clone()
                            value=val
                            prop:checked=move || value.get() == val_for_check
                            on:change=move |ev| {
                                if event_target_checked(&ev) {
                                    on_change.call(val_for_change.clone());
                                }
                            }
                        />
                        <span>{label}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
