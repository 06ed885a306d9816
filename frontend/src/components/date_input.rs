use chrono::NaiveDate;
use leptos::*;

use super::with_extra_class;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the value of an `<input type="date">`.
///
/// `Ok(None)` means the field was cleared.
pub(crate) fn parse_date_value(raw: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map(Some)
}

/// Date input bound to an optional date; empty means `None`.
#[component]
pub fn DateInput(
    #[prop(into)] value: RwSignal<Option<NaiveDate>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = with_extra_class("form-input", class.as_deref());

    view! {
        <input
            type="date"
            class=full_class
            id=id
            placeholder=placeholder
            prop:value=move || {
                value.get().map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
            }
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                match parse_date_value(&raw) {
                    Ok(date) => value.set(date),
                    Err(err) => log::warn!("ignoring date input {:?}: {}", raw, err),
                }
            }
        />
    }
}
