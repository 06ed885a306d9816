pub mod button;
pub mod checkbox;
pub mod date_input;
pub mod form_group;
pub mod modal;
pub mod radio_group;
pub mod resource_form;
pub mod select_input;
pub mod text_input;

pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use date_input::DateInput;
pub use form_group::FormGroup;
pub use modal::Modal;
pub use radio_group::RadioGroup;
pub use resource_form::ResourceForm;
pub use select_input::SelectInput;
pub use text_input::TextInput;

/// Append an optional caller-supplied class to a base CSS class.
pub(crate) fn with_extra_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => format!("{} {}", base, extra.trim()),
        _ => base.to_string(),
    }
}
