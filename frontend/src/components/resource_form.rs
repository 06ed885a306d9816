use std::str::FromStr;

use leptos::*;
use shared::{
    capacity_placeholder, choice_block, cost_label, cost_placeholder, is_quantity_read_only,
    quantity_placeholder, resource_name_placeholder, ChoiceBlock, CostType, DormSharing,
    ParseError, ResourceDraft, ResourceType,
};

use super::{
    Button, ButtonVariant, Checkbox, DateInput, FormGroup, Modal, RadioGroup, SelectInput,
    TextInput,
};

const DORM_SHARING_QUESTION: &str =
    "Can this room be shared between participants from different bookings (dorm style)?";

fn options<T: Copy>(
    values: &[T],
    as_str: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (as_str(v).to_string(), label(v).to_string()))
        .collect()
}

/// Callback that parses a raw control value into `signal`.
///
/// Values that do not parse leave the signal unchanged.
fn parse_into<T>(signal: RwSignal<T>, field: &'static str) -> Callback<String>
where
    T: FromStr<Err = ParseError> + 'static,
{
    Callback::new(move |raw: String| match raw.parse::<T>() {
        Ok(parsed) => {
            log::debug!("{} changed to {}", field, raw);
            signal.set(parsed);
        }
        Err(err) => log::warn!("ignoring {} value: {}", field, err),
    })
}

/// Dialog for creating a trip resource.
///
/// Placeholders, the cost label, quantity editability and the
/// dorm-sharing/cost-type block all follow the selected resource type. No
/// field is validated; Create hands the raw values to `on_submit`.
#[component]
pub fn ResourceForm(
    #[prop(optional)] initial: Option<ResourceDraft>,
    #[prop(optional, into)] on_submit: Option<Callback<ResourceDraft>>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let initial = initial.unwrap_or_default();

    let resource_type = create_rw_signal(initial.resource_type);
    let cost_type = create_rw_signal(initial.cost_type);
    let dorm_sharing = create_rw_signal(initial.dorm_sharing);
    let is_booking_confirmed = create_rw_signal(initial.is_booking_confirmed);
    let date_from = create_rw_signal(initial.date_from);
    let date_to = create_rw_signal(initial.date_to);

    // Free-form fields
    let name = create_rw_signal(initial.name);
    let supplier_name = create_rw_signal(initial.supplier_name);
    let quantity = create_rw_signal(initial.quantity);
    let capacity = create_rw_signal(initial.capacity);
    let cost = create_rw_signal(initial.cost);

    let block = create_memo(move |_| choice_block(resource_type.get()));

    let name_placeholder =
        Signal::derive(move || resource_name_placeholder(resource_type.get()).to_string());
    let quantity_hint = Signal::derive(move || {
        quantity_placeholder(resource_type.get(), is_booking_confirmed.get(), cost_type.get())
            .to_string()
    });
    let quantity_read_only = Signal::derive(move || is_quantity_read_only(resource_type.get()));
    let capacity_hint =
        Signal::derive(move || capacity_placeholder(resource_type.get()).to_string());
    let cost_text = Signal::derive(move || cost_label(resource_type.get()).to_string());
    let cost_hint = Signal::derive(move || cost_placeholder(resource_type.get()));

    let collect_draft = move || ResourceDraft {
        resource_type: resource_type.get_untracked(),
        name: name.get_untracked(),
        supplier_name: supplier_name.get_untracked(),
        date_from: date_from.get_untracked(),
        date_to: date_to.get_untracked(),
        quantity: quantity.get_untracked(),
        capacity: capacity.get_untracked(),
        cost: cost.get_untracked(),
        cost_type: cost_type.get_untracked(),
        dorm_sharing: dorm_sharing.get_untracked(),
        is_booking_confirmed: is_booking_confirmed.get_untracked(),
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = collect_draft();
        log::info!("create {} resource {:?}", draft.resource_type, draft.name);
        match on_submit {
            Some(callback) => callback.call(draft),
            None => log::debug!("no submit handler attached"),
        }
    };

    let cancel = move || {
        log::info!("resource form cancelled");
        if let Some(callback) = on_cancel {
            callback.call(());
        }
    };

    view! {
        <Modal title="Create a new resource" on_close=Callback::new(move |_: ()| cancel())>
            <form class="resource-form" on:submit=submit>
                <div class="modal-body">
                    <FormGroup label="Resource type" for_id="resource-type">
                        <SelectInput
                            id="resource-type"
                            value=Signal::derive(move || resource_type.get().as_str().to_string())
                            options=options(&ResourceType::ALL, ResourceType::as_str, ResourceType::label)
                            on_change=parse_into(resource_type, "resource type")
                        />
                    </FormGroup>

                    <FormGroup label="Resource name" for_id="resource-name">
                        <TextInput id="resource-name" value=name placeholder=name_placeholder />
                    </FormGroup>

                    <FormGroup label="Supplier name" for_id="supplier-name">
                        <TextInput
                            id="supplier-name"
                            value=supplier_name
                            placeholder="Enter supplier name"
                        />
                    </FormGroup>

                    <FormGroup label="Dates used">
                        <div class="form-row">
                            <FormGroup label="From" for_id="date-from" sr_only=true class="flex-1">
                                <DateInput id="date-from" value=date_from placeholder="From" />
                            </FormGroup>
                            <FormGroup label="To" for_id="date-to" sr_only=true class="flex-1">
                                <DateInput id="date-to" value=date_to placeholder="To" />
                            </FormGroup>
                        </div>
                    </FormGroup>

                    <FormGroup label="Quantity" for_id="quantity">
                        <TextInput
                            id="quantity"
                            input_type="number"
                            value=quantity
                            placeholder=quantity_hint
                            readonly=quantity_read_only
                        />
                    </FormGroup>

                    <FormGroup label="Capacity" for_id="capacity">
                        <TextInput
                            id="capacity"
                            input_type="number"
                            value=capacity
                            placeholder=capacity_hint
                        />
                    </FormGroup>

                    <FormGroup label=cost_text for_id="cost">
                        <TextInput id="cost" input_type="number" value=cost placeholder=cost_hint />
                    </FormGroup>

                    {move || match block.get() {
                        ChoiceBlock::DormSharing => view! {
                            <FormGroup label=DORM_SHARING_QUESTION>
                                <RadioGroup
                                    name="dorm-sharing"
                                    value=Signal::derive(move || dorm_sharing.get().as_str().to_string())
                                    options=options(&DormSharing::ALL, DormSharing::as_str, DormSharing::label)
                                    on_change=parse_into(dorm_sharing, "dorm sharing")
                                />
                            </FormGroup>
                        }
                        .into_view(),
                        ChoiceBlock::CostType => view! {
                            <FormGroup label="Cost type">
                                <RadioGroup
                                    name="cost-type"
                                    value=Signal::derive(move || cost_type.get().as_str().to_string())
                                    options=options(&CostType::ALL, CostType::as_str, CostType::label)
                                    on_change=parse_into(cost_type, "cost type")
                                />
                            </FormGroup>
                        }
                        .into_view(),
                    }}

                    <Checkbox
                        id="booking-confirmed"
                        label="Booking confirmed?"
                        checked=is_booking_confirmed
                    />
                </div>

                <div class="modal-footer">
                    <Button
                        id="resource-cancel"
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| cancel())
                    >
                        "Cancel"
                    </Button>
                    <Button id="resource-create" button_type="submit">
                        "Create"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
