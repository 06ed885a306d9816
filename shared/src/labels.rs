//! Placeholder and label text derived from the current form selections.
//!
//! Every function here is a pure mapping from explicit arguments to display
//! text, so the form can recompute them on each render.

use crate::types::{CostType, ResourceType};

/// Which of the two mutually exclusive radio blocks the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceBlock {
    /// "Dorm style sharing allowed?" yes/no.
    DormSharing,
    /// Cost per person / cost per group.
    CostType,
}

pub fn resource_name_placeholder(resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Accommodation => "e.g. Nuqui lodge - Double rooms",
        ResourceType::Transportation => "e.g. bus ticket, van rental, airport transfer",
        ResourceType::Personnel => "e.g. trip leader, porter, local guide",
        ResourceType::OtherServices => "e.g. sunset cruise, yoga classes, zipline, etc.",
        ResourceType::Meals => "e.g. breakfast, lunch, dinner, snacks",
        ResourceType::Gear | ResourceType::MiscFees => "e.g. Mountain bike rental",
    }
}

/// Placeholder for the quantity input.
///
/// Unconfirmed per-person transportation hints that the head count should be
/// pulled from the trip; personnel quantity is a calculated field.
pub fn quantity_placeholder(
    resource_type: ResourceType,
    is_booking_confirmed: bool,
    cost_type: CostType,
) -> &'static str {
    if resource_type == ResourceType::Transportation
        && !is_booking_confirmed
        && cost_type == CostType::PerPerson
    {
        return "Pull current number of pax";
    }
    match resource_type {
        ResourceType::Personnel => "Calculated field",
        ResourceType::Accommodation => "Number of rooms",
        _ => "Number of items",
    }
}

pub fn capacity_placeholder(resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Personnel => "How many guests to each personnel",
        ResourceType::Accommodation => "Max. number of participants per room",
        _ => "Max. number of participants per item",
    }
}

pub fn cost_label(resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Accommodation => "Cost per night",
        ResourceType::Meals => "Total estimated meal cost per person",
        _ => "Cost per unit",
    }
}

pub fn cost_placeholder(resource_type: ResourceType) -> String {
    format!("Enter {}", cost_label(resource_type).to_lowercase())
}

pub fn choice_block(resource_type: ResourceType) -> ChoiceBlock {
    if resource_type == ResourceType::Accommodation {
        ChoiceBlock::DormSharing
    } else {
        ChoiceBlock::CostType
    }
}

/// Personnel quantity is calculated elsewhere, so the input is read-only.
pub fn is_quantity_read_only(resource_type: ResourceType) -> bool {
    resource_type == ResourceType::Personnel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_placeholder_per_type() {
        let expected = [
            (ResourceType::Accommodation, "e.g. Nuqui lodge - Double rooms"),
            (ResourceType::Transportation, "e.g. bus ticket, van rental, airport transfer"),
            (ResourceType::Personnel, "e.g. trip leader, porter, local guide"),
            (ResourceType::Gear, "e.g. Mountain bike rental"),
            (ResourceType::OtherServices, "e.g. sunset cruise, yoga classes, zipline, etc."),
            (ResourceType::Meals, "e.g. breakfast, lunch, dinner, snacks"),
            (ResourceType::MiscFees, "e.g. Mountain bike rental"),
        ];
        for (resource_type, text) in expected {
            assert_eq!(resource_name_placeholder(resource_type), text, "{resource_type}");
        }
    }

    #[test]
    fn test_quantity_placeholder_transportation() {
        assert_eq!(
            quantity_placeholder(ResourceType::Transportation, false, CostType::PerPerson),
            "Pull current number of pax"
        );
        assert_eq!(
            quantity_placeholder(ResourceType::Transportation, true, CostType::PerPerson),
            "Number of items"
        );
        assert_eq!(
            quantity_placeholder(ResourceType::Transportation, false, CostType::PerGroup),
            "Number of items"
        );
    }

    #[test]
    fn test_quantity_placeholder_ignores_flags_for_other_types() {
        for confirmed in [false, true] {
            for cost_type in CostType::ALL {
                assert_eq!(
                    quantity_placeholder(ResourceType::Personnel, confirmed, cost_type),
                    "Calculated field"
                );
                assert_eq!(
                    quantity_placeholder(ResourceType::Accommodation, confirmed, cost_type),
                    "Number of rooms"
                );
                for resource_type in [
                    ResourceType::Gear,
                    ResourceType::OtherServices,
                    ResourceType::Meals,
                    ResourceType::MiscFees,
                ] {
                    assert_eq!(
                        quantity_placeholder(resource_type, confirmed, cost_type),
                        "Number of items"
                    );
                }
            }
        }
    }

    #[test]
    fn test_capacity_placeholder() {
        assert_eq!(
            capacity_placeholder(ResourceType::Personnel),
            "How many guests to each personnel"
        );
        assert_eq!(
            capacity_placeholder(ResourceType::Accommodation),
            "Max. number of participants per room"
        );
        assert_eq!(
            capacity_placeholder(ResourceType::Meals),
            "Max. number of participants per item"
        );
        assert_eq!(
            capacity_placeholder(ResourceType::Transportation),
            "Max. number of participants per item"
        );
    }

    #[test]
    fn test_cost_label_and_placeholder() {
        assert_eq!(cost_label(ResourceType::Accommodation), "Cost per night");
        assert_eq!(cost_label(ResourceType::Meals), "Total estimated meal cost per person");
        assert_eq!(cost_label(ResourceType::Gear), "Cost per unit");

        assert_eq!(cost_placeholder(ResourceType::Accommodation), "Enter cost per night");
        assert_eq!(
            cost_placeholder(ResourceType::Meals),
            "Enter total estimated meal cost per person"
        );
        for resource_type in ResourceType::ALL {
            assert_eq!(
                cost_placeholder(resource_type),
                format!("Enter {}", cost_label(resource_type).to_lowercase())
            );
        }
    }

    #[test]
    fn test_choice_block_is_exclusive() {
        assert_eq!(choice_block(ResourceType::Accommodation), ChoiceBlock::DormSharing);
        for resource_type in ResourceType::ALL
            .into_iter()
            .filter(|t| *t != ResourceType::Accommodation)
        {
            assert_eq!(choice_block(resource_type), ChoiceBlock::CostType);
        }
    }

    #[test]
    fn test_quantity_read_only_only_for_personnel() {
        for resource_type in ResourceType::ALL {
            assert_eq!(
                is_quantity_read_only(resource_type),
                resource_type == ResourceType::Personnel
            );
        }
    }
}
