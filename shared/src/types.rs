use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown resource type: {0:?}")]
    ResourceType(String),
    #[error("unknown cost type: {0:?}")]
    CostType(String),
    #[error("unknown dorm sharing option: {0:?}")]
    DormSharing(String),
}

// ============================================================================
// Resource Types
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    #[default]
    Accommodation,
    Transportation,
    Personnel,
    Gear,
    OtherServices,
    Meals,
    MiscFees,
}

impl ResourceType {
    /// All resource types in the order they are offered in the form.
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Accommodation,
        ResourceType::Transportation,
        ResourceType::Personnel,
        ResourceType::Gear,
        ResourceType::OtherServices,
        ResourceType::Meals,
        ResourceType::MiscFees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Accommodation => "accommodation",
            ResourceType::Transportation => "transportation",
            ResourceType::Personnel => "personnel",
            ResourceType::Gear => "gear",
            ResourceType::OtherServices => "other-services",
            ResourceType::Meals => "meals",
            ResourceType::MiscFees => "misc-fees",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Accommodation => "Accommodation",
            ResourceType::Transportation => "Transportation",
            ResourceType::Personnel => "Personnel",
            ResourceType::Gear => "Gear",
            ResourceType::OtherServices => "Other services",
            ResourceType::Meals => "Meals",
            ResourceType::MiscFees => "Misc fees",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accommodation" => Ok(ResourceType::Accommodation),
            "transportation" => Ok(ResourceType::Transportation),
            "personnel" => Ok(ResourceType::Personnel),
            "gear" => Ok(ResourceType::Gear),
            "other-services" => Ok(ResourceType::OtherServices),
            "meals" => Ok(ResourceType::Meals),
            "misc-fees" => Ok(ResourceType::MiscFees),
            _ => Err(ParseError::ResourceType(s.to_string())),
        }
    }
}

// ============================================================================
// Cost Types
// ============================================================================

/// Whether a resource is priced per participant or once per group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostType {
    #[default]
    PerPerson,
    PerGroup,
}

impl CostType {
    pub const ALL: [CostType; 2] = [CostType::PerPerson, CostType::PerGroup];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostType::PerPerson => "per-person",
            CostType::PerGroup => "per-group",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostType::PerPerson => "Cost per person",
            CostType::PerGroup => "Cost per group",
        }
    }
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per-person" => Ok(CostType::PerPerson),
            "per-group" => Ok(CostType::PerGroup),
            _ => Err(ParseError::CostType(s.to_string())),
        }
    }
}

// ============================================================================
// Dorm Sharing
// ============================================================================

/// Whether participants from different bookings may share one room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DormSharing {
    Yes,
    #[default]
    No,
}

impl DormSharing {
    pub const ALL: [DormSharing; 2] = [DormSharing::Yes, DormSharing::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            DormSharing::Yes => "yes",
            DormSharing::No => "no",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DormSharing::Yes => "Yes",
            DormSharing::No => "No",
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, DormSharing::Yes)
    }
}

impl fmt::Display for DormSharing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DormSharing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(DormSharing::Yes),
            "no" => Ok(DormSharing::No),
            _ => Err(ParseError::DormSharing(s.to_string())),
        }
    }
}

// ============================================================================
// Resource Draft
// ============================================================================

/// Field values of the create-resource form.
///
/// Numeric fields are kept as the raw text the user typed; nothing here is
/// validated. `cost_type` only matters for non-accommodation resources and
/// `dorm_sharing` only for accommodation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub resource_type: ResourceType,
    pub name: String,
    pub supplier_name: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub quantity: String,
    pub capacity: String,
    pub cost: String,
    pub cost_type: CostType,
    pub dorm_sharing: DormSharing,
    pub is_booking_confirmed: bool,
}

impl ResourceDraft {
    /// Cost type that applies to this draft, if the resource type uses one.
    pub fn effective_cost_type(&self) -> Option<CostType> {
        if self.resource_type == ResourceType::Accommodation {
            None
        } else {
            Some(self.cost_type)
        }
    }

    /// Dorm sharing choice, only present for accommodation.
    pub fn effective_dorm_sharing(&self) -> Option<DormSharing> {
        if self.resource_type == ResourceType::Accommodation {
            Some(self.dorm_sharing)
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
