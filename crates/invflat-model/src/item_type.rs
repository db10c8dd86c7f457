//! Type-safe item category labels.
//!
//! The source encodes item categories as small integers, with a legacy
//! string marker that predates the numeric scheme. Unmapped codes carry
//! no label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::invoice::{LEGACY_MARKER, TypeCode};

/// Human-readable item category derived from a type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Material,
    Equipment,
    Service,
    Other,
}

impl ItemType {
    /// Returns the label as it appears in the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Material => "Material",
            ItemType::Equipment => "Equipment",
            ItemType::Service => "Service",
            ItemType::Other => "Other",
        }
    }

    /// Maps a serialized type code to its label.
    ///
    /// The legacy marker string maps to Material; integers 0-3 map in
    /// order; anything else has no label.
    pub fn from_code(code: &TypeCode) -> Option<Self> {
        match code {
            TypeCode::Legacy(text) => {
                if text.len() == 1 && text.starts_with(LEGACY_MARKER) {
                    Some(ItemType::Material)
                } else {
                    None
                }
            }
            TypeCode::Code(0) => Some(ItemType::Material),
            TypeCode::Code(1) => Some(ItemType::Equipment),
            TypeCode::Code(2) => Some(ItemType::Service),
            TypeCode::Code(3) => Some(ItemType::Other),
            TypeCode::Code(_) => None,
        }
    }

    /// The numeric code table, in code order. Used by the CLI listing.
    pub fn code_table() -> [(i64, ItemType); 4] {
        [
            (0, ItemType::Material),
            (1, ItemType::Equipment),
            (2, ItemType::Service),
            (3, ItemType::Other),
        ]
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MATERIAL" => Ok(ItemType::Material),
            "EQUIPMENT" => Ok(ItemType::Equipment),
            "SERVICE" => Ok(ItemType::Service),
            "OTHER" => Ok(ItemType::Other),
            _ => Err(format!("Unknown item type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_map_in_order() {
        assert_eq!(ItemType::from_code(&TypeCode::Code(0)), Some(ItemType::Material));
        assert_eq!(ItemType::from_code(&TypeCode::Code(1)), Some(ItemType::Equipment));
        assert_eq!(ItemType::from_code(&TypeCode::Code(2)), Some(ItemType::Service));
        assert_eq!(ItemType::from_code(&TypeCode::Code(3)), Some(ItemType::Other));
    }

    #[test]
    fn legacy_marker_maps_to_material() {
        let code = TypeCode::Legacy("O".to_string());
        assert_eq!(ItemType::from_code(&code), Some(ItemType::Material));
    }

    #[test]
    fn unmapped_codes_have_no_label() {
        assert_eq!(ItemType::from_code(&TypeCode::Code(4)), None);
        assert_eq!(ItemType::from_code(&TypeCode::Code(-1)), None);
        assert_eq!(
            ItemType::from_code(&TypeCode::Legacy("X".to_string())),
            None
        );
        assert_eq!(
            ItemType::from_code(&TypeCode::Legacy("OO".to_string())),
            None
        );
    }

    #[test]
    fn item_type_from_str() {
        assert_eq!("Material".parse::<ItemType>().unwrap(), ItemType::Material);
        assert_eq!("SERVICE".parse::<ItemType>().unwrap(), ItemType::Service);
        assert!("Widget".parse::<ItemType>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ItemType::Equipment.to_string(), "Equipment");
    }
}
