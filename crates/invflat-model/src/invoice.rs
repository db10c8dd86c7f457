//! Input entities as they arrive from the serialized invoice blob.
//!
//! The source export mixes value types freely: invoice ids arrive as
//! strings or numbers, quantities as numbers or a couple of known words,
//! type codes as integers or a legacy string marker. Each of those fields
//! is modeled as an untagged enum so the loader preserves what was
//! actually present, and every optional field is an explicit `Option`
//! rather than a fallback default.

use serde::Deserialize;

use crate::error::{FlattenError, Result};

/// Marker character carried by legacy invoice ids (and, as a string, by
/// legacy "Material" type codes).
pub const LEGACY_MARKER: char = 'O';

/// Invoice identifier as serialized: a plain number in newer exports, a
/// string (possibly carrying the legacy marker) in older ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawInvoiceId {
    Number(i64),
    Text(String),
}

impl RawInvoiceId {
    /// The id exactly as it appeared in the source, in string form.
    pub fn as_raw(&self) -> String {
        match self {
            RawInvoiceId::Number(value) => value.to_string(),
            RawInvoiceId::Text(text) => text.clone(),
        }
    }

    /// String form with every legacy marker occurrence removed.
    ///
    /// This is the form used for expired-set membership, so ids with
    /// leading zeros match the expired file as written.
    pub fn stripped(&self) -> String {
        self.as_raw().replace(LEGACY_MARKER, "")
    }

    /// Numeric invoice id: marker-stripped string parsed as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::InvalidInvoiceId`] when the stripped form
    /// is not an integer. This is the one fatal condition of the
    /// transform.
    pub fn normalize(&self) -> Result<i64> {
        self.stripped()
            .parse()
            .map_err(|_| FlattenError::InvalidInvoiceId {
                raw: self.as_raw(),
            })
    }
}

/// Line-item quantity: numeric, or one of the known textual synonyms.
///
/// Unknown text is preserved as-is and flows into arithmetic as an
/// undefined operand, never an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(f64),
    Text(String),
}

impl Quantity {
    /// The numeric value, if this quantity is numeric.
    pub fn as_count(&self) -> Option<f64> {
        match self {
            Quantity::Count(value) => Some(*value),
            Quantity::Text(_) => None,
        }
    }
}

/// Catalog item type code: an integer in newer exports, the legacy
/// string marker in older ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeCode {
    Code(i64),
    Legacy(String),
}

/// Catalog entity referenced by a line item. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub type_code: Option<TypeCode>,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

/// A quantity of a referenced catalog item within an invoice.
///
/// `quantity` and `item` are required; a record missing either is a
/// structural error surfaced by the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceLine {
    pub quantity: Quantity,
    pub item: CatalogItem,
}

/// Top-level billing record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invoice {
    pub id: RawInvoiceId,
    /// Creation timestamp string; unparseable values become the missing
    /// sentinel downstream, never a failure.
    pub created_on: String,
    /// Absent or empty is a valid terminal state.
    #[serde(default)]
    pub items: Option<Vec<InvoiceLine>>,
}

impl Invoice {
    /// Line items, treating an absent sequence as empty.
    pub fn lines(&self) -> &[InvoiceLine] {
        self.items.as_deref().unwrap_or(&[])
    }
}
