pub mod error;
pub mod invoice;
pub mod item_type;
pub mod row;

pub use error::{FlattenError, Result};
pub use invoice::{
    CatalogItem, Invoice, InvoiceLine, LEGACY_MARKER, Quantity, RawInvoiceId, TypeCode,
};
pub use item_type::ItemType;
pub use row::{FlatRow, FlatTable, NumericTyping};
