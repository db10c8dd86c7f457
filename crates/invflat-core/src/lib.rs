pub mod datetime;
pub mod flatten;
pub mod quantity;

pub use datetime::parse_created_on;
pub use flatten::flatten_invoices;
pub use quantity::normalize_quantity;
