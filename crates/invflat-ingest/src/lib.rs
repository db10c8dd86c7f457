pub mod expired;
pub mod invoices;

pub use expired::{load_expired_ids, split_expired_ids};
pub use invoices::load_invoices;
