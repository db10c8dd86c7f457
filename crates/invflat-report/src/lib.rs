pub mod writer;

pub use writer::{render_row, write_csv, write_csv_to};
