use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("invalid invoice id {raw:?}: not an integer after marker removal")]
    InvalidInvoiceId { raw: String },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
