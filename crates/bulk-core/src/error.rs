use thiserror::Error;

use bulk_model::{ItemKey, ModelError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate item key: {0}")]
    DuplicateKey(ItemKey),

    #[error("run requires confirmation")]
    NotConfirmed,

    #[error("run already started")]
    AlreadyStarted,

    #[error("dialog already closed")]
    Closed,

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
