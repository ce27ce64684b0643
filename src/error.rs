use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("could not reserve room for {requested} elements: {source}")]
    Capacity {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("writing report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
