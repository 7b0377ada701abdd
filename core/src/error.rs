//! Common error types.
use crate::types::EntryId;
use std::result::Result as StdResult;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("entry `{0}` already exists")]
    DuplicateId(EntryId),

    #[error("entry `{0}` does not exist")]
    NotFound(EntryId),
}

pub type Result<T = ()> = StdResult<T, Error>;
