//! Entry ids.
use std::fmt::{self, Display};
use std::ops::Deref;
use std::result::Result as StdResult;
use std::str::FromStr;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique id of a dictionary entry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> EntryId {
        EntryId(Uuid::new_v4())
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        Display::fmt(&self.0, f)
    }
}

impl Deref for EntryId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Ok(EntryId(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> EntryId {
        EntryId(id)
    }
}

#[cfg(test)]
#[path = "./entry_id_test.rs"]
mod entry_id_test;
