//! Strongly typed identifier wrappers.
//!
//! Numeric IDs are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.  Zones are identified by the
//! host's world name, so [`ZoneId`] wraps a `String` instead.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// An occupant of a zone (a connected player on the host).
    pub struct EntityId(u64);
}

typed_id! {
    /// Sequence number of a deferred task, unique per runtime.
    pub struct TaskId(u64);
}

// ── ZoneId ────────────────────────────────────────────────────────────────────

/// Name of a zone (a host world), e.g. `"world_nether"`.
///
/// Implements `Borrow<str>` so zone-keyed maps can be queried with `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ZoneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ZoneId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ZoneId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
