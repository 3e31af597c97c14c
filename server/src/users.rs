//! Read-only user table.

use std::collections::BTreeMap;

/// Immutable id → name mapping, built once at startup and handed to the
/// router as state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: BTreeMap<i64, String>,
}

impl UserDirectory {
    /// The five users the service ships with.
    pub fn seeded() -> Self {
        [
            (1, "Marcos"),
            (2, "Paula"),
            (3, "Alberto R"),
            (4, "Alberto F"),
            (5, "Isabel"),
        ]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect()
    }

    pub fn name(&self, id: i64) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<(i64, String)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}
