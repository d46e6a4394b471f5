//! Client record.

use serde::{Deserialize, Serialize};

/// Customer a project is ordered by.
///
/// `id` is assigned by the backend; an id it does not know yet marks a
/// client that will be registered together with its project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    /// Company name shown in tables and pickers.
    pub name: String,
    pub contact_person: String,
}

impl Client {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact_person: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_person: contact_person.into(),
        }
    }
}
