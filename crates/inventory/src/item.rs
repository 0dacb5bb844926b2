use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use estate_core::{Entity, ItemId};
use estate_formatting::CanonicalValue;

/// One committed inventory record.
///
/// Fields are only reachable through accessors; the store is the single
/// place that creates or replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    description: String,
    value: CanonicalValue,
    recipient: String,
    notes: String,
    photos: Vec<String>,
    date_added: NaiveDate,
}

/// Mutable fields of an item, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemFields {
    pub description: String,
    pub value: CanonicalValue,
    pub recipient: String,
    pub notes: String,
    pub photos: Vec<String>,
}

impl Item {
    pub(crate) fn new(id: ItemId, fields: ItemFields, date_added: NaiveDate) -> Self {
        Self {
            id,
            description: fields.description,
            value: fields.value,
            recipient: fields.recipient,
            notes: fields.notes,
            photos: fields.photos,
            date_added,
        }
    }

    /// Replace every mutable field; `id` and `date_added` are untouched.
    pub(crate) fn replace_fields(&mut self, fields: ItemFields) {
        self.description = fields.description;
        self.value = fields.value;
        self.recipient = fields.recipient;
        self.notes = fields.notes;
        self.photos = fields.photos;
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical value, e.g. `"1234.5"`.
    pub fn value(&self) -> &CanonicalValue {
        &self.value
    }

    /// Grouped value for display, e.g. `"1,234.5"`.
    pub fn display_value(&self) -> String {
        self.value.to_display()
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn date_added(&self) -> NaiveDate {
        self.date_added
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
