//! Working (uncommitted) form of an item used while composing or editing.

use serde::{Deserialize, Serialize};

use estate_core::{DomainError, DomainResult};
use estate_formatting::{CanonicalValue, normalize_currency_input};

use crate::item::{Item, ItemFields};

/// Draft mirroring [`Item`]'s editable fields plus a pending photo URL.
///
/// `value` holds whatever the user typed (grouped or not); it is normalized
/// when the draft is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub description: String,
    pub value: String,
    pub recipient: String,
    pub notes: String,
    pub photos: Vec<String>,
    pub pending_photo_url: String,
}

impl ItemDraft {
    pub fn new(description: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Load an existing item for editing, with its value grouped for display.
    pub fn from_item(item: &Item) -> Self {
        Self {
            description: item.description().to_string(),
            value: item.display_value(),
            recipient: item.recipient().to_string(),
            notes: item.notes().to_string(),
            photos: item.photos().to_vec(),
            pending_photo_url: String::new(),
        }
    }

    /// Store raw keyboard input as its grouped display form.
    pub fn set_value(&mut self, raw: &str) {
        self.value = normalize_currency_input(raw);
    }

    /// Move the pending photo URL onto the photo list.
    ///
    /// Returns `false` (and changes nothing) when no URL is pending.
    pub fn add_pending_photo(&mut self) -> bool {
        if self.pending_photo_url.is_empty() {
            return false;
        }
        let url = std::mem::take(&mut self.pending_photo_url);
        self.photos.push(url);
        true
    }

    /// Remove the photo at `index`; out-of-range indices are ignored.
    pub fn remove_photo(&mut self, index: usize) -> Option<String> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate required fields and fold the pending photo into `photos`.
    ///
    /// Does not mutate the draft; a rejected draft can be corrected and
    /// committed again.
    pub(crate) fn to_fields(&self) -> DomainResult<ItemFields> {
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description is required"));
        }
        if self.value.trim().is_empty() {
            return Err(DomainError::validation("value is required"));
        }
        let value = CanonicalValue::parse(&self.value)?;

        let mut photos = self.photos.clone();
        if !self.pending_photo_url.is_empty() {
            photos.push(self.pending_photo_url.clone());
        }

        Ok(ItemFields {
            description: self.description.clone(),
            value,
            recipient: self.recipient.clone(),
            notes: self.notes.clone(),
            photos,
        })
    }
}
