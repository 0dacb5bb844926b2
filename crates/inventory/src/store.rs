//! In-memory, insertion-ordered inventory store.

use chrono::{Local, NaiveDate};

use estate_core::{DomainResult, Entity, ItemId};

use crate::draft::ItemDraft;
use crate::item::Item;

/// Owns the ordered collection of estate items.
///
/// Every mutating operation is all-or-nothing: a rejected draft or an
/// unknown id leaves the collection exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<Item>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a draft as a new item dated today (local time).
    pub fn create_item(&mut self, draft: &ItemDraft) -> DomainResult<ItemId> {
        self.create_item_on(draft, Local::now().date_naive())
    }

    /// Commit a draft as a new item with an explicit `date_added`.
    ///
    /// The item is appended to the end of the collection.
    pub fn create_item_on(&mut self, draft: &ItemDraft, date_added: NaiveDate) -> DomainResult<ItemId> {
        let fields = draft.to_fields().inspect_err(|err| {
            tracing::debug!(error = %err, "rejected new item draft");
        })?;

        let id = ItemId::new();
        self.items.push(Item::new(id, fields, date_added));

        tracing::debug!(item_id = %id, count = self.items.len(), "item created");
        Ok(id)
    }

    /// Replace every field of item `id` except its identity and `date_added`.
    ///
    /// The item keeps its position. Returns `Ok(false)` if no item matches.
    pub fn update_item(&mut self, id: ItemId, draft: &ItemDraft) -> DomainResult<bool> {
        let fields = draft.to_fields().inspect_err(|err| {
            tracing::debug!(item_id = %id, error = %err, "rejected item edit");
        })?;

        match self.items.iter_mut().find(|item| *item.id() == id) {
            Some(item) => {
                item.replace_fields(fields);
                tracing::debug!(item_id = %id, "item updated");
                Ok(true)
            }
            None => {
                tracing::debug!(item_id = %id, "update ignored: unknown item");
                Ok(false)
            }
        }
    }

    /// Remove item `id`, returning it. Unknown ids are a no-op.
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| *item.id() == id)?;
        let removed = self.items.remove(pos);
        tracing::debug!(item_id = %id, count = self.items.len(), "item deleted");
        Some(removed)
    }

    /// Items in insertion order.
    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    /// Owned copy of the current collection, e.g. for export.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| *item.id() == id)
    }

    /// Draft pre-filled from item `id` for editing (value grouped for display).
    pub fn edit_draft(&self, id: ItemId) -> Option<ItemDraft> {
        self.get(id).map(ItemDraft::from_item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::DomainError;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    fn store_with(descriptions: &[&str]) -> (InventoryStore, Vec<ItemId>) {
        let mut store = InventoryStore::new();
        let ids = descriptions
            .iter()
            .map(|d| store.create_item_on(&ItemDraft::new(*d, "100"), test_date()).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn create_appends_item_with_canonical_value() {
        let mut store = InventoryStore::new();
        let id = store.create_item(&ItemDraft::new("Watch", "1234.5")).unwrap();

        let items = store.list_items();
        assert_eq!(items.len(), 1);
        assert_eq!(*items[0].id(), id);
        assert_eq!(items[0].value().as_str(), "1234.5");
        assert_eq!(items[0].display_value(), "1,234.5");
        assert_eq!(items[0].date_added(), Local::now().date_naive());
    }

    #[test]
    fn create_strips_grouping_from_typed_value() {
        let mut store = InventoryStore::new();
        let mut draft = ItemDraft::default();
        draft.description = "Car".to_string();
        draft.set_value("15000");
        assert_eq!(draft.value, "15,000");

        let id = store.create_item_on(&draft, test_date()).unwrap();
        assert_eq!(store.get(id).unwrap().value().as_str(), "15000");
    }

    #[test]
    fn create_folds_pending_photo() {
        let mut store = InventoryStore::new();
        let mut draft = ItemDraft::new("Painting", "500");
        draft.photos = vec!["https://example.com/1.jpg".to_string()];
        draft.pending_photo_url = "https://example.com/2.jpg".to_string();

        let id = store.create_item_on(&draft, test_date()).unwrap();
        assert_eq!(
            store.get(id).unwrap().photos(),
            ["https://example.com/1.jpg", "https://example.com/2.jpg"]
        );
    }

    #[test]
    fn create_rejects_missing_fields_without_mutation() {
        let mut store = InventoryStore::new();
        let err = store.create_item(&ItemDraft::new("", "10")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = store.create_item(&ItemDraft::new("Lamp", "")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_removes_only_the_matching_item() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);

        let removed = store.delete_item(ids[1]).unwrap();
        assert_eq!(removed.description(), "b");

        let remaining: Vec<_> = store.list_items().iter().map(|i| i.id_typed()).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let (mut store, _) = store_with(&["a"]);
        assert!(store.delete_item(ItemId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_then_delete_leaves_empty_collection() {
        let mut store = InventoryStore::new();
        let id = store.create_item(&ItemDraft::new("Watch", "1234.5")).unwrap();
        store.delete_item(id);
        assert!(store.list_items().is_empty());
    }

    #[test]
    fn update_preserves_position_and_date_added() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);

        let mut draft = ItemDraft::new("b2", "2,500.75");
        draft.recipient = "Sam".to_string();
        draft.notes = "attic".to_string();
        draft.pending_photo_url = "https://example.com/b.jpg".to_string();

        assert!(store.update_item(ids[1], &draft).unwrap());

        let items = store.list_items();
        assert_eq!(items[1].id_typed(), ids[1]);
        assert_eq!(items[1].date_added(), test_date());
        assert_eq!(items[1].description(), "b2");
        assert_eq!(items[1].value().as_str(), "2500.75");
        assert_eq!(items[1].recipient(), "Sam");
        assert_eq!(items[1].notes(), "attic");
        assert_eq!(items[1].photos(), ["https://example.com/b.jpg"]);
        assert_eq!(items[0].description(), "a");
        assert_eq!(items[2].description(), "c");
    }

    #[test]
    fn update_with_invalid_draft_leaves_item_untouched() {
        let (mut store, ids) = store_with(&["a"]);
        let before = store.snapshot();

        assert!(store.update_item(ids[0], &ItemDraft::new("", "5")).is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let (mut store, _) = store_with(&["a"]);
        let before = store.snapshot();

        assert!(!store.update_item(ItemId::new(), &ItemDraft::new("x", "1")).unwrap());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn edit_draft_round_trips_through_update() {
        let (mut store, ids) = store_with(&["a"]);
        let mut draft = store.edit_draft(ids[0]).unwrap();
        assert_eq!(draft.value, "100");

        draft.set_value("1234567");
        assert_eq!(draft.value, "1,234,567");
        store.update_item(ids[0], &draft).unwrap();

        assert_eq!(store.get(ids[0]).unwrap().value().as_str(), "1234567");
        assert!(store.edit_draft(ItemId::new()).is_none());
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let (mut store, ids) = store_with(&["a"]);
        let snapshot = store.snapshot();
        store.delete_item(ids[0]);
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a draft missing description or value never changes the collection.
        #[test]
        fn drafts_missing_required_fields_are_rejected(
            description in prop_oneof![Just(String::new()), "[a-z ]{1,12}"],
            value in prop_oneof![Just(String::new()), "[0-9]{1,6}"],
        ) {
            prop_assume!(description.trim().is_empty() || value.is_empty());

            let (mut store, _) = store_with(&["existing"]);
            let before = store.snapshot();

            prop_assert!(store.create_item(&ItemDraft::new(description, value)).is_err());
            prop_assert_eq!(store.snapshot(), before);
        }

        /// Property: ids handed out by create are unique across the session.
        #[test]
        fn created_ids_are_unique(count in 1usize..50, deletes in 0usize..10) {
            let mut store = InventoryStore::new();
            let mut seen = HashSet::new();

            for n in 0..count {
                let id = store.create_item_on(&ItemDraft::new(format!("item {n}"), "1"), test_date()).unwrap();
                prop_assert!(seen.insert(id));
                if n < deletes {
                    store.delete_item(id);
                }
            }
            prop_assert_eq!(seen.len(), count);
        }
    }
}
