use serde::{Deserialize, Serialize};

use crate::{FormError, FormItem, FormItemPatch};

/// A form being authored: a name and an ordered list of items.
///
/// Editing operations never modify `self`; each returns the new definition
/// and the caller decides whether to keep it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,

    #[serde(default)]
    pub items: Vec<FormItem>,
}

impl FormDefinition {
    /// Create a definition with the given name and no items.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Create an empty definition.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the items.
    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    /// Get the item at `index`.
    pub fn item(&self, index: usize) -> Result<&FormItem, FormError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Check if the form has any items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return a copy with the form name replaced.
    pub fn set_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: self.items.clone(),
        }
    }

    /// Return a copy with `item` appended.
    pub fn add_item(&self, item: FormItem) -> Self {
        tracing::debug!(item = %item.name, kind = %item.kind, "adding form item");
        let mut next = self.clone();
        next.items.push(item);
        next
    }

    /// Return a copy with `patch` merged into the item at `index`.
    pub fn update_item(&self, index: usize, patch: FormItemPatch) -> Result<Self, FormError> {
        self.check_index(index)?;
        tracing::debug!(index, "updating form item");
        let mut next = self.clone();
        let merged = FormItemPatch::from(&self.items[index]).overlay(patch);
        next.items[index] = FormItem::from_patch(merged);
        Ok(next)
    }

    /// Return a copy without the item at `index`.
    pub fn remove_item(&self, index: usize) -> Result<Self, FormError> {
        self.check_index(index)?;
        tracing::debug!(index, "removing form item");
        let mut next = self.clone();
        next.items.remove(index);
        Ok(next)
    }

    /// Return a copy with the item's visibility set.
    pub fn set_visible(&self, index: usize, visible: bool) -> Result<Self, FormError> {
        self.update_item(index, FormItemPatch::new().visible(visible))
    }

    /// Return a copy with the item's required flag set.
    pub fn set_required(&self, index: usize, required: bool) -> Result<Self, FormError> {
        self.update_item(index, FormItemPatch::new().required(required))
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.items.len() {
            return Ok(());
        }
        tracing::warn!(index, len = self.items.len(), "form item index out of range");
        Err(FormError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }
}

/// A saved form definition with its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFormRecord {
    pub id: u64,

    #[serde(flatten)]
    pub definition: FormDefinition,
}

impl StoredFormRecord {
    pub fn new(id: u64, definition: FormDefinition) -> Self {
        Self { id, definition }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormItemType;
    use serde_json::json;

    fn sample() -> FormDefinition {
        FormDefinition::new("Survey")
            .add_item(FormItem::new("Name", FormItemType::SingleLineText))
            .add_item(FormItem::new("Colour", FormItemType::Radio))
            .add_item(FormItem::new("Size", FormItemType::Select))
    }

    #[test]
    fn add_item_appends() {
        let before = sample();
        let item = FormItem::new("Extra", FormItemType::Checkbox);
        let after = before.add_item(item.clone());

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after.items[..before.len()], before.items());
        assert_eq!(after.items.last(), Some(&item));
    }

    #[test]
    fn update_item_merges_patch() {
        let before = sample();
        let after = before
            .update_item(1, FormItemPatch::new().name("Favourite colour"))
            .unwrap();

        assert_eq!(after.items[1].name, "Favourite colour");
        assert_eq!(after.items[1].kind, FormItemType::Radio);
        assert_eq!(before.items[1].name, "Colour");
    }

    #[test]
    fn toggles_patch_one_flag() {
        let state = sample().set_visible(0, false).unwrap();
        let state = state.set_required(2, false).unwrap();

        assert!(!state.items[0].visible);
        assert!(state.items[0].required);
        assert!(state.items[2].visible);
        assert!(!state.items[2].required);
    }

    #[test]
    fn remove_item_keeps_order() {
        let state = sample().remove_item(1).unwrap();
        let names: Vec<_> = state.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Size"]);
    }

    #[test]
    fn out_of_range_leaves_state_alone() {
        let state = sample();
        let len = state.len();

        let err = state.remove_item(len).unwrap_err();
        assert!(matches!(err, FormError::IndexOutOfRange { index, len: 3 } if index == len));
        assert!(state.update_item(7, FormItemPatch::new()).is_err());
        assert!(state.set_visible(3, true).is_err());
        assert!(FormDefinition::empty().item(0).is_err());
        assert_eq!(state, sample());
    }

    #[test]
    fn set_name_keeps_items() {
        let renamed = sample().set_name("Renamed");
        assert_eq!(renamed.name, "Renamed");
        assert_eq!(renamed.items, sample().items);
    }

    #[test]
    fn stored_record_is_flat() {
        let record = StoredFormRecord::new(4, FormDefinition::new("Empty"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "id": 4, "name": "Empty", "items": [] })
        );
    }
}
