//! Checks run before a form or an item leaves the editor.
//!
//! Validation stops at the first violated field; nothing is submitted unless
//! the whole definition passes.

use crate::{FieldPath, FormDefinition, FormError, FormItem, FormItemPatch};

pub const FORM_NAME_MESSAGE: &str = "Please enter a form name";
pub const ITEM_NAME_MESSAGE: &str = "Please enter an item name";
pub const COUNT_LIMIT_MESSAGE: &str = "Minimum length must not exceed maximum length";

/// Validate a definition before it is handed to a store.
pub fn validate(definition: &FormDefinition) -> Result<(), FormError> {
    if is_blank(&definition.name) {
        return Err(FormError::user_input("name", FORM_NAME_MESSAGE));
    }

    let items = FieldPath::new("items");
    for (index, item) in definition.items.iter().enumerate() {
        validate_item(item, &items.index(index))?;
    }

    Ok(())
}

/// Validate the values of the add/edit dialog before they become an item.
pub fn validate_item_input(patch: &FormItemPatch) -> Result<(), FormError> {
    match patch.name.as_deref() {
        Some(name) if !is_blank(name) => Ok(()),
        _ => Err(FormError::user_input("name", ITEM_NAME_MESSAGE)),
    }
}

fn validate_item(item: &FormItem, prefix: &FieldPath) -> Result<(), FormError> {
    if is_blank(&item.name) {
        return Err(FormError::user_input(prefix.child("name"), ITEM_NAME_MESSAGE));
    }

    if let Some((Some(min), Some(max))) = item.custom_count_limit()
        && min > max
    {
        return Err(FormError::user_input(
            prefix.child("extra").child("countLimit"),
            COUNT_LIMIT_MESSAGE,
        ));
    }

    Ok(())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
