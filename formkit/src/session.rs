//! The form editing workflow behind an admin page.
//!
//! An [`EditorSession`] owns one [`FormDefinition`] plus the state of the
//! add/edit item dialog, and turns page actions into editor operations. A UI
//! layer renders [`EditorSession::rows`] as the item table and
//! [`EditorSession::dialog_values`] into the dialog.

use serde::{Deserialize, Serialize};

use crate::validation::{validate, validate_item_input};
use crate::{FormDefinition, FormError, FormItem, FormItemPatch, FormStore};

/// Which item the dialog is editing, if it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDialog {
    /// Adding a new item.
    Add,
    /// Editing the item at this index.
    Edit(usize),
}

/// One row of the item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub type_label: &'static str,
    pub visible: bool,
    pub required: bool,
}

/// Outcome of a submission, as reported to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub success: bool,
    pub error: Option<String>,
    /// Field the error belongs to, for user input errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub id: Option<u64>,
}

impl SubmitResult {
    fn saved(id: u64) -> Self {
        Self {
            success: true,
            error: None,
            field: None,
            id: Some(id),
        }
    }

    fn failed(err: &FormError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
            field: err.field().map(|field| field.to_string()),
            id: None,
        }
    }
}

/// Editing state for one form.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    form: FormDefinition,
    dialog: Option<ItemDialog>,
}

impl EditorSession {
    /// Start with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue editing an existing definition.
    pub fn from_definition(form: FormDefinition) -> Self {
        Self { form, dialog: None }
    }

    /// The form as currently edited.
    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form = self.form.set_name(name);
    }

    // === Item dialog ===

    /// The dialog state, `None` when closed.
    pub fn dialog(&self) -> Option<ItemDialog> {
        self.dialog
    }

    /// Open the dialog for a new item.
    pub fn open_add(&mut self) {
        self.dialog = Some(ItemDialog::Add);
    }

    /// Open the dialog for the item at `index`.
    pub fn open_edit(&mut self, index: usize) -> Result<(), FormError> {
        self.form.item(index)?;
        self.dialog = Some(ItemDialog::Edit(index));
        Ok(())
    }

    /// Close the dialog and drop whatever was entered.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    /// Values to pre-fill the dialog with: the defaults when adding, the
    /// item when editing. `None` when the dialog is closed.
    pub fn dialog_values(&self) -> Option<FormItem> {
        match self.dialog? {
            ItemDialog::Add => Some(FormItem::default()),
            ItemDialog::Edit(index) => self.form.items.get(index).cloned(),
        }
    }

    /// Confirm the dialog with the entered values.
    ///
    /// On a validation error the dialog stays open and the form is unchanged.
    /// Fails with [`FormError::NoDialog`] when no dialog is open.
    pub fn save_dialog(&mut self, values: FormItemPatch) -> Result<(), FormError> {
        let Some(dialog) = self.dialog else {
            tracing::warn!("item dialog confirmed while closed");
            return Err(FormError::NoDialog);
        };
        validate_item_input(&values)?;

        self.form = match dialog {
            ItemDialog::Add => self.form.add_item(FormItem::from_patch(values)),
            ItemDialog::Edit(index) => self.form.update_item(index, values)?,
        };
        self.dialog = None;
        Ok(())
    }

    // === Table actions ===

    /// Rows for the item table, in item order.
    pub fn rows(&self) -> Vec<ItemRow> {
        self.form
            .items
            .iter()
            .map(|item| ItemRow {
                name: item.name.clone(),
                type_label: item.type_label(),
                visible: item.visible,
                required: item.required,
            })
            .collect()
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), FormError> {
        self.form = self.form.set_visible(index, visible)?;
        Ok(())
    }

    pub fn set_required(&mut self, index: usize, required: bool) -> Result<(), FormError> {
        self.form = self.form.set_required(index, required)?;
        Ok(())
    }

    /// Delete the item at `index`. An open dialog is closed, since its
    /// index may no longer point at the same item.
    pub fn remove_item(&mut self, index: usize) -> Result<(), FormError> {
        self.form = self.form.remove_item(index)?;
        self.dialog = None;
        Ok(())
    }

    // === Submission ===

    /// Validate the form and append it to `store`.
    ///
    /// On success the session is reset to an empty form. On failure the
    /// error message is returned and every edit is kept so the user can retry.
    pub fn submit(&mut self, store: &dyn FormStore) -> SubmitResult {
        match self.try_submit(store) {
            Ok(id) => {
                *self = Self::new();
                SubmitResult::saved(id)
            }
            Err(err) if err.is_user_input() => {
                tracing::debug!(error = %err, "form submission rejected");
                SubmitResult::failed(&err)
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submission failed");
                SubmitResult::failed(&err)
            }
        }
    }

    /// Like [`submit`](Self::submit) but returns the error itself and leaves
    /// the session untouched either way.
    pub fn try_submit(&self, store: &dyn FormStore) -> Result<u64, FormError> {
        validate(&self.form)?;
        Ok(store.save(&self.form)?)
    }
}
