//! Core types for the formkit crate.
//!
//! This crate provides the foundational types for authoring forms:
//! - `FormItemType` - The registry of item types, their labels and extra fields
//! - `FormItem` and `FormItemPatch` - Individual fields and partial input
//! - `FormDefinition` - The form being edited, with pure editing operations
//! - `Extra` and `FieldPath` - Type-specific configuration and path-based keys
//! - `FormStore` and `KeyValueStore` traits - Ports for persistence

mod field_path;
pub use field_path::FieldPath;

mod extra;
pub use extra::{Extra, ExtraError};

mod item_type;
pub use item_type::{
    COUNT_LIMIT_CUSTOM, COUNT_LIMIT_DEFAULT, COUNT_LIMIT_MAX_KEY, COUNT_LIMIT_MIN_KEY,
    COUNT_LIMIT_TYPE_KEY, DEFAULT_PLACEHOLDER_MAX_LENGTH, ExtraField, ExtraFieldKind,
    FormItemType, OPTIONS_TEXT_KEY, PLACEHOLDER_MAX_LENGTH_KEY, extra_fields_of, label_of,
};

mod form_item;
pub use form_item::{FormItem, FormItemPatch};

mod form_definition;
pub use form_definition::{FormDefinition, StoredFormRecord};

mod error;
pub use error::{FormError, StorageError};

mod traits;
pub use traits::{FormStore, KeyValueStore};
