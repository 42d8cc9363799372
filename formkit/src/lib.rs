//! # formkit
//!
//! Author dynamic form definitions and save them to a record store.
//!
//! A form has a name and an ordered list of items. Each item has one of four
//! types (single-line text, radio, checkbox, select), visible/required flags,
//! and type-specific configuration in its `extra` map.
//!
//! ## Usage
//!
//! ```rust
//! use formkit::{EditorSession, FormItemPatch, FormItemType, Extra, MemoryStore, RecordStore};
//!
//! let store = RecordStore::new(MemoryStore::new());
//! let mut session = EditorSession::new();
//! session.set_name("Feedback");
//!
//! session.open_add();
//! session
//!     .save_dialog(
//!         FormItemPatch::new()
//!             .name("Rating")
//!             .kind(FormItemType::Select)
//!             .extra(Extra::new().with("optionsText", "Good\nBad")),
//!     )
//!     .unwrap();
//!
//! let result = session.submit(&store);
//! assert!(result.success);
//! assert_eq!(result.id, Some(1));
//! ```
//!
//! ## Storage
//!
//! [`RecordStore`] keeps all records as one JSON array under a single key of
//! a [`KeyValueStore`]:
//! - [`MemoryStore`] - in-process, with an optional byte quota
//! - [`FileStore`] - one JSON file per key in a directory
//!
//! [`FormkitConfig`] picks one of them from a TOML file.

// Re-export all types from formkit-types
pub use formkit_types::*;

pub mod validation;
pub use validation::{validate, validate_item_input};

pub mod store;
pub use store::{DEFAULT_STORE_KEY, RecordStore, next_id};

mod memory;
pub use memory::MemoryStore;

mod file;
pub use file::FileStore;

mod session;
pub use session::{EditorSession, ItemDialog, ItemRow, SubmitResult};

mod config;
pub use config::{FormkitConfig, StorageBackend, StorageConfig};
