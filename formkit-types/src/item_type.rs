use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FormError;

/// Extra key holding newline-delimited options for choice items.
pub const OPTIONS_TEXT_KEY: &str = "optionsText";

/// Extra key holding the maximum placeholder length.
pub const PLACEHOLDER_MAX_LENGTH_KEY: &str = "placeholder.maxLength";

/// Placeholder length used when an item does not set one.
pub const DEFAULT_PLACEHOLDER_MAX_LENGTH: i64 = 50;

/// Extra key choosing between the default and a custom character count limit.
pub const COUNT_LIMIT_TYPE_KEY: &str = "countLimit.type";
pub const COUNT_LIMIT_MIN_KEY: &str = "countLimit.minLength";
pub const COUNT_LIMIT_MAX_KEY: &str = "countLimit.maxLength";

pub const COUNT_LIMIT_DEFAULT: &str = "default";
pub const COUNT_LIMIT_CUSTOM: &str = "custom";

/// The kind of a form item.
///
/// Serialized as its kebab-case identifier. The numeric codes `0..=3` are
/// accepted when reading, for records written by older editors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTypeId", into = "&'static str")]
pub enum FormItemType {
    #[default]
    SingleLineText,
    Radio,
    Checkbox,
    Select,
}

/// How the sub-editor for an extra field should be rendered and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraFieldKind {
    /// Free-form text, one option per line.
    Options,

    /// An integer with an optional read-side default.
    Int { default: Option<i64> },

    /// One value out of a fixed set.
    Choice {
        choices: &'static [&'static str],
        default: &'static str,
    },
}

/// Describes one type-specific configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraField {
    /// Dot-separated path into the item's `extra` map.
    pub path: &'static str,

    /// Label shown next to the sub-editor.
    pub label: &'static str,

    pub kind: ExtraFieldKind,
}

const OPTIONS_TEXT: ExtraField = ExtraField {
    path: OPTIONS_TEXT_KEY,
    label: "Options",
    kind: ExtraFieldKind::Options,
};

const PLACEHOLDER_MAX_LENGTH: ExtraField = ExtraField {
    path: PLACEHOLDER_MAX_LENGTH_KEY,
    label: "Placeholder length",
    kind: ExtraFieldKind::Int {
        default: Some(DEFAULT_PLACEHOLDER_MAX_LENGTH),
    },
};

const COUNT_LIMIT_TYPE: ExtraField = ExtraField {
    path: COUNT_LIMIT_TYPE_KEY,
    label: "Character limit",
    kind: ExtraFieldKind::Choice {
        choices: &[COUNT_LIMIT_DEFAULT, COUNT_LIMIT_CUSTOM],
        default: COUNT_LIMIT_DEFAULT,
    },
};

const COUNT_LIMIT_MIN: ExtraField = ExtraField {
    path: COUNT_LIMIT_MIN_KEY,
    label: "Minimum length",
    kind: ExtraFieldKind::Int { default: None },
};

const COUNT_LIMIT_MAX: ExtraField = ExtraField {
    path: COUNT_LIMIT_MAX_KEY,
    label: "Maximum length",
    kind: ExtraFieldKind::Int { default: None },
};

struct RegistryEntry {
    kind: FormItemType,
    id: &'static str,
    code: i64,
    label: &'static str,
    extra_fields: &'static [ExtraField],
}

static REGISTRY: [RegistryEntry; 4] = [
    RegistryEntry {
        kind: FormItemType::SingleLineText,
        id: "single-line-text",
        code: 0,
        label: "Single-line text",
        extra_fields: &[
            PLACEHOLDER_MAX_LENGTH,
            COUNT_LIMIT_TYPE,
            COUNT_LIMIT_MIN,
            COUNT_LIMIT_MAX,
        ],
    },
    RegistryEntry {
        kind: FormItemType::Radio,
        id: "radio",
        code: 1,
        label: "Radio",
        extra_fields: &[OPTIONS_TEXT],
    },
    RegistryEntry {
        kind: FormItemType::Checkbox,
        id: "checkbox",
        code: 2,
        label: "Checkbox",
        extra_fields: &[OPTIONS_TEXT],
    },
    RegistryEntry {
        kind: FormItemType::Select,
        id: "select",
        code: 3,
        label: "Select",
        extra_fields: &[OPTIONS_TEXT, PLACEHOLDER_MAX_LENGTH],
    },
];

impl FormItemType {
    /// All types, in the order they are offered to the user.
    pub const ALL: [FormItemType; 4] = [
        Self::SingleLineText,
        Self::Radio,
        Self::Checkbox,
        Self::Select,
    ];

    fn entry(self) -> &'static RegistryEntry {
        let entry = match self {
            Self::SingleLineText => &REGISTRY[0],
            Self::Radio => &REGISTRY[1],
            Self::Checkbox => &REGISTRY[2],
            Self::Select => &REGISTRY[3],
        };
        debug_assert_eq!(entry.kind, self);
        entry
    }

    /// The stable identifier, e.g. `"single-line-text"`.
    pub fn id(self) -> &'static str {
        self.entry().id
    }

    /// The legacy numeric code.
    pub fn code(self) -> i64 {
        self.entry().code
    }

    /// The display label.
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// The extra fields this type accepts, in display order.
    pub fn extra_fields(self) -> &'static [ExtraField] {
        self.entry().extra_fields
    }

    /// Look up the descriptor for an extra key, if this type declares it.
    pub fn extra_field(self, path: &str) -> Option<&'static ExtraField> {
        self.extra_fields().iter().find(|field| field.path == path)
    }

    /// Check whether items of this type carry a list of options.
    pub fn has_options(self) -> bool {
        self.extra_field(OPTIONS_TEXT_KEY).is_some()
    }

    /// Resolve a legacy numeric code.
    pub fn from_code(code: i64) -> Result<Self, FormError> {
        REGISTRY
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.kind)
            .ok_or_else(|| FormError::InvalidType(code.to_string()))
    }
}

impl FromStr for FormItemType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|entry| entry.id == s)
            .map(|entry| entry.kind)
            .ok_or_else(|| FormError::InvalidType(s.to_string()))
    }
}

impl fmt::Display for FormItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<FormItemType> for &'static str {
    fn from(kind: FormItemType) -> Self {
        kind.id()
    }
}

/// Type identifier as it appears in stored JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeId {
    Code(i64),
    Name(String),
}

impl TryFrom<RawTypeId> for FormItemType {
    type Error = FormError;

    fn try_from(raw: RawTypeId) -> Result<Self, Self::Error> {
        match raw {
            RawTypeId::Code(code) => Self::from_code(code),
            RawTypeId::Name(name) => name.parse(),
        }
    }
}

/// Get the display label for a type identifier.
pub fn label_of(type_id: &str) -> Result<&'static str, FormError> {
    type_id.parse::<FormItemType>().map(FormItemType::label)
}

/// Get the extra-field descriptors for a type identifier.
pub fn extra_fields_of(type_id: &str) -> Result<&'static [ExtraField], FormError> {
    type_id
        .parse::<FormItemType>()
        .map(FormItemType::extra_fields)
}
