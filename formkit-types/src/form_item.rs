use serde::{Deserialize, Serialize};

use crate::{
    COUNT_LIMIT_CUSTOM, COUNT_LIMIT_MAX_KEY, COUNT_LIMIT_MIN_KEY, COUNT_LIMIT_TYPE_KEY,
    DEFAULT_PLACEHOLDER_MAX_LENGTH, Extra, FieldPath, FormError, FormItemType, OPTIONS_TEXT_KEY,
    PLACEHOLDER_MAX_LENGTH_KEY,
};

/// One field of a form definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormItem {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FormItemType,

    pub visible: bool,

    pub required: bool,

    /// Type-specific configuration. `private` is the key older editors used.
    #[serde(default, alias = "private", skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl FormItem {
    /// Build a complete item from partial input.
    ///
    /// Absent fields take the defaults `name = ""`, `type = single-line-text`,
    /// `visible = true`, `required = true`. Both new items and edits go
    /// through here.
    pub fn from_patch(patch: FormItemPatch) -> Self {
        Self {
            name: patch.name.unwrap_or_default(),
            kind: patch.kind.unwrap_or_default(),
            visible: patch.visible.unwrap_or(true),
            required: patch.required.unwrap_or(true),
            extra: patch.extra,
        }
    }

    /// Create an item of the given type with default flags.
    pub fn new(name: impl Into<String>, kind: FormItemType) -> Self {
        Self::from_patch(FormItemPatch::new().name(name).kind(kind))
    }

    /// Builder-style extra field insert.
    pub fn with_extra(
        mut self,
        path: impl Into<FieldPath>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extra.get_or_insert_with(Extra::new).insert(path, value);
        self
    }

    /// The display label of this item's type.
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    /// The options of a radio, checkbox or select item, one per non-blank line.
    ///
    /// Empty for types without options or when `optionsText` is unset.
    pub fn options(&self) -> Vec<&str> {
        if !self.kind.has_options() {
            return Vec::new();
        }
        self.extra
            .as_ref()
            .and_then(|extra| extra.get_str(&FieldPath::new(OPTIONS_TEXT_KEY)).ok())
            .map(|text| {
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Maximum placeholder length, falling back to the registry default.
    pub fn placeholder_max_length(&self) -> i64 {
        self.extra
            .as_ref()
            .and_then(|extra| {
                extra
                    .get_int(&FieldPath::new(PLACEHOLDER_MAX_LENGTH_KEY))
                    .ok()
            })
            .unwrap_or(DEFAULT_PLACEHOLDER_MAX_LENGTH)
    }

    /// The custom character count limit `(min, max)` of a single-line text item.
    ///
    /// `None` unless `countLimit.type` is `custom`.
    pub fn custom_count_limit(&self) -> Option<(Option<i64>, Option<i64>)> {
        if self.kind != FormItemType::SingleLineText {
            return None;
        }
        let extra = self.extra.as_ref()?;
        let limit_type = extra.get_str(&FieldPath::new(COUNT_LIMIT_TYPE_KEY)).ok()?;
        if limit_type != COUNT_LIMIT_CUSTOM {
            return None;
        }
        let min = extra.get_int(&FieldPath::new(COUNT_LIMIT_MIN_KEY)).ok();
        let max = extra.get_int(&FieldPath::new(COUNT_LIMIT_MAX_KEY)).ok();
        Some((min, max))
    }
}

impl Default for FormItem {
    fn default() -> Self {
        Self::from_patch(FormItemPatch::default())
    }
}

/// Partial form item input: from the add dialog, an edit, or a toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FormItemType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(alias = "private", skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl FormItemPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: FormItemType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the type from a raw identifier, failing on unknown types.
    pub fn type_id(self, type_id: &str) -> Result<Self, FormError> {
        Ok(self.kind(type_id.parse()?))
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn extra(mut self, extra: Extra) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Overlay `other` on top of this patch.
    ///
    /// Fields present in `other` win. `extra` is replaced as a whole.
    pub fn overlay(self, other: FormItemPatch) -> Self {
        Self {
            name: other.name.or(self.name),
            kind: other.kind.or(self.kind),
            visible: other.visible.or(self.visible),
            required: other.required.or(self.required),
            extra: other.extra.or(self.extra),
        }
    }
}

impl From<FormItem> for FormItemPatch {
    fn from(item: FormItem) -> Self {
        Self {
            name: Some(item.name),
            kind: Some(item.kind),
            visible: Some(item.visible),
            required: Some(item.required),
            extra: item.extra,
        }
    }
}

impl From<&FormItem> for FormItemPatch {
    fn from(item: &FormItem) -> Self {
        item.clone().into()
    }
}
