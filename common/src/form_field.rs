//! Typed configuration for form inputs.
//!
//! Each input is described by a [`FieldConfig`] whose [`FieldKind`] is one of a
//! closed set; the view layer renders a config without any caller-supplied
//! render logic and reports the edited value as a [`FieldValue`].

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    pub fn from_catalog(items: &[CatalogItem]) -> Vec<SelectOption> {
        items.iter().map(|item| SelectOption::new(item.id.to_string(), item.name.clone())).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text { max_len: Option<usize> },
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption>, max_selected: Option<usize> },
    /// Bounds are inclusive ISO-8601 dates.
    Date { min: Option<String>, max: Option<String> },
    /// `accept` holds MIME types or extensions, e.g. `image/png` or `.pdf`.
    File { accept: Vec<String>, multiple: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub kind: FieldKind,
}

impl FieldConfig {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), label: label.into(), placeholder: None, required: false, disabled: false, kind }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text { max_len: None })
    }

    pub fn select(name: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    pub fn multi_select(name: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::MultiSelect { options, max_selected: None })
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date { min: None, max: None })
    }

    pub fn file(name: impl Into<String>, label: impl Into<String>, accept: Vec<String>) -> Self {
        Self::new(name, label, FieldKind::File { accept, multiple: false })
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Select options, for both single and multi selects.
    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select { options } | FieldKind::MultiSelect { options, .. } => options,
            _ => &[],
        }
    }

    /// The value an input of this kind starts with.
    pub fn empty_value(&self) -> FieldValue {
        match &self.kind {
            FieldKind::MultiSelect { .. } => FieldValue::Many(Vec::new()),
            _ => FieldValue::Single(None),
        }
    }
}

/// Current value of a rendered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Single(Option<String>),
    Many(Vec<String>),
}

impl FieldValue {
    /// Single value with blank input normalized to `None`.
    pub fn single(&self) -> Option<String> {
        match self {
            FieldValue::Single(value) => value.clone().filter(|v| !v.trim().is_empty()),
            FieldValue::Many(_) => None,
        }
    }

    pub fn many(&self) -> &[String] {
        match self {
            FieldValue::Many(values) => values,
            FieldValue::Single(_) => &[],
        }
    }

    /// Adds or removes `value` from a multi-select, honoring `max_selected`.
    pub fn toggle(&mut self, value: &str, max_selected: Option<usize>) {
        let FieldValue::Many(values) = self else {
            *self = FieldValue::Many(vec![value.to_string()]);
            return;
        };
        if let Some(position) = values.iter().position(|v| v == value) {
            values.remove(position);
        } else if max_selected.is_none_or(|max| values.len() < max) {
            values.push(value.to_string());
        }
    }
}
