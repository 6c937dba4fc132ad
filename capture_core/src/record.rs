//! Records whose fields are described at runtime, e.g. from a config file.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::binder::bind_field;
use crate::error::Result;
use crate::field::{FieldKind, FieldSlot};
use crate::pattern::CaptureTable;

/// Runtime description of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Capture group feeding this field. Defaults to the field name.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            group: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn group(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.name)
    }
}

/// An owned field value of one of the supported kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
    OptionalText(Option<String>),
    OptionalInteger(Option<i64>),
    OptionalBoolean(Option<bool>),
    OptionalFloat(Option<f64>),
    Unsupported,
}

impl FieldValue {
    /// The zero value for `kind`; optional kinds start absent.
    #[must_use]
    pub const fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::Integer => Self::Integer(0),
            FieldKind::Boolean => Self::Boolean(false),
            FieldKind::Float => Self::Float(0.0),
            FieldKind::OptionalText => Self::OptionalText(None),
            FieldKind::OptionalInteger => Self::OptionalInteger(None),
            FieldKind::OptionalBoolean => Self::OptionalBoolean(None),
            FieldKind::OptionalFloat => Self::OptionalFloat(None),
            FieldKind::Unsupported => Self::Unsupported,
        }
    }

    pub fn slot(&mut self) -> FieldSlot<'_> {
        match self {
            Self::Text(v) => FieldSlot::Text(v),
            Self::Integer(v) => FieldSlot::Integer(v),
            Self::Boolean(v) => FieldSlot::Boolean(v),
            Self::Float(v) => FieldSlot::Float(v),
            Self::OptionalText(v) => FieldSlot::OptionalText(v),
            Self::OptionalInteger(v) => FieldSlot::OptionalInteger(v),
            Self::OptionalBoolean(v) => FieldSlot::OptionalBoolean(v),
            Self::OptionalFloat(v) => FieldSlot::OptionalFloat(v),
            Self::Unsupported => FieldSlot::Unsupported,
        }
    }
}

/// A record built from [`FieldSpec`]s, zero-initialised.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    fields: Vec<(FieldSpec, FieldValue)>,
}

impl DynamicRecord {
    #[must_use]
    pub fn new(specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        Self {
            fields: specs
                .into_iter()
                .map(|spec| {
                    let value = FieldValue::zero(spec.kind);
                    (spec, value)
                })
                .collect(),
        }
    }

    /// Bind `table` into the fields in declaration order.
    pub fn bind(&mut self, table: &CaptureTable) -> Result<()> {
        for (spec, value) in &mut self.fields {
            bind_field(table, &spec.name, spec.group(), value.slot())?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(spec, value)| (spec.name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for DynamicRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
