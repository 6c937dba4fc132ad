//! Field kinds and the coercion of captured text into typed fields.
//!
//! The set of supported kinds is closed. Anything outside of it binds to
//! [`FieldSlot::Unsupported`], which accepts every value and writes nothing.

use serde::{Deserialize, Serialize};

use crate::error::CoercionError;

/// The declared type of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FieldKind {
    #[default]
    Text,
    Integer,
    Boolean,
    Float,
    OptionalText,
    OptionalInteger,
    OptionalBoolean,
    OptionalFloat,
    Unsupported,
}

impl FieldKind {
    /// Get the string representation for error messages.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::OptionalText => "optional text",
            Self::OptionalInteger => "optional integer",
            Self::OptionalBoolean => "optional boolean",
            Self::OptionalFloat => "optional float",
            Self::Unsupported => "unsupported",
        }
    }

    /// Parse a config name; anything unknown is [`FieldKind::Unsupported`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "text" => Self::Text,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "float" => Self::Float,
            "optional_text" => Self::OptionalText,
            "optional_integer" => Self::OptionalInteger,
            "optional_boolean" => Self::OptionalBoolean,
            "optional_float" => Self::OptionalFloat,
            _ => Self::Unsupported,
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(
            self,
            Self::OptionalText | Self::OptionalInteger | Self::OptionalBoolean | Self::OptionalFloat
        )
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutable borrow of one field of a destination record.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Text(&'a mut String),
    Integer(&'a mut i64),
    Boolean(&'a mut bool),
    Float(&'a mut f64),
    OptionalText(&'a mut Option<String>),
    OptionalInteger(&'a mut Option<i64>),
    OptionalBoolean(&'a mut Option<bool>),
    OptionalFloat(&'a mut Option<f64>),
    Unsupported,
}

/// What [`FieldSlot::store`] did with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stored {
    /// The field now holds the coerced value.
    Written,
    /// Optional field, empty capture: the field was not touched.
    LeftAbsent,
    /// Unsupported kind: the field was not touched.
    Ignored,
}

impl FieldSlot<'_> {
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Float(_) => FieldKind::Float,
            Self::OptionalText(_) => FieldKind::OptionalText,
            Self::OptionalInteger(_) => FieldKind::OptionalInteger,
            Self::OptionalBoolean(_) => FieldKind::OptionalBoolean,
            Self::OptionalFloat(_) => FieldKind::OptionalFloat,
            Self::Unsupported => FieldKind::Unsupported,
        }
    }

    /// Coerce `value` into the field's type and write it.
    ///
    /// A non-optional field receiving an empty string is set to its zero
    /// value without running the parser. An optional field receiving an empty
    /// string keeps whatever it held; otherwise it becomes `Some(_)` only if
    /// coercion succeeds.
    pub fn store(self, value: &str) -> Result<Stored, CoercionError> {
        match self {
            Self::Text(cell) => value.clone_into(cell),
            Self::Integer(cell) => *cell = parse_integer(value)?,
            Self::Boolean(cell) => *cell = parse_boolean(value)?,
            Self::Float(cell) => *cell = parse_float(value)?,
            Self::OptionalText(cell) => return store_optional(cell, value, |v| Ok(v.to_owned())),
            Self::OptionalInteger(cell) => return store_optional(cell, value, parse_integer),
            Self::OptionalBoolean(cell) => return store_optional(cell, value, parse_boolean),
            Self::OptionalFloat(cell) => return store_optional(cell, value, parse_float),
            Self::Unsupported => return Ok(Stored::Ignored),
        }
        Ok(Stored::Written)
    }
}

fn store_optional<T>(
    cell: &mut Option<T>,
    value: &str,
    coerce: impl FnOnce(&str) -> Result<T, CoercionError>,
) -> Result<Stored, CoercionError> {
    if value.is_empty() {
        return Ok(Stored::LeftAbsent);
    }
    *cell = Some(coerce(value)?);
    Ok(Stored::Written)
}

fn parse_integer(value: &str) -> Result<i64, CoercionError> {
    if value.is_empty() {
        return Ok(0);
    }
    Ok(value.parse::<i64>()?)
}

fn parse_float(value: &str) -> Result<f64, CoercionError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    if let Some(parsed) = parse_hex_float(value) {
        return Ok(parsed);
    }
    Ok(value.parse::<f64>()?)
}

/// Hexadecimal float literal such as `0x1.8p3` or `-0X1P-2`. The binary
/// exponent is required.
fn parse_hex_float(value: &str) -> Option<f64> {
    let (negative, unsigned) = match value.as_bytes().first()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))?;
    let (mantissa, exponent) = digits.split_once(['p', 'P'])?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut result = 0.0_f64;
    for c in whole.chars().chain(fraction.chars()) {
        result = result.mul_add(16.0, f64::from(c.to_digit(16)?));
    }
    let fraction_bits = i32::try_from(fraction.len()).ok()?.checked_mul(4)?;
    let exponent = exponent.parse::<i32>().ok()?.checked_sub(fraction_bits)?;
    let result = result * 2.0_f64.powi(exponent);
    Some(if negative { -result } else { result })
}

fn parse_boolean(value: &str) -> Result<bool, CoercionError> {
    match value {
        "" => Ok(false),
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(CoercionError::Boolean(other.to_string())),
    }
}

/// Rust types that can be the target of a binding.
pub trait FieldType {
    fn slot(&mut self) -> FieldSlot<'_>;
}

impl FieldType for String {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Text(self)
    }
}

impl FieldType for i64 {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Integer(self)
    }
}

impl FieldType for bool {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Boolean(self)
    }
}

impl FieldType for f64 {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Float(self)
    }
}

impl FieldType for Option<String> {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::OptionalText(self)
    }
}

impl FieldType for Option<i64> {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::OptionalInteger(self)
    }
}

impl FieldType for Option<bool> {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::OptionalBoolean(self)
    }
}

impl FieldType for Option<f64> {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::OptionalFloat(self)
    }
}

// Containers are accepted as binding targets but never written.
impl<T> FieldType for Vec<T> {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Unsupported
    }
}
