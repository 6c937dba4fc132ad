#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Declarative extraction of named regex capture groups into typed records.

pub mod binder;
pub mod descriptor;
mod error;
pub mod field;
pub mod pattern;
pub mod record;
mod registry;

pub use binder::{bind, bind_with};
pub use descriptor::{Binding, Capture, Descriptor, DescriptorBuilder};
pub use error::{CoercionError, Error, Result};
pub use field::{FieldKind, FieldSlot, FieldType, Stored};
pub use pattern::{CaptureTable, Pattern, PatternOptions};
pub use record::{DynamicRecord, FieldSpec, FieldValue};
pub use registry::Registry;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

/// Match `text` against `pattern` and bind the named groups into `destination`.
///
/// Empty `pattern`, empty `text` or a `None` destination returns `Ok(())`
/// without doing anything.
pub fn parse<'a, T: Capture + 'a>(
    pattern: &str,
    text: &str,
    destination: impl Into<Option<&'a mut T>>,
) -> Result<()> {
    let Some(destination) = destination.into() else {
        return Ok(());
    };
    if pattern.is_empty() || text.is_empty() {
        return Ok(());
    }
    Pattern::new(pattern)?.parse(text, destination)
}
