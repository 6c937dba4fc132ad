//! Route capture table values into record fields.
//!
//! Binding policy:
//! - a field whose group name is empty, or names a group missing from the
//!   table, is left untouched (an unmatched pattern therefore changes nothing);
//! - unsupported field kinds accept any value and are never written;
//! - the first coercion failure ends the call, and fields already written keep
//!   their new values.

use tracing::{debug, trace};

use crate::descriptor::{Capture, Descriptor};
use crate::error::{Error, Result};
use crate::field::{FieldSlot, Stored};
use crate::pattern::CaptureTable;

/// Bind `table` into `record` using the record's own descriptor.
pub fn bind<T: Capture>(table: &CaptureTable, record: &mut T) -> Result<()> {
    bind_with(table, T::descriptor(), record)
}

/// Bind `table` into `record` using an explicit descriptor.
pub fn bind_with<T>(table: &CaptureTable, descriptor: &Descriptor<T>, record: &mut T) -> Result<()> {
    for binding in descriptor.bindings() {
        bind_field(table, binding.field(), binding.group(), binding.slot(record))?;
    }
    Ok(())
}

pub(crate) fn bind_field(
    table: &CaptureTable,
    field: &str,
    group: &str,
    slot: FieldSlot<'_>,
) -> Result<()> {
    if group.is_empty() {
        trace!("Field '{field}' has no group, skipping");
        return Ok(());
    }
    let Some(value) = table.get(group) else {
        trace!("Group '{group}' not captured, leaving field '{field}'");
        return Ok(());
    };

    let kind = slot.kind();
    match slot.store(value) {
        Ok(Stored::Written) => debug!("Stored group '{group}' into {kind} field '{field}'"),
        Ok(Stored::LeftAbsent) => debug!("Group '{group}' empty, {kind} field '{field}' left absent"),
        Ok(Stored::Ignored) => trace!("Field '{field}' has unsupported kind, ignoring '{group}'"),
        Err(source) => {
            debug!("Failed to store group '{group}' into {kind} field '{field}': {source}");
            return Err(Error::Coercion {
                field: field.to_string(),
                group: group.to_string(),
                value: value.to_string(),
                kind,
                source,
            });
        }
    }
    Ok(())
}
