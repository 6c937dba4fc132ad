//! Runtime table of record types accepted as destinations.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use tracing::debug;

use crate::binder;
use crate::descriptor::Capture;
use crate::error::{Error, Result};
use crate::pattern::{CaptureTable, Pattern};

type BindFn = Box<dyn Fn(&CaptureTable, &mut dyn Any) -> Result<()> + Send + Sync>;

/// Record types accepted as destinations when the type is only known at
/// the call site.
pub struct Registry {
    binders: HashMap<TypeId, BindFn>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            binders: HashMap::new(),
        }
    }

    pub fn register<T: Capture>(&mut self) {
        debug!("Registering record type: {}", type_name::<T>());
        self.binders.insert(
            TypeId::of::<T>(),
            Box::new(|table: &CaptureTable, destination: &mut dyn Any| {
                let record = destination
                    .downcast_mut::<T>()
                    .ok_or(Error::DestinationType {
                        type_name: type_name::<T>(),
                    })?;
                binder::bind(table, record)
            }),
        );
    }

    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.binders.contains_key(&TypeId::of::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.binders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }

    /// Match `text` against `pattern` and bind into `destination`.
    ///
    /// Empty `pattern`, empty `text` or a `None` destination is a no-op. An
    /// unregistered destination type fails before the pattern is compiled.
    pub fn parse<'a, T: Any>(
        &self,
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
        let bind = self
            .binders
            .get(&TypeId::of::<T>())
            .ok_or(Error::DestinationType {
                type_name: type_name::<T>(),
            })?;

        let table = Pattern::new(pattern)?.table(text);
        bind(&table, destination)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.binders.len())
            .finish()
    }
}
