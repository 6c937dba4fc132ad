//! Binding descriptors: which capture group feeds which field of a record.
//!
//! A [`Descriptor`] is built once per record type and reused for every
//! call. Records usually get one through [`impl_capture!`](crate::impl_capture),
//! which stores it in a lazily initialised static.

use crate::field::{FieldSlot, FieldType};

type Accessor<T> = Box<dyn Fn(&mut T) -> FieldSlot<'_> + Send + Sync>;

/// One `(field, group, accessor)` entry of a descriptor.
pub struct Binding<T> {
    field: String,
    group: String,
    accessor: Accessor<T>,
}

impl<T> Binding<T> {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The capture group name. Empty means the field is not bound.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn slot<'a>(&self, record: &'a mut T) -> FieldSlot<'a> {
        (self.accessor)(record)
    }
}

impl<T> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("field", &self.field)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// The ordered bindings of a record type.
#[derive(Debug)]
pub struct Descriptor<T> {
    bindings: Vec<Binding<T>>,
}

impl<T> Descriptor<T> {
    #[must_use]
    pub const fn builder() -> DescriptorBuilder<T> {
        DescriptorBuilder {
            bindings: Vec::new(),
        }
    }

    /// Bindings in declaration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding<T>] {
        &self.bindings
    }

    /// Group names this descriptor reads, skipping unbound fields.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.bindings
            .iter()
            .map(Binding::group)
            .filter(|group| !group.is_empty())
    }
}

#[derive(Debug)]
pub struct DescriptorBuilder<T> {
    bindings: Vec<Binding<T>>,
}

impl<T> DescriptorBuilder<T> {
    /// Bind `group` to a field reached through `accessor`.
    #[must_use]
    pub fn field<V, F>(self, field: impl Into<String>, group: impl Into<String>, accessor: F) -> Self
    where
        T: 'static,
        V: FieldType + ?Sized + 'static,
        F: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        self.slot(field, group, move |record| accessor(record).slot())
    }

    /// Bind `group` to a field through an accessor returning the slot directly.
    #[must_use]
    pub fn slot<F>(mut self, field: impl Into<String>, group: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&mut T) -> FieldSlot<'_> + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            field: field.into(),
            group: group.into(),
            accessor: Box::new(accessor),
        });
        self
    }

    #[must_use]
    pub fn build(self) -> Descriptor<T> {
        Descriptor {
            bindings: self.bindings,
        }
    }
}

/// A record type with a binding descriptor.
pub trait Capture: 'static {
    fn descriptor() -> &'static Descriptor<Self>
    where
        Self: Sized;
}

/// Implement [`Capture`] for a struct by listing `field => "group"` pairs.
///
/// ```
/// use capture_core::impl_capture;
///
/// #[derive(Default)]
/// struct Reminder {
///     who: String,
///     day: Option<i64>,
/// }
///
/// impl_capture!(Reminder {
///     who => "who",
///     day => "day",
/// });
///
/// let mut reminder = Reminder::default();
/// capture_core::parse(r"remind (?P<who>\w+)(?: on (?P<day>\d+))?", "remind Ann", &mut reminder)?;
/// assert_eq!(reminder.who, "Ann");
/// assert_eq!(reminder.day, None);
/// # Ok::<(), capture_core::Error>(())
/// ```
#[macro_export]
macro_rules! impl_capture {
    ($record:ty { $($field:ident => $group:literal),* $(,)? }) => {
        impl $crate::Capture for $record {
            fn descriptor() -> &'static $crate::Descriptor<Self> {
                static DESCRIPTOR: $crate::__private::Lazy<$crate::Descriptor<$record>> =
                    $crate::__private::Lazy::new(|| {
                        $crate::Descriptor::<$record>::builder()
                            $(.field(stringify!($field), $group, |record: &mut $record| &mut record.$field))*
                            .build()
                    });
                &DESCRIPTOR
            }
        }
    };
}
