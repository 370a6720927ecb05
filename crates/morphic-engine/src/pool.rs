//! Accessor enumeration and the per-call accessor pool.
//!
//! The pool starts with every eligible accessor of one source instance and
//! only ever shrinks: [`take`](AccessorPool::take) removes an accessor for
//! good, so no accessor can feed two parameters of one construction.

use morphic_core::{AccessorDescriptor, Source, TypeTag};

use crate::plan::AccessorLayout;

/// Accessors of one source instance, indexed by enumeration order.
#[derive(Debug)]
pub struct AccessorPool<'a> {
    slots: Vec<Option<AccessorDescriptor<'a>>>,
    available: usize,
}

impl<'a> AccessorPool<'a> {
    /// Enumerate `source`'s accessors in declaration order.
    pub fn enumerate<S: Source + ?Sized>(source: &'a S) -> Self {
        Self::from_accessors(source.describe_accessors())
    }

    /// Build a pool from already described accessors.
    ///
    /// Every described accessor is kept, whatever its name. A shape's
    /// identity machinery (`PartialEq`, `Hash`, `Debug`) is never described
    /// as an accessor in the first place.
    pub fn from_accessors(accessors: Vec<AccessorDescriptor<'a>>) -> Self {
        let slots: Vec<_> = accessors.into_iter().map(Some).collect();
        let available = slots.len();
        Self { slots, available }
    }

    /// Number of accessors not yet taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.available
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    /// Number of accessors enumerated, taken or not. Indices are below this.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The accessor at `index`, if it has not been taken.
    pub fn get(&self, index: usize) -> Option<&AccessorDescriptor<'a>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_available(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Untaken accessors with their indices, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AccessorDescriptor<'a>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|accessor| (index, accessor)))
    }

    /// Index of the first untaken accessor satisfying `pred`.
    pub fn position(&self, mut pred: impl FnMut(&AccessorDescriptor<'a>) -> bool) -> Option<usize> {
        self.iter()
            .find(|(_, accessor)| pred(accessor))
            .map(|(index, _)| index)
    }

    /// Index of the first untaken accessor of exactly `value_type`.
    pub fn position_of_type(&self, value_type: TypeTag) -> Option<usize> {
        self.position(|accessor| accessor.value_type() == value_type)
    }

    /// Remove the accessor at `index` from the pool.
    pub fn take(&mut self, index: usize) -> Option<AccessorDescriptor<'a>> {
        let accessor = self.slots.get_mut(index)?.take()?;
        self.available -= 1;
        Some(accessor)
    }

    /// Names and types of the untaken accessors.
    pub fn layout(&self) -> AccessorLayout {
        self.iter()
            .map(|(_, accessor)| (accessor.name().into(), accessor.value_type()))
            .collect()
    }

    /// Whether nothing was taken yet and the accessors are exactly `layout`.
    pub fn has_layout(&self, layout: &[(Box<str>, TypeTag)]) -> bool {
        self.available == self.slots.len()
            && self.iter().map(|(_, accessor)| (accessor.name(), accessor.value_type())).eq(
                layout.iter().map(|(name, value_type)| (&**name, *value_type)),
            )
    }

    /// Names of untaken accessors, in enumeration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(_, accessor)| accessor.name()).collect()
    }
}
