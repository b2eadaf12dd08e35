use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::instances::Instance;
use crate::core::views::DatasetView;
use std::marker::PhantomData;

/// Element kinds a [`ViewCursor`] can walk over.
pub trait CursorItem {
    fn extent<V: DatasetView + ?Sized>(view: &V) -> usize;

    fn fetch<V: DatasetView + ?Sized>(view: &V, index: usize) -> Result<&Self, DatasetError>;
}

impl CursorItem for AttributeRef {
    fn extent<V: DatasetView + ?Sized>(view: &V) -> usize {
        view.num_attributes()
    }

    fn fetch<V: DatasetView + ?Sized>(view: &V, index: usize) -> Result<&Self, DatasetError> {
        view.attribute_at(index)
    }
}

impl CursorItem for Instance {
    fn extent<V: DatasetView + ?Sized>(view: &V) -> usize {
        view.num_instances()
    }

    fn fetch<V: DatasetView + ?Sized>(view: &V, index: usize) -> Result<&Self, DatasetError> {
        view.instance_at(index)
    }
}

/// Bidirectional, read-only cursor over the attributes or instances of a view.
///
/// The cursor sits between elements: `next` returns the element at
/// `next_index` and advances, `previous` steps back and returns the element
/// it passed. Every mutating operation fails with
/// [`DatasetError::UnsupportedOperation`].
pub struct ViewCursor<'a, V: ?Sized, T> {
    view: &'a V,
    index: usize,
    _item: PhantomData<&'a T>,
}

impl<'a, V, T> ViewCursor<'a, V, T>
where
    V: DatasetView + ?Sized,
    T: CursorItem + 'a,
{
    pub fn new(view: &'a V) -> Self {
        Self {
            view,
            index: 0,
            _item: PhantomData,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < T::extent(self.view)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn next_index(&self) -> usize {
        self.index
    }

    /// `None` while the cursor is before the first element.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn previous(&mut self) -> Result<&'a T, DatasetError> {
        let index = self
            .index
            .checked_sub(1)
            .ok_or(DatasetError::NoPreviousElement)?;
        let item = T::fetch(self.view, index)?;
        self.index = index;
        Ok(item)
    }

    pub fn insert(&mut self, _element: T) -> Result<(), DatasetError> {
        Err(DatasetError::UnsupportedOperation("views are read-only"))
    }

    pub fn set(&mut self, _element: T) -> Result<(), DatasetError> {
        Err(DatasetError::UnsupportedOperation("views are read-only"))
    }

    pub fn remove(&mut self) -> Result<(), DatasetError> {
        Err(DatasetError::UnsupportedOperation("views are read-only"))
    }
}

impl<'a, V, T> Iterator for ViewCursor<'a, V, T>
where
    V: DatasetView + ?Sized,
    T: CursorItem + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if !self.has_next() {
            return None;
        }
        let item = T::fetch(self.view, self.index).ok()?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = T::extent(self.view).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, V, T> ExactSizeIterator for ViewCursor<'a, V, T>
where
    V: DatasetView + ?Sized,
    T: CursorItem + 'a,
{
}
