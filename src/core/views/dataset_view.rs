use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::instances::Instance;
use crate::core::views::cursor::ViewCursor;
use std::fmt::{Formatter, Write};

/// Read-only projection over the rows and columns of a dataset.
///
/// A dataset can be decorated with multiple views. For example an
/// [`IndexedView`](crate::core::views::IndexedView) selects rows of a dataset
/// and may itself be decorated with a
/// [`PredicateView`](crate::core::views::PredicateView) keeping only rows
/// that carry a given value. Views never copy instances or attributes: they
/// hold row mappings and delegate every lookup to the view they wrap.
///
/// Accessors fail with [`DatasetError::IndexOutOfBounds`] outside the view's
/// extent and never clamp.
pub trait DatasetView {
    fn num_attributes(&self) -> usize;

    fn num_instances(&self) -> usize;

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef, DatasetError>;

    fn instance_at(&self, index: usize) -> Result<&Instance, DatasetError>;
}

/// Cursors and convenience queries available on every view, including
/// `dyn DatasetView`.
pub trait DatasetViewExt: DatasetView {
    fn attributes(&self) -> ViewCursor<'_, Self, AttributeRef> {
        ViewCursor::new(self)
    }

    fn instances(&self) -> ViewCursor<'_, Self, Instance> {
        ViewCursor::new(self)
    }

    fn has_attributes(&self) -> bool {
        self.num_attributes() > 0
    }

    fn has_instances(&self) -> bool {
        self.num_instances() > 0
    }

    /// Shared handles to the view's attributes, in view order.
    fn attribute_list(&self) -> Vec<AttributeRef> {
        self.attributes().cloned().collect()
    }
}

impl<V: DatasetView + ?Sized> DatasetViewExt for V {}

/// Writes the attribute header line followed by one line per instance,
/// rendering only the attributes visible in the view.
pub(crate) fn write_view<V: DatasetView + ?Sized>(
    view: &V,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    let attributes = view.attribute_list();
    let names: Vec<&str> = attributes.iter().map(|a| a.name()).collect();
    f.write_str(&names.join(","))?;
    f.write_char('\n')?;

    for (i, instance) in view.instances().enumerate() {
        if i > 0 {
            f.write_char('\n')?;
        }
        let line = instance.render(&attributes).map_err(|_| std::fmt::Error)?;
        f.write_str(&line)?;
    }
    Ok(())
}
