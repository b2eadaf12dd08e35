use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::instances::Instance;
use crate::core::views::dataset_view::{DatasetView, write_view};
use std::fmt::{Display, Formatter};

/// Selects rows of a base view through an ordered list of row positions.
///
/// Row `i` of the view is row `indices[i]` of the base. Positions may repeat
/// and appear in any order; attributes are passed through unchanged.
pub struct IndexedView<'a> {
    base: &'a dyn DatasetView,
    indices: Vec<usize>,
}

impl<'a> IndexedView<'a> {
    /// Fails with [`DatasetError::IndexOutOfBounds`] if any position is not a
    /// row of `base`.
    pub fn new(base: &'a dyn DatasetView, indices: Vec<usize>) -> Result<Self, DatasetError> {
        let len = base.num_instances();
        if let Some(&bad) = indices.iter().find(|&&i| i >= len) {
            return Err(DatasetError::out_of_bounds(bad, len));
        }
        Ok(Self { base, indices })
    }

    pub fn base(&self) -> &'a dyn DatasetView {
        self.base
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl DatasetView for IndexedView<'_> {
    fn num_attributes(&self) -> usize {
        self.base.num_attributes()
    }

    fn num_instances(&self) -> usize {
        self.indices.len()
    }

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef, DatasetError> {
        self.base.attribute_at(index)
    }

    fn instance_at(&self, index: usize) -> Result<&Instance, DatasetError> {
        let row = self
            .indices
            .get(index)
            .ok_or_else(|| DatasetError::out_of_bounds(index, self.indices.len()))?;
        self.base.instance_at(*row)
    }
}

impl Display for IndexedView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_view(self, f)
    }
}
