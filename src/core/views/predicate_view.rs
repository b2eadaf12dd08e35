use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::instances::Instance;
use crate::core::value::Value;
use crate::core::views::dataset_view::{DatasetView, write_view};
use crate::core::views::indexed_view::IndexedView;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Rows of a base view whose value for `attribute` equals `value`.
///
/// The matching rows are resolved once by [`select_instances`]; the view
/// then behaves as an [`IndexedView`] over the base.
pub struct PredicateView<'a> {
    attribute: AttributeRef,
    value: Value,
    selection: IndexedView<'a>,
}

/// Scans `base` once and keeps the rows carrying `value` for `attribute`.
pub fn select_instances<'a>(
    base: &'a dyn DatasetView,
    attribute: &AttributeRef,
    value: &Value,
) -> Result<PredicateView<'a>, DatasetError> {
    let mut matching = Vec::new();
    for row in 0..base.num_instances() {
        if base.instance_at(row)?.value(attribute)? == value {
            matching.push(row);
        }
    }
    Ok(PredicateView {
        attribute: Arc::clone(attribute),
        value: value.clone(),
        selection: IndexedView::new(base, matching)?,
    })
}

impl<'a> PredicateView<'a> {
    pub fn attribute(&self) -> &AttributeRef {
        &self.attribute
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn base(&self) -> &'a dyn DatasetView {
        self.selection.base()
    }

    /// Row positions of the selected instances within the base view.
    pub fn indices(&self) -> &[usize] {
        self.selection.indices()
    }
}

impl DatasetView for PredicateView<'_> {
    fn num_attributes(&self) -> usize {
        self.selection.num_attributes()
    }

    fn num_instances(&self) -> usize {
        self.selection.num_instances()
    }

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef, DatasetError> {
        self.selection.attribute_at(index)
    }

    fn instance_at(&self, index: usize) -> Result<&Instance, DatasetError> {
        self.selection.instance_at(index)
    }
}

impl Display for PredicateView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_view(self, f)
    }
}
