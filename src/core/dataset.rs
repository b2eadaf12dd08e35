use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::core::value::Value;
use crate::core::views::{DatasetView, IndexedView, write_view};
use crate::sampling::random_split;
use rand::Rng;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// The root table: owns the header and every instance.
///
/// Rows are only ever appended; all other access goes through the
/// read-only [`DatasetView`] interface.
#[derive(Debug)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<Instance>,
}

/// Training and test views produced by [`Dataset::random_split`].
pub struct DatasetSplit<'a> {
    pub training_set: IndexedView<'a>,
    pub test_set: IndexedView<'a>,
}

impl Dataset {
    pub fn new(header: InstanceHeader) -> Dataset {
        Dataset {
            header: Arc::new(header),
            instances: Vec::new(),
        }
    }

    pub fn from_rows<I>(header: InstanceHeader, rows: I) -> Result<Dataset, DatasetError>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        let mut dataset = Dataset::new(header);
        for row in rows {
            dataset.add_instance(row)?;
        }
        Ok(dataset)
    }

    pub fn name(&self) -> &str {
        self.header.relation_name()
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    /// Appends a row after validating it against the header.
    pub fn add_instance(&mut self, values: Vec<Value>) -> Result<(), DatasetError> {
        let instance = Instance::new(Arc::clone(&self.header), values)?;
        self.instances.push(instance);
        Ok(())
    }

    /// All attributes except `exclude`, in column order.
    pub fn attribute_set(&self, exclude: &AttributeRef) -> Vec<AttributeRef> {
        self.header
            .attributes()
            .iter()
            .filter(|a| *a != exclude)
            .cloned()
            .collect()
    }

    /// The final column, by convention the class attribute.
    pub fn last_attribute(&self) -> Result<&AttributeRef, DatasetError> {
        self.header
            .last_attribute()
            .ok_or_else(|| DatasetError::InvalidArgument("dataset has no attributes".into()))
    }

    pub fn attribute_named(&self, name: &str) -> Option<&AttributeRef> {
        self.header.attribute_named(name)
    }

    pub fn random_split<R: Rng + ?Sized>(
        &self,
        ratio: f64,
        rng: &mut R,
    ) -> Result<DatasetSplit<'_>, DatasetError> {
        let split = random_split(ratio, self.num_instances(), rng)?;
        let (first, second) = split.into_parts();
        Ok(DatasetSplit {
            training_set: IndexedView::new(self, first)?,
            test_set: IndexedView::new(self, second)?,
        })
    }
}

impl DatasetView for Dataset {
    fn num_attributes(&self) -> usize {
        self.header.number_of_attributes()
    }

    fn num_instances(&self) -> usize {
        self.instances.len()
    }

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef, DatasetError> {
        self.header
            .attribute_at_index(index)
            .ok_or_else(|| DatasetError::out_of_bounds(index, self.num_attributes()))
    }

    fn instance_at(&self, index: usize) -> Result<&Instance, DatasetError> {
        self.instances
            .get(index)
            .ok_or_else(|| DatasetError::out_of_bounds(index, self.instances.len()))
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_view(self, f)
    }
}
