use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::value::Value;
use std::sync::Arc;

/// One row of a dataset, assigning a value to every column of its header.
#[derive(Debug, Clone)]
pub struct Instance {
    header: Arc<InstanceHeader>,
    values: Vec<Value>,
}

impl Instance {
    /// Validates arity and that every value is legal for its column.
    pub fn new(header: Arc<InstanceHeader>, values: Vec<Value>) -> Result<Instance, DatasetError> {
        if values.len() != header.number_of_attributes() {
            return Err(DatasetError::InvalidArgument(format!(
                "expected {} values, got {}",
                header.number_of_attributes(),
                values.len()
            )));
        }
        for (attribute, value) in header.attributes().iter().zip(values.iter()) {
            if !attribute.is_allowed(value) {
                return Err(DatasetError::IllegalValue {
                    attribute: attribute.name().to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(Instance { header, values })
    }

    pub fn value(&self, attribute: &NominalAttribute) -> Result<&Value, DatasetError> {
        self.header
            .index_of_attribute(attribute)
            .and_then(|column| self.values.get(column))
            .ok_or_else(|| DatasetError::UnknownAttribute(attribute.name().to_string()))
    }

    pub fn value_at_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    /// Comma-joined values of `attributes`, in the given order.
    pub fn render(&self, attributes: &[AttributeRef]) -> Result<String, DatasetError> {
        let fields = attributes
            .iter()
            .map(|attribute| self.value(attribute).map(Value::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(fields.join(","))
    }
}
