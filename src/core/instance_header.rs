use crate::core::attributes::{AttributeId, AttributeRef, NominalAttribute};
use crate::core::error::DatasetError;
use std::collections::HashMap;

/// Schema shared by every instance of a dataset: relation name and the
/// ordered attribute columns.
#[derive(Debug)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<AttributeRef>,
    column_of: HashMap<AttributeId, usize>,
}

impl InstanceHeader {
    /// Fails if the same attribute (by identity) appears in two columns.
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
    ) -> Result<InstanceHeader, DatasetError> {
        let mut column_of = HashMap::with_capacity(attributes.len());
        for (column, attribute) in attributes.iter().enumerate() {
            if column_of.insert(attribute.id(), column).is_some() {
                return Err(DatasetError::InvalidArgument(format!(
                    "attribute '{}' appears twice in relation '{relation_name}'",
                    attribute.name()
                )));
            }
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            column_of,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&AttributeRef> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, attribute: &NominalAttribute) -> Option<usize> {
        self.column_of.get(&attribute.id()).copied()
    }

    pub fn attribute_named(&self, name: &str) -> Option<&AttributeRef> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn last_attribute(&self) -> Option<&AttributeRef> {
        self.attributes.last()
    }
}
