use crate::core::error::DatasetError;
use crate::core::value::Value;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ATTRIBUTE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of an attribute, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(u64);

impl AttributeId {
    fn next() -> Self {
        AttributeId(NEXT_ATTRIBUTE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

pub type AttributeRef = Arc<NominalAttribute>;

/// An attribute with a predefined, ordered list of legal values.
///
/// Attributes compare and hash by identity: two attributes created
/// separately are different even if their names and values match. The
/// type is intentionally not `Clone`, share it through [`AttributeRef`].
#[derive(Debug)]
pub struct NominalAttribute {
    id: AttributeId,
    name: String,
    values: Vec<Value>,
    value_to_index: HashMap<Value, usize>,
}

impl NominalAttribute {
    pub fn new<N: Into<String>>(name: N) -> Result<NominalAttribute, DatasetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DatasetError::InvalidArgument(
                "attribute name must not be empty".into(),
            ));
        }
        Ok(NominalAttribute {
            id: AttributeId::next(),
            name,
            values: Vec::new(),
            value_to_index: HashMap::new(),
        })
    }

    pub fn with_values<N, I, V>(name: N, values: I) -> Result<NominalAttribute, DatasetError>
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut attribute = NominalAttribute::new(name)?;
        for value in values {
            attribute.add_value(value.into())?;
        }
        Ok(attribute)
    }

    /// Appends a legal value. Fails if the value is already declared.
    pub fn add_value(&mut self, value: Value) -> Result<(), DatasetError> {
        if self.value_to_index.contains_key(&value) {
            return Err(DatasetError::InvalidArgument(format!(
                "value '{value}' declared twice for attribute '{}'",
                self.name
            )));
        }
        self.value_to_index.insert(value.clone(), self.values.len());
        self.values.push(value);
        Ok(())
    }

    pub fn into_ref(self) -> AttributeRef {
        Arc::new(self)
    }

    pub fn id(&self) -> AttributeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn index_of_value(&self, value: &Value) -> Option<usize> {
        self.value_to_index.get(value).copied()
    }

    pub fn is_allowed(&self, value: &Value) -> bool {
        self.value_to_index.contains_key(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn arff_representation(&self) -> String {
        let labels: Vec<String> = self.values.iter().map(Value::to_string).collect();
        format!("@attribute {} {{ {} }}", self.name, labels.join(", "))
    }
}

impl PartialEq for NominalAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NominalAttribute {}

impl Hash for NominalAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for NominalAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl<'a> IntoIterator for &'a NominalAttribute {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_with_values_keeps_declaration_order() {
        let outlook =
            NominalAttribute::with_values("outlook", ["sunny", "overcast", "rainy"]).unwrap();
        let labels: Vec<String> = outlook.iter().map(Value::to_string).collect();
        assert_eq!(labels, vec!["sunny", "overcast", "rainy"]);
        assert_eq!(outlook.index_of_value(&Value::from("rainy")), Some(2));
        assert_eq!(outlook.value_at(1), Some(&Value::from("overcast")));
    }

    #[test]
    fn test_is_allowed_checks_membership() {
        let windy = NominalAttribute::with_values("windy", [true, false]).unwrap();
        assert!(windy.is_allowed(&Value::from(true)));
        assert!(!windy.is_allowed(&Value::from("true")));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(matches!(
            NominalAttribute::new("  "),
            Err(DatasetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_value_is_rejected() {
        let mut attribute = NominalAttribute::with_values("a", ["x"]).unwrap();
        assert!(attribute.add_value(Value::from("x")).is_err());
        assert!(attribute.add_value(Value::from("y")).is_ok());
        assert_eq!(attribute.num_values(), 2);
    }

    #[test]
    fn test_identity_equality_ignores_structure() {
        let first = NominalAttribute::with_values("color", ["red", "blue"])
            .unwrap()
            .into_ref();
        let twin = NominalAttribute::with_values("color", ["red", "blue"])
            .unwrap()
            .into_ref();
        assert_ne!(first, twin);
        assert_eq!(first, Arc::clone(&first));

        let set: HashSet<AttributeRef> = [Arc::clone(&first), twin, first].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_arff_representation() {
        let play = NominalAttribute::with_values("play", ["yes", "no"]).unwrap();
        assert_eq!(play.arff_representation(), "@attribute play { yes, no }");
    }
}
