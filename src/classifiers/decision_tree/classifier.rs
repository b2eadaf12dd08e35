use crate::classifiers::LearningError;
use crate::classifiers::decision_tree::Node;
use crate::core::instances::Instance;
use crate::core::value::Value;

/// Walks a decision tree from its root to the leaf an instance falls into.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    root: &'a Node,
}

impl<'a> Classifier<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root }
    }

    /// Fails with [`LearningError::MissingClassificationPath`] when the
    /// instance carries a value that has no branch at some inner node. The
    /// induction engine attaches a child for every legal value, so this only
    /// happens for instances from a different schema or a hand-built tree.
    pub fn classify(&self, instance: &Instance) -> Result<&'a Value, LearningError> {
        let mut node = self.root;
        loop {
            match node {
                Node::Leaf(leaf) => return Ok(leaf.value()),
                Node::Inner(inner) => {
                    let attribute = inner.decision_attribute();
                    let decision_value = instance.value(attribute)?;
                    node = inner.child(decision_value).ok_or_else(|| {
                        LearningError::MissingClassificationPath {
                            attribute: attribute.name().to_string(),
                            value: decision_value.to_string(),
                        }
                    })?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::InnerNode;
    use crate::core::views::DatasetView;
    use crate::testing::dummies::binary_dataset;

    #[test]
    fn test_walks_to_matching_leaf() {
        let dataset = binary_dataset();
        let a = dataset.attribute_at(0).unwrap().clone();
        let mut root = InnerNode::new(&a);
        root.add_child("a1".into(), Node::leaf("yes")).unwrap();
        root.add_child("a2".into(), Node::leaf("no")).unwrap();
        let root = Node::Inner(root);

        let classifier = Classifier::new(&root);
        let first = dataset.instance_at(0).unwrap();
        let last = dataset.instance_at(3).unwrap();
        assert_eq!(classifier.classify(first).unwrap(), &Value::from("yes"));
        assert_eq!(classifier.classify(last).unwrap(), &Value::from("no"));
    }

    #[test]
    fn test_leaf_root_classifies_everything() {
        let dataset = binary_dataset();
        let root = Node::leaf("maybe");
        let classifier = Classifier::new(&root);
        assert_eq!(
            classifier.classify(dataset.instance_at(2).unwrap()).unwrap(),
            &Value::from("maybe")
        );
    }

    #[test]
    fn test_missing_branch_is_reported() {
        let dataset = binary_dataset();
        let a = dataset.attribute_at(0).unwrap().clone();
        let mut root = InnerNode::new(&a);
        root.add_child("a1".into(), Node::leaf("yes")).unwrap();
        let root = Node::Inner(root);

        let classifier = Classifier::new(&root);
        let err = classifier
            .classify(dataset.instance_at(2).unwrap())
            .unwrap_err();
        match err {
            LearningError::MissingClassificationPath { attribute, value } => {
                assert_eq!(attribute, "A");
                assert_eq!(value, "a2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
