use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A decision tree node: either a decision on one attribute or a leaf
/// holding a class value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Inner(InnerNode),
    Leaf(Leaf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    value: Value,
}

impl Leaf {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Branches on the value of `decision_attribute`, one child per legal value.
#[derive(Debug, Clone, PartialEq)]
pub struct InnerNode {
    decision_attribute: AttributeRef,
    children: HashMap<Value, Node>,
}

impl InnerNode {
    pub fn new(decision_attribute: &AttributeRef) -> Self {
        Self {
            decision_attribute: Arc::clone(decision_attribute),
            children: HashMap::with_capacity(decision_attribute.num_values()),
        }
    }

    pub fn decision_attribute(&self) -> &AttributeRef {
        &self.decision_attribute
    }

    /// Attaches `child` under `value`, replacing any previous child.
    pub fn add_child(&mut self, value: Value, child: Node) -> Result<(), DatasetError> {
        if !self.decision_attribute.is_allowed(&value) {
            return Err(DatasetError::IllegalValue {
                attribute: self.decision_attribute.name().to_string(),
                value: value.to_string(),
            });
        }
        self.children.insert(value, child);
        Ok(())
    }

    pub fn child(&self, value: &Value) -> Option<&Node> {
        self.children.get(value)
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Children in the declared value order of the decision attribute.
    pub fn children(&self) -> impl Iterator<Item = (&Value, &Node)> + '_ {
        self.decision_attribute
            .iter()
            .filter_map(|value| self.children.get(value).map(|child| (value, child)))
    }
}

impl Node {
    pub fn leaf<V: Into<Value>>(value: V) -> Node {
        Node::Leaf(Leaf::new(value.into()))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Number of decision levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Inner(inner) => {
                1 + inner
                    .children
                    .values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Inner(inner) => 1 + inner.children.values().map(Node::num_nodes).sum::<usize>(),
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Inner(inner) => inner.children.values().map(Node::num_leaves).sum(),
        }
    }
}
