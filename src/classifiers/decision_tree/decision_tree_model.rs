use crate::classifiers::decision_tree::{Classifier, InnerNode, Node};
use crate::classifiers::measures::{entropy, information_gain, most_common_value};
use crate::classifiers::model::ensure_class_column;
use crate::classifiers::{LearningError, Model};
use crate::core::attributes::AttributeRef;
use crate::core::instances::Instance;
use crate::core::value::Value;
use crate::core::views::{DatasetView, DatasetViewExt, select_instances};
use log::{debug, info};
use std::fmt::{Display, Formatter};

/// ID3 decision tree over nominal attributes.
///
/// The tree is grown greedily: each inner node splits on the candidate with
/// the highest information gain and every legal value of that attribute gets
/// a child. Rows are never copied; recursion works on nested
/// [`PredicateView`](crate::core::views::PredicateView)s.
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeModel {
    root: Option<Node>,
    max_depth: Option<usize>,
}

impl DecisionTreeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes at depth `max_depth` (the root is at depth 0) become majority
    /// leaves.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            root: None,
            max_depth: Some(max_depth),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.root.is_some()
    }

    pub fn classifier(&self) -> Result<Classifier<'_>, LearningError> {
        self.root
            .as_ref()
            .map(Classifier::new)
            .ok_or(LearningError::NotTrained)
    }

    /// Grows a tree for `view` using only `candidates` as split attributes.
    pub fn build(
        &self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
        candidates: &[AttributeRef],
    ) -> Result<Node, LearningError> {
        if !view.has_instances() {
            return Err(LearningError::EmptyView);
        }
        ensure_class_column(view, class_attribute)?;
        self.grow(view, class_attribute, candidates, 0)
    }

    fn grow(
        &self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
        candidates: &[AttributeRef],
        depth: usize,
    ) -> Result<Node, LearningError> {
        if entropy(view, class_attribute)? == 0.0 {
            let first = view.instance_at(0)?;
            return Ok(Node::leaf(first.value(class_attribute)?.clone()));
        }
        if candidates.is_empty() || self.max_depth.is_some_and(|max| depth >= max) {
            return Ok(Node::leaf(most_common_value(view, class_attribute)?));
        }

        let (position, gain) = select_partition_attribute(view, class_attribute, candidates)?;
        let decision = &candidates[position];
        debug!(
            "depth {depth}: splitting {} rows on '{}' (gain {gain:.6})",
            view.num_instances(),
            decision.name()
        );

        let remaining: Vec<AttributeRef> = candidates
            .iter()
            .filter(|a| *a != decision)
            .cloned()
            .collect();

        let mut node = InnerNode::new(decision);
        for value in decision.iter() {
            let subset = select_instances(view, decision, value)?;
            let child = if subset.has_instances() {
                self.grow(&subset, class_attribute, &remaining, depth + 1)?
            } else {
                Node::leaf(most_common_value(view, class_attribute)?)
            };
            node.add_child(value.clone(), child)?;
        }
        Ok(Node::Inner(node))
    }
}

/// Position of the candidate with maximal gain, with that gain. The first
/// maximum in candidate order wins.
fn select_partition_attribute(
    view: &dyn DatasetView,
    class_attribute: &AttributeRef,
    candidates: &[AttributeRef],
) -> Result<(usize, f64), LearningError> {
    let mut best: Option<(usize, f64)> = None;
    for (position, candidate) in candidates.iter().enumerate() {
        let gain = information_gain(view, class_attribute, candidate)?;
        if best.is_none_or(|(_, g)| gain > g) {
            best = Some((position, gain));
        }
    }
    best.ok_or_else(|| LearningError::InvalidParameter("no candidate attributes".into()))
}

impl Model for DecisionTreeModel {
    fn train_model_on_view(
        &mut self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
    ) -> Result<(), LearningError> {
        let candidates: Vec<AttributeRef> = view
            .attributes()
            .filter(|a| *a != class_attribute)
            .cloned()
            .collect();
        let root = self.build(view, class_attribute, &candidates)?;
        info!(
            "trained decision tree on {} rows: {} nodes, {} leaves, depth {}",
            view.num_instances(),
            root.num_nodes(),
            root.num_leaves(),
            root.depth()
        );
        self.root = Some(root);
        Ok(())
    }

    fn classify(&self, instance: &Instance) -> Result<Value, LearningError> {
        self.classifier()?.classify(instance).cloned()
    }
}

impl Display for DecisionTreeModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{root}"),
            None => f.write_str("(untrained decision tree)"),
        }
    }
}
