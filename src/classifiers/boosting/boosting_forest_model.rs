use crate::classifiers::decision_tree::DecisionTreeModel;
use crate::classifiers::model::ensure_class_column;
use crate::classifiers::{LearningError, Model};
use crate::core::attributes::AttributeRef;
use crate::core::error::DatasetError;
use crate::core::instances::Instance;
use crate::core::value::Value;
use crate::core::views::{DatasetView, DatasetViewExt, IndexedView};
use crate::sampling::{distribution_from_weights, weighted_bootstrap};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A member of the forest and its voting weight.
#[derive(Debug, Clone)]
pub struct WeightedTree {
    tree: DecisionTreeModel,
    weight: f64,
}

impl WeightedTree {
    pub fn tree(&self) -> &DecisionTreeModel {
        &self.tree
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Multi-class AdaBoost (SAMME) over depth-limited ID3 trees.
///
/// Every iteration resamples the training view according to the current
/// row weights, fits a tree on the resample and reweights the rows that tree
/// gets wrong. Classification is a weighted vote of the kept trees.
#[derive(Debug, Clone)]
pub struct BoostingForestModel {
    num_iterations: usize,
    max_depth: usize,
    members: Vec<WeightedTree>,
    class_attribute: Option<AttributeRef>,
    rng: StdRng,
}

impl BoostingForestModel {
    pub fn new(num_iterations: usize, max_depth: usize) -> Self {
        Self {
            num_iterations,
            max_depth,
            members: Vec::new(),
            class_attribute: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn members(&self) -> &[WeightedTree] {
        &self.members
    }
}

/// Slack for rounding in a weighted error summed over normalised weights.
const ERROR_TOLERANCE: f64 = 1e-9;

/// Error of a tree that guesses uniformly among `num_classes` classes,
/// with at least two classes assumed.
fn chance_level(num_classes: usize) -> f64 {
    1.0 - 1.0 / num_classes.max(2) as f64
}

/// SAMME voting weight of a tree with weighted error `error`. The error is
/// floored at `f64::EPSILON` so `exp` of the weight stays finite.
fn samme_weight(error: f64, class_penalty: f64) -> f64 {
    let error = error.max(f64::EPSILON);
    ((1.0 - error) / error).ln() + class_penalty
}

/// Index of the largest vote; earlier classes win ties.
fn strongest_class(votes: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in votes.iter().enumerate() {
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

impl Model for BoostingForestModel {
    fn train_model_on_view(
        &mut self,
        view: &dyn DatasetView,
        class_attribute: &AttributeRef,
    ) -> Result<(), LearningError> {
        if self.num_iterations == 0 {
            return Err(LearningError::InvalidParameter(
                "boosting needs at least one iteration".into(),
            ));
        }
        if !view.has_instances() {
            return Err(LearningError::EmptyView);
        }
        ensure_class_column(view, class_attribute)?;

        self.members.clear();
        self.class_attribute = Some(Arc::clone(class_attribute));

        let n = view.num_instances();
        let k = class_attribute.num_values().max(2);
        let class_penalty = ((k - 1) as f64).ln();
        let chance_error = chance_level(k);
        let uniform = 1.0 / n as f64;
        let mut weights = vec![uniform; n];
        let mut best_discarded: Option<(f64, DecisionTreeModel)> = None;

        for iteration in 0..self.num_iterations {
            let distribution = distribution_from_weights(&weights)?;
            let sample = weighted_bootstrap(&distribution, &mut self.rng)?;
            let resample = IndexedView::new(view, sample)?;
            let mut tree = DecisionTreeModel::with_max_depth(self.max_depth);
            tree.train_model_on_view(&resample, class_attribute)?;

            let mut misclassified = Vec::with_capacity(n);
            for instance in view.instances() {
                misclassified.push(&tree.classify(instance)? != instance.value(class_attribute)?);
            }
            let error: f64 = weights
                .iter()
                .zip(&misclassified)
                .filter(|&(_, &missed)| missed)
                .map(|(w, _)| w)
                .sum();

            let alpha = samme_weight(error, class_penalty);
            if error >= chance_error - ERROR_TOLERANCE || alpha <= ERROR_TOLERANCE {
                warn!(
                    "iteration {iteration}: discarding tree with weighted error {error:.4} \
                     (chance level {chance_error:.4}), resetting weights"
                );
                if best_discarded.as_ref().is_none_or(|(e, _)| error < *e) {
                    best_discarded = Some((error, tree));
                }
                weights.fill(uniform);
                continue;
            }

            if !misclassified.contains(&true) {
                let weight = (class_penalty + (n as f64).ln()).max(1.0);
                info!("iteration {iteration}: perfect tree kept with weight {weight:.4}, stopping");
                self.members.push(WeightedTree { tree, weight });
                break;
            }

            info!("iteration {iteration}: tree kept with error {error:.4} and weight {alpha:.4}");
            let boost = alpha.exp();
            for (w, &missed) in weights.iter_mut().zip(&misclassified) {
                if missed {
                    *w *= boost;
                }
            }
            let total: f64 = weights.iter().sum();
            for w in &mut weights {
                *w /= total;
            }
            self.members.push(WeightedTree { tree, weight: alpha });
        }

        if self.members.is_empty() {
            if let Some((error, tree)) = best_discarded {
                warn!("no tree beat chance level; keeping the best one (error {error:.4})");
                self.members.push(WeightedTree { tree, weight: 1.0 });
            }
        }
        info!("boosting kept {} of {} trees", self.members.len(), self.num_iterations);
        Ok(())
    }

    fn classify(&self, instance: &Instance) -> Result<Value, LearningError> {
        let class_attribute = self.class_attribute.as_ref().ok_or(LearningError::NotTrained)?;
        if self.members.is_empty() {
            return Err(LearningError::NotTrained);
        }
        let mut votes = vec![0.0; class_attribute.num_values()];
        for member in &self.members {
            let predicted = member.tree.classify(instance)?;
            let index = class_attribute.index_of_value(&predicted).ok_or_else(|| {
                DatasetError::IllegalValue {
                    attribute: class_attribute.name().to_string(),
                    value: predicted.to_string(),
                }
            })?;
            votes[index] += member.weight;
        }
        strongest_class(&votes)
            .and_then(|i| class_attribute.value_at(i))
            .cloned()
            .ok_or(LearningError::NotTrained)
    }
}

impl Display for BoostingForestModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.members.is_empty() {
            return f.write_str("(untrained boosting forest)");
        }
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            writeln!(f, "Tree {} (weight {:.4}):", i + 1, member.weight)?;
            write!(f, "{}", member.tree)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::NominalAttribute;
    use crate::core::dataset::Dataset;
    use crate::core::instance_header::InstanceHeader;
    use crate::testing::dummies::{binary_dataset, weather_dataset};

    /// Rows where `X` alone tells nothing about `C`: every `X` value carries
    /// each class equally often.
    fn uninformative_dataset(classes: &[&str], copies: usize) -> Dataset {
        let x = NominalAttribute::with_values("X", ["x0", "x1"]).unwrap().into_ref();
        let c = NominalAttribute::with_values("C", classes.to_vec())
            .unwrap()
            .into_ref();
        let header = InstanceHeader::new("uninformative".into(), vec![x, c]).unwrap();
        let mut rows = Vec::new();
        for _ in 0..copies {
            for x in ["x0", "x1"] {
                for &class in classes {
                    rows.push(vec![Value::from(x), Value::from(class)]);
                }
            }
        }
        Dataset::from_rows(header, rows).unwrap()
    }

    /// XOR of two binary columns.
    fn xor_dataset(copies: usize) -> Dataset {
        let x = NominalAttribute::with_values("X", ["0", "1"]).unwrap().into_ref();
        let y = NominalAttribute::with_values("Y", ["0", "1"]).unwrap().into_ref();
        let c = NominalAttribute::with_values("C", ["a", "b"]).unwrap().into_ref();
        let header = InstanceHeader::new("xor".into(), vec![x, y, c]).unwrap();
        let cells = [["0", "0", "a"], ["0", "1", "b"], ["1", "0", "b"], ["1", "1", "a"]];
        let rows = (0..copies)
            .flat_map(|_| cells.iter())
            .map(|row| row.iter().map(|&v| Value::from(v)).collect::<Vec<_>>());
        Dataset::from_rows(header, rows).unwrap()
    }

    #[test]
    fn test_separable_data_is_learned_exactly() {
        let dataset = binary_dataset();
        let class = dataset.last_attribute().unwrap().clone();
        let mut forest = BoostingForestModel::new(10, 1).with_seed(3);
        forest.train_model(&dataset, &class).unwrap();

        assert!(!forest.members().is_empty());
        assert!(forest.members().iter().all(|m| m.weight() > 0.0));
        assert_eq!(forest.test_model(&dataset, &class).unwrap(), 1.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dataset = weather_dataset();
        let class = dataset.last_attribute().unwrap().clone();
        let mut first = BoostingForestModel::new(8, 2).with_seed(42);
        let mut second = BoostingForestModel::new(8, 2).with_seed(42);
        first.train_model(&dataset, &class).unwrap();
        second.train_model(&dataset, &class).unwrap();

        assert_eq!(first.to_string(), second.to_string());
        for instance in dataset.instances() {
            assert_eq!(
                first.classify(instance).unwrap(),
                second.classify(instance).unwrap()
            );
        }
        let accuracy = first.test_model(&dataset, &class).unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
    }

    #[test]
    fn test_member_trees_respect_depth_limit() {
        let dataset = weather_dataset();
        let class = dataset.last_attribute().unwrap().clone();
        let mut forest = BoostingForestModel::new(6, 1).with_seed(9);
        forest.train_model(&dataset, &class).unwrap();
        for member in forest.members() {
            assert!(member.tree().root().unwrap().depth() <= 1);
        }
    }

    #[test]
    fn test_untrained_forest_fails() {
        let dataset = binary_dataset();
        let forest = BoostingForestModel::new(3, 1);
        assert!(matches!(
            forest.classify(dataset.instance_at(0).unwrap()),
            Err(LearningError::NotTrained)
        ));
        assert_eq!(forest.to_string(), "(untrained boosting forest)");
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let dataset = binary_dataset();
        let class = dataset.last_attribute().unwrap().clone();
        let mut forest = BoostingForestModel::new(0, 1);
        assert!(matches!(
            forest.train_model(&dataset, &class),
            Err(LearningError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_vote_ties_go_to_declared_order() {
        assert_eq!(strongest_class(&[0.5, 0.5]), Some(0));
        assert_eq!(strongest_class(&[0.1, 0.7, 0.7]), Some(1));
        assert_eq!(strongest_class(&[]), None);
    }

    #[test]
    fn test_display_lists_weighted_trees() {
        let dataset = binary_dataset();
        let class = dataset.last_attribute().unwrap().clone();
        let mut forest = BoostingForestModel::new(10, 1).with_seed(3);
        forest.train_model(&dataset, &class).unwrap();
        let rendered = forest.to_string();
        assert!(rendered.starts_with("Tree 1 (weight "));
    }

    #[test]
    fn test_chance_level_trees_are_discarded() {
        let dataset = xor_dataset(5);
        let class = dataset.last_attribute().unwrap().clone();
        for seed in 0..5 {
            let mut forest = BoostingForestModel::new(20, 1).with_seed(seed);
            forest.train_model(&dataset, &class).unwrap();
            assert_eq!(forest.members().len(), 1, "seed {seed}");
            assert_eq!(forest.members()[0].weight(), 1.0);
        }
    }

    #[test]
    fn test_chance_level_with_three_classes() {
        assert!((chance_level(3) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(chance_level(2), 0.5);
        assert_eq!(chance_level(1), 0.5);

        let dataset = uninformative_dataset(&["a", "b", "c"], 3);
        let class = dataset.last_attribute().unwrap().clone();
        let mut forest = BoostingForestModel::new(10, 1).with_seed(7);
        forest.train_model(&dataset, &class).unwrap();
        assert_eq!(forest.members().len(), 1);
        assert_eq!(forest.members()[0].weight(), 1.0);
        assert!(forest.classify(dataset.instance_at(0).unwrap()).is_ok());
    }

    #[test]
    fn test_tiny_error_keeps_reweighting_finite() {
        let alpha = samme_weight(1e-310, 0.0);
        assert!(alpha.is_finite());
        let boost = alpha.exp();
        assert!(boost.is_finite());
        let reweighted = 1e-310 * boost;
        assert!(reweighted.is_finite() && reweighted > 0.0);
        assert!(samme_weight(0.0, 1.0).is_finite());
    }
}
