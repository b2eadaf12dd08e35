//! Impurity measures used to pick partition attributes.
//!
//! Class values are tallied in the order they are first encountered in the
//! view, which makes [`most_common_value`] resolve ties deterministically.

use crate::core::attributes::NominalAttribute;
use crate::core::error::DatasetError;
use crate::core::value::Value;
use crate::core::views::{DatasetView, DatasetViewExt};
use std::collections::HashMap;

/// Occurrence counts keyed by value, in first-encountered order.
#[derive(Default)]
struct Tally<'v> {
    slots: HashMap<&'v Value, usize>,
    counts: Vec<(&'v Value, usize)>,
    total: usize,
}

impl<'v> Tally<'v> {
    fn add(&mut self, value: &'v Value) {
        let next = self.counts.len();
        let slot = *self.slots.entry(value).or_insert(next);
        if slot == next {
            self.counts.push((value, 0));
        }
        self.counts[slot].1 += 1;
        self.total += 1;
    }

    fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as f64;
        let h: f64 = self
            .counts
            .iter()
            .map(|&(_, c)| {
                let p = c as f64 / n;
                -p * p.log2()
            })
            .sum();
        h.max(0.0)
    }

    fn most_common(&self) -> Option<&'v Value> {
        let mut best: Option<(&'v Value, usize)> = None;
        for &(value, count) in &self.counts {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

fn class_tally<'v, V: DatasetView + ?Sized>(
    view: &'v V,
    class_attribute: &NominalAttribute,
) -> Result<Tally<'v>, DatasetError> {
    let mut tally = Tally::default();
    for instance in view.instances() {
        tally.add(instance.value(class_attribute)?);
    }
    Ok(tally)
}

/// Shannon entropy (bits) of the class distribution; 0 for an empty view.
pub fn entropy<V: DatasetView + ?Sized>(
    view: &V,
    class_attribute: &NominalAttribute,
) -> Result<f64, DatasetError> {
    Ok(class_tally(view, class_attribute)?.entropy())
}

/// Entropy reduction obtained by partitioning `view` on `attribute`.
pub fn information_gain<V: DatasetView + ?Sized>(
    view: &V,
    class_attribute: &NominalAttribute,
    attribute: &NominalAttribute,
) -> Result<f64, DatasetError> {
    let mut overall = Tally::default();
    let mut partitions: Vec<Tally<'_>> = Vec::new();
    let mut partition_of: HashMap<&Value, usize> = HashMap::new();

    for instance in view.instances() {
        let class_value = instance.value(class_attribute)?;
        let split_value = instance.value(attribute)?;
        let next = partitions.len();
        let slot = *partition_of.entry(split_value).or_insert(next);
        if slot == next {
            partitions.push(Tally::default());
        }
        partitions[slot].add(class_value);
        overall.add(class_value);
    }

    if overall.total == 0 {
        return Ok(0.0);
    }
    let n = overall.total as f64;
    let remainder: f64 = partitions
        .iter()
        .map(|p| p.total as f64 / n * p.entropy())
        .sum();
    Ok(overall.entropy() - remainder)
}

/// Most frequent class value; the first one encountered wins ties.
pub fn most_common_value<V: DatasetView + ?Sized>(
    view: &V,
    class_attribute: &NominalAttribute,
) -> Result<Value, DatasetError> {
    class_tally(view, class_attribute)?
        .most_common()
        .cloned()
        .ok_or_else(|| {
            DatasetError::InvalidArgument(format!(
                "no most common value of '{}' in an empty view",
                class_attribute.name()
            ))
        })
}
