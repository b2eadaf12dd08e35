use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates (true class, predicted class) pairs and summarises them.
///
/// Classes are identified by their position in the class attribute's
/// declared value list.
pub trait PerformanceEvaluator {
    /// Clears every accumulated result.
    fn reset(&mut self);

    /// Records one prediction. Indices at or beyond the evaluator's class
    /// count are ignored.
    fn add_result(&mut self, true_class: usize, predicted_class: usize);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
