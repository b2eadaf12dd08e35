/// Online scalar estimator over a sequence of observations.
///
/// Values are fed one at a time with [`add`](Estimator::add); the current
/// estimate is available at any point through
/// [`estimation`](Estimator::estimation).
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// `NaN` until at least one observation has been added.
    fn estimation(&self) -> f64;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
