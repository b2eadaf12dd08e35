use crate::core::error::DatasetError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Two disjoint index partitions that together cover `0..num_indices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    first: Vec<usize>,
    second: Vec<usize>,
}

impl Split {
    pub fn first(&self) -> &[usize] {
        &self.first
    }

    pub fn second(&self) -> &[usize] {
        &self.second
    }

    pub fn size_first(&self) -> usize {
        self.first.len()
    }

    pub fn size_second(&self) -> usize {
        self.second.len()
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.first, self.second)
    }
}

/// Shuffles `0..num_indices` and cuts it after `ceil(ratio * num_indices)`
/// positions (capped at `num_indices`).
///
/// A negative or non-finite ratio is rejected.
pub fn random_split<R: Rng + ?Sized>(
    ratio: f64,
    num_indices: usize,
    rng: &mut R,
) -> Result<Split, DatasetError> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(DatasetError::InvalidArgument(format!(
            "split ratio must be a non-negative number, got {ratio}"
        )));
    }
    let n = ((ratio * num_indices as f64).ceil() as usize).min(num_indices);

    let mut indices: Vec<usize> = (0..num_indices).collect();
    indices.shuffle(rng);
    let second = indices.split_off(n);
    Ok(Split {
        first: indices,
        second,
    })
}
