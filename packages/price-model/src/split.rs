//! Seeded row splits for holdout evaluation and cross-validation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Default seed shared by the split and the fold assignment.
pub const DEFAULT_SEED: u64 = 42;

/// Row indices of a train/test split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

fn shuffled(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}

/// Shuffle `0..n` and hold out `ceil(n * test_ratio)` rows.
pub fn train_test_split(n: usize, test_ratio: f64, seed: u64) -> Split {
    let indices = shuffled(n, seed);
    let n_test = ((n as f64) * test_ratio.clamp(0.0, 1.0)).ceil() as usize;
    let n_test = n_test.min(n);

    Split {
        test: indices[..n_test].to_vec(),
        train: indices[n_test..].to_vec(),
    }
}

/// Shuffled k-fold partition; the first `n % k` folds get one extra row.
pub fn kfold(n: usize, k: usize, seed: u64) -> Vec<Split> {
    let k = k.clamp(1, n.max(1));
    let indices = shuffled(n, seed);

    let base = n / k;
    let extra = n % k;
    let mut folds = Vec::with_capacity(k);
    let mut start = 0;
    for fold in 0..k {
        let size = base + usize::from(fold < extra);
        let end = start + size;
        let test = indices[start..end].to_vec();
        let train = indices[..start]
            .iter()
            .chain(&indices[end..])
            .copied()
            .collect();
        folds.push(Split { train, test });
        start = end;
    }
    folds
}

/// Pick the rows of `items` at `indices`.
pub fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn split_partitions_every_row() {
        let split = train_test_split(11, 0.2, DEFAULT_SEED);
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 8);

        let all: BTreeSet<usize> = split.train.iter().chain(&split.test).copied().collect();
        assert_eq!(all, (0..11).collect());
    }

    #[test]
    fn split_is_reproducible() {
        assert_eq!(
            train_test_split(50, 0.2, DEFAULT_SEED),
            train_test_split(50, 0.2, DEFAULT_SEED)
        );
    }

    #[test]
    fn folds_cover_rows_exactly_once() {
        let folds = kfold(23, 10, DEFAULT_SEED);
        assert_eq!(folds.len(), 10);

        let mut seen: Vec<usize> = folds.iter().flat_map(|f| f.test.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..23).collect::<Vec<_>>());

        for fold in &folds {
            assert_eq!(fold.train.len() + fold.test.len(), 23);
        }
    }

    #[test]
    fn more_folds_than_rows_is_capped() {
        assert_eq!(kfold(3, 10, DEFAULT_SEED).len(), 3);
    }
}
