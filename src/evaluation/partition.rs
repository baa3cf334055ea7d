//! Randomized train/test partitioning.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::Dataset;

/// Share of rows that land in the training split.
pub const TRAIN_FRACTION: f64 = 0.8;

/// Shuffles the dataset with a fresh thread-local RNG and splits it 80/20.
///
/// Each call reshuffles independently, so repeated experiment runs average
/// over different partitions. Use [`split_with_rng`] to fix the seed.
pub fn split(dataset: &Dataset) -> (Dataset, Dataset) {
    split_with_rng(dataset, &mut rand::rng())
}

/// Uniformly permutes the rows with `rng`, then takes the first
/// `floor(0.8 * n)` rows as the training split and the remainder as test.
pub fn split_with_rng<R: Rng + ?Sized>(dataset: &Dataset, rng: &mut R) -> (Dataset, Dataset) {
    let mut rows: Vec<Vec<String>> = dataset.rows().to_vec();
    rows.shuffle(rng);

    let train_len = (rows.len() as f64 * TRAIN_FRACTION).floor() as usize;
    let test = rows.split_off(train_len);
    (Dataset::from_validated(rows), Dataset::from_validated(test))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn counted_dataset(n: usize) -> Dataset {
        Dataset::from_rows(
            (0..n)
                .map(|i| vec![i.to_string(), "Y".to_string()])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn split_sizes_follow_the_floor_law() {
        let dataset = counted_dataset(11);
        let mut rng = StdRng::seed_from_u64(7);
        let (train, test) = split_with_rng(&dataset, &mut rng);
        // floor(0.8 * 11) = 8
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn splits_are_a_disjoint_permutation_of_the_input() {
        let dataset = counted_dataset(25);
        let mut rng = StdRng::seed_from_u64(42);
        let (train, test) = split_with_rng(&dataset, &mut rng);

        let mut seen: Vec<&str> = train
            .rows()
            .iter()
            .chain(test.rows())
            .map(|row| row[0].as_str())
            .collect();
        seen.sort_by_key(|cell| cell.parse::<usize>().unwrap());
        let expected: Vec<String> = (0..25).map(|i| i.to_string()).collect();
        assert_eq!(seen, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn tiny_datasets_may_leave_the_test_split_empty() {
        let dataset = counted_dataset(1);
        let mut rng = StdRng::seed_from_u64(0);
        let (train, test) = split_with_rng(&dataset, &mut rng);
        assert_eq!(train.len(), 0);
        assert_eq!(test.len(), 1);
    }

    #[test]
    fn same_seed_reproduces_the_same_partition() {
        let dataset = counted_dataset(20);
        let (train_a, test_a) = split_with_rng(&dataset, &mut StdRng::seed_from_u64(9));
        let (train_b, test_b) = split_with_rng(&dataset, &mut StdRng::seed_from_u64(9));
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }
}
