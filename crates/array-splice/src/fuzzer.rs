use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::project::ChangeRecord;

/// Number of distinct element values the fuzzer draws from. Kept small so
/// that generated arrays are full of repeated elements and edit-distance ties.
pub const ALPHABET_SIZE: i64 = 4;

/// Seeded generator of arrays and mutation sequences for randomized tests.
///
/// Uses the xoshiro256** PRNG, so the same seed always produces the same
/// arrays and the same mutations.
///
/// # Examples
///
/// ```
/// use array_splice::{apply_splices, project_array_splices, MutationFuzzer};
///
/// let mut fuzzer = MutationFuzzer::new(7);
/// let initial = fuzzer.random_array(8);
///
/// let mut array = initial.clone();
/// let records = fuzzer.mutate(&mut array, 5);
///
/// let splices = project_array_splices(&array, &records);
/// let mut replayed = initial.clone();
/// apply_splices(&mut replayed, &array, &splices).unwrap();
/// assert_eq!(replayed, array);
/// ```
pub struct MutationFuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl MutationFuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// A random element value.
    pub fn random_value(&mut self) -> i64 {
        self.rng.gen_range(0..ALPHABET_SIZE)
    }

    /// An array of `0..=max_len` random values.
    pub fn random_array(&mut self, max_len: usize) -> Vec<i64> {
        let len = self.rng.gen_range(0..=max_len);
        (0..len).map(|_| self.random_value()).collect()
    }

    /// Apply `steps` random mutations to `array` and return the change
    /// records describing them, in order.
    ///
    /// Mutations are native splices (remove up to 3, insert up to 3, never
    /// both zero), single-index updates of existing elements, and deletes
    /// that leave a hole holding the default value.
    pub fn mutate(&mut self, array: &mut Vec<i64>, steps: usize) -> Vec<ChangeRecord<i64>> {
        let mut records = Vec::with_capacity(steps);
        for _ in 0..steps {
            if !array.is_empty() {
                let roll = self.rng.gen_range(0..10);
                if roll < 5 {
                    let index = self.rng.gen_range(0..array.len());
                    let name = index.to_string();
                    let record = if roll < 4 {
                        let value = self.random_value();
                        ChangeRecord::update(name, std::mem::replace(&mut array[index], value))
                    } else {
                        ChangeRecord::delete(name, std::mem::take(&mut array[index]))
                    };
                    records.push(record);
                    continue;
                }
            }
            let index = self.rng.gen_range(0..=array.len());
            let remove_count = self.rng.gen_range(0..=(array.len() - index).min(3));
            let add_count = self.rng.gen_range(usize::from(remove_count == 0)..=3);
            let added: Vec<i64> = (0..add_count).map(|_| self.random_value()).collect();
            let removed: Vec<i64> = array.splice(index..index + remove_count, added).collect();
            records.push(ChangeRecord::splice(index, removed, add_count));
        }
        records
    }
}
