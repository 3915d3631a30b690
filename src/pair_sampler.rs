//! Deduplicating pair sampler shared by the association tables.
//!
//! Samples (left, right) id pairs with replacement and discards any
//! pair already seen for that left id. A duplicate consumes its
//! attempt rather than being retried, so the emitted relation is a set
//! whose size is at most the attempt target. The loss grows as a left
//! id's right-set approaches the right domain size; for small right
//! domains (the supplier table has 9 entries) heavy collision rates at
//! larger targets are expected and accepted.

use std::collections::{HashMap, HashSet};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample up to `attempts` pairs with left ids in 1..=left_count and
/// right ids in 1..=right_count, calling `emit` once per first-seen
/// pair, in discovery order. Returns the number of pairs emitted.
///
/// A zero-sized domain on either side emits nothing.
pub fn sample_unique_pairs<E>(
    rng: &mut ChaCha8Rng,
    left_count: u64,
    right_count: u64,
    attempts: u64,
    mut emit: impl FnMut(u64, u64) -> Result<(), E>,
) -> Result<u64, E> {
    if left_count == 0 || right_count == 0 {
        return Ok(0);
    }

    let mut seen: HashMap<u64, HashSet<u64>> = HashMap::new();
    let mut emitted = 0;
    for _ in 0..attempts {
        let left = rng.gen_range(1..=left_count);
        let right = rng.gen_range(1..=right_count);

        if seen.entry(left).or_default().insert(right) {
            emit(left, right)?;
            emitted += 1;
        }
        // else the pair was already emitted; the attempt is consumed
    }
    Ok(emitted)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::make_rng;
    use std::convert::Infallible;

    fn collect(
        rng: &mut ChaCha8Rng,
        left: u64,
        right: u64,
        attempts: u64,
    ) -> (u64, Vec<(u64, u64)>) {
        let mut pairs = Vec::new();
        let emitted = sample_unique_pairs(rng, left, right, attempts, |l, r| {
            pairs.push((l, r));
            Ok::<(), Infallible>(())
        })
        .unwrap();
        (emitted, pairs)
    }

    #[test]
    fn no_duplicate_pairs_and_count_bounded() {
        let mut rng = make_rng(10, "pairs");
        let (emitted, pairs) = collect(&mut rng, 100, 13, 500);
        assert_eq!(emitted as usize, pairs.len());
        assert!(pairs.len() <= 500);
        let distinct: HashSet<_> = pairs.iter().collect();
        assert_eq!(distinct.len(), pairs.len());
    }

    #[test]
    fn ids_within_declared_ranges() {
        let mut rng = make_rng(11, "ranges");
        let (_, pairs) = collect(&mut rng, 40, 7, 300);
        for (left, right) in pairs {
            assert!((1..=40).contains(&left));
            assert!((1..=7).contains(&right));
        }
    }

    #[test]
    fn small_right_domain_saturates() {
        // With one left id and three right ids, enough attempts must
        // find all three pairs and nothing more.
        let mut rng = make_rng(12, "saturate");
        let (emitted, pairs) = collect(&mut rng, 1, 3, 1000);
        assert_eq!(emitted, 3);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn zero_sized_domain_emits_nothing() {
        let mut rng = make_rng(13, "degenerate");
        let (emitted, pairs) = collect(&mut rng, 0, 5, 100);
        assert_eq!(emitted, 0);
        assert!(pairs.is_empty());
        let (emitted, pairs) = collect(&mut rng, 5, 0, 100);
        assert_eq!(emitted, 0);
        assert!(pairs.is_empty());
    }

    #[test]
    fn emit_error_propagates() {
        let mut rng = make_rng(14, "error");
        let result = sample_unique_pairs(&mut rng, 10, 10, 100, |_, _| Err("sink failed"));
        assert_eq!(result, Err("sink failed"));
    }
}
