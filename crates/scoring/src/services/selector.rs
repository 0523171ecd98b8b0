//! Weighted reward draws ("pulls").
//!
//! `P(entry i) = weight_i / Σ weights`. Each pull is an independent draw with
//! replacement. When every weight is zero the last entry wins, always.

use rand::Rng;
use tracing::{debug, warn};

use crate::models::{RewardEntry, RewardPool};

pub fn total_weight(entries: &[RewardEntry]) -> f64 {
    entries.iter().map(|e| e.weight).sum()
}

/// Resolves a draw `r` in `[0, Σ weights)` to an entry.
///
/// Walks the entries in order, subtracting each weight from `r`, and returns the
/// first entry whose weight exceeds what is left. If rounding leaves `r` past
/// the end, or all weights are zero, the last entry is returned.
pub fn select_with_draw(entries: &[RewardEntry], draw: f64) -> Option<&RewardEntry> {
    let mut remaining = draw;

    for entry in entries {
        if remaining < entry.weight {
            return Some(entry);
        }
        remaining -= entry.weight;
    }

    entries.last()
}

/// One pull. Always `Some` for a constructed pool, which is never empty.
pub fn select<'a, R: Rng + ?Sized>(pool: &'a RewardPool, rng: &mut R) -> Option<&'a RewardEntry> {
    let entries = pool.entries();
    let total = total_weight(entries);

    if !total.is_finite() {
        warn!(source = pool.source(), total, "Refusing pull from pool with non-finite weight");
        return None;
    }

    let draw = if total > 0.0 {
        rng.random_range(0.0..total)
    } else {
        0.0
    };

    let selected = select_with_draw(entries, draw)?;
    debug!(source = pool.source(), draw, total, id = selected.id, "Resolved pull");

    Some(selected)
}

pub fn pull<'a, R: Rng + ?Sized>(
    pool: &'a RewardPool,
    count: usize,
    rng: &mut R,
) -> Vec<&'a RewardEntry> {
    (0..count).filter_map(|_| select(pool, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn pool(weights: &[f64]) -> RewardPool {
        let entries = weights
            .iter()
            .enumerate()
            .map(|(i, &weight)| RewardEntry {
                id: i as i64 + 1,
                label: None,
                weight,
            })
            .collect();
        RewardPool::new("test", entries).unwrap()
    }

    #[test]
    fn test_forced_draw_on_even_split() {
        let pool = pool(&[50.0, 50.0]);

        assert_eq!(select_with_draw(pool.entries(), 49.9).unwrap().id, 1);
        assert_eq!(select_with_draw(pool.entries(), 50.1).unwrap().id, 2);
        assert_eq!(select_with_draw(pool.entries(), 0.0).unwrap().id, 1);
        assert_eq!(select_with_draw(pool.entries(), 50.0).unwrap().id, 2);
    }

    #[test]
    fn test_draw_past_end_falls_back_to_last() {
        let pool = pool(&[1.0, 2.0, 3.0]);
        assert_eq!(select_with_draw(pool.entries(), 6.0).unwrap().id, 3);
        assert_eq!(select_with_draw(pool.entries(), 1e9).unwrap().id, 3);
    }

    #[test]
    fn test_zero_weight_entries_are_never_drawn() {
        let pool = pool(&[0.0, 10.0, 0.0, 5.0]);
        let mut rng = StdRng::seed_from_u64(7);

        for entry in pull(&pool, 2_000, &mut rng) {
            assert!(entry.id == 2 || entry.id == 4);
        }
    }

    #[test]
    fn test_all_zero_weights_always_pick_last() {
        let pool = pool(&[0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            assert_eq!(select(&pool, &mut rng).unwrap().id, 3);
        }
    }

    #[test]
    fn test_empty_slice_selects_nothing() {
        assert!(select_with_draw(&[], 0.0).is_none());
    }

    #[test]
    fn test_sampling_converges_to_weights() {
        let pool = pool(&[70.0, 20.0, 10.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;

        let mut counts = [0usize; 3];
        for entry in pull(&pool, draws, &mut rng) {
            counts[(entry.id - 1) as usize] += 1;
        }

        let expected = [0.7, 0.2, 0.1];
        for (count, p) in counts.iter().zip(expected) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - p).abs() < 0.01,
                "observed {observed} expected {p}"
            );
        }
    }

    #[test]
    fn test_largest_finite_weights_still_draw() {
        let pool = pool(&[f64::MAX / 2.0, f64::MAX / 2.0]);
        let mut rng = StdRng::seed_from_u64(5);

        assert!(total_weight(pool.entries()).is_finite());
        assert_eq!(pull(&pool, 50, &mut rng).len(), 50);
    }

    #[test]
    fn test_pull_count() {
        let pool = pool(&[1.0]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pull(&pool, 10, &mut rng).len(), 10);
        assert!(pull(&pool, 0, &mut rng).is_empty());
    }
}
