//! Batch drawing from already-shuffled pools.

use conjuga_core::models::VerbTense;

/// Take up to `primary_target` items from `primary`, fill the rest of the
/// batch from `secondary`, then cover any shortfall from what is left of
/// `primary` and finally `secondary`.
///
/// The pools must be disjoint; the result then never holds duplicates and
/// never exceeds `batch_size`.
pub fn draw_batch(
    primary: &[VerbTense],
    secondary: &[VerbTense],
    batch_size: usize,
    primary_target: usize,
) -> Vec<VerbTense> {
    let primary_take = primary_target.min(batch_size).min(primary.len());
    let secondary_take = (batch_size - primary_take).min(secondary.len());

    let mut batch = Vec::with_capacity(batch_size);
    batch.extend_from_slice(&primary[..primary_take]);
    batch.extend_from_slice(&secondary[..secondary_take]);

    let rest = primary[primary_take..]
        .iter()
        .chain(&secondary[secondary_take..]);
    let shortfall = batch_size - batch.len();
    batch.extend(rest.take(shortfall).cloned());

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(prefix: &str, n: usize) -> Vec<VerbTense> {
        (0..n)
            .map(|i| VerbTense::new(format!("{prefix}{i}"), "presente"))
            .collect()
    }

    #[test]
    fn three_primary_then_secondary() {
        let batch = draw_batch(&pairs("p", 5), &pairs("s", 5), 5, 3);
        let verbs: Vec<_> = batch.iter().map(|p| p.verb.as_str()).collect();
        assert_eq!(verbs, vec!["p0", "p1", "p2", "s0", "s1"]);
    }

    #[test]
    fn short_secondary_backfilled_from_primary() {
        let batch = draw_batch(&pairs("p", 5), &pairs("s", 1), 5, 3);
        let verbs: Vec<_> = batch.iter().map(|p| p.verb.as_str()).collect();
        assert_eq!(verbs, vec!["p0", "p1", "p2", "s0", "p3"]);
    }

    #[test]
    fn short_primary_backfilled_from_secondary() {
        let batch = draw_batch(&pairs("p", 1), &pairs("s", 6), 5, 3);
        let verbs: Vec<_> = batch.iter().map(|p| p.verb.as_str()).collect();
        assert_eq!(verbs, vec!["p0", "s0", "s1", "s2", "s3"]);
    }

    #[test]
    fn batch_smaller_than_primary_target() {
        let batch = draw_batch(&pairs("p", 5), &pairs("s", 5), 2, 3);
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|p| p.verb.starts_with('p')));
    }

    #[test]
    fn empty_pools_yield_empty_batch() {
        assert!(draw_batch(&[], &[], 5, 3).is_empty());
    }
}
