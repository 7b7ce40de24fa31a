use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Draw up to `count` distinct ingredient names from `pool`.
///
/// Repeated names in the pool count once. The result is in random order,
/// not pool order, and is empty when the pool is empty or `count` is zero.
pub fn sample<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<&String> = pool
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .collect();

    let amount = count.min(distinct.len());
    if amount < count {
        debug!(
            "Requested {} ingredients but only {} are available",
            count,
            distinct.len()
        );
    }

    let (chosen, _) = distinct.partial_shuffle(rng, amount);
    chosen.iter().map(|name| name.to_string()).collect()
}
