use crate::error::{Error, Result};
use crate::item::WeightedItem;
use log::{debug, trace};
use rand::Rng;
use std::collections::HashSet;

/// Running weight totals over a list of items, for repeated weighted draws.
#[derive(Debug, Clone)]
pub struct CumulativeWeights {
    cumulative: Vec<u64>,
}

impl CumulativeWeights {
    pub fn new(items: &[WeightedItem]) -> Result<CumulativeWeights> {
        let mut total: u64 = 0;
        let mut cumulative = Vec::with_capacity(items.len());
        for item in items {
            if item.weight == 0 {
                return Err(Error::InvalidInput(format!(
                    "item {:?} has a weight of 0",
                    item.value
                )));
            }
            total += item.weight as u64;
            cumulative.push(total);
        }
        if cumulative.is_empty() {
            return Err(Error::InvalidInput("no items to sample from".to_string()));
        }
        Ok(CumulativeWeights { cumulative })
    }

    pub fn total(&self) -> u64 {
        *self.cumulative.last().unwrap_or(&0)
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    ///
    /// Picks an index with probability proportional to its weight.
    ///
    /// The draw lands in `[0, total)`, and the chosen bucket is the first one
    /// whose running total is above it.
    ///
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let random = rng.gen_range(0..self.total());
        self.cumulative.partition_point(|&current| current <= random)
    }
}

///
/// Draws `n` items with replacement, keeps the first draw of each key, and
/// returns the survivors ordered by key.
///
pub fn sample<R: Rng + ?Sized>(
    items: &[WeightedItem],
    n: usize,
    rng: &mut R,
) -> Result<Vec<WeightedItem>> {
    let weights = CumulativeWeights::new(items)?;
    debug!(
        "Sampling {} from {} items (total weight {})",
        n,
        weights.len(),
        weights.total()
    );

    let mut seen: HashSet<&str> = HashSet::new();
    let mut selected: Vec<WeightedItem> = Vec::with_capacity(n.min(items.len()));
    for _ in 0..n {
        let item = &items[weights.draw(rng)];
        trace!("Drew {:?}", item.value);
        if seen.insert(item.key()) {
            selected.push(item.clone());
        }
    }

    selected.sort_by(|a, b| a.key().cmp(b.key()));
    Ok(selected)
}
