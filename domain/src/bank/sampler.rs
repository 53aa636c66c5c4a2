//! Balanced random sampling over the catalog.
//!
//! ```text
//! per = max(1, N / types)
//! ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//! │ divergent    │ │ convergent   │ │ problem      │ │ imagination  │
//! │ min(per, n)  │ │ min(per, n)  │ │ min(per, n)  │ │ min(per, n)  │
//! └──────┬───────┘ └──────┬───────┘ └──────┬───────┘ └──────┬───────┘
//!        └────────────────┴───────┬────────┴────────────────┘
//!                                 ▼
//!              top up from the union of the remaining items
//!                                 ▼
//!                       shuffle, truncate to N
//! ```

use super::catalog::Catalog;
use crate::core::question::QuestionItem;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Draw a balanced sample of up to `total` distinct items.
///
/// Each type contributes `min(per, pool size)` items, drawn without
/// replacement. If that falls short of `total` the remainder is drawn from all
/// items not yet selected. The result is shuffled and truncated, so it holds
/// `min(total, catalog size)` items and never repeats an identity.
pub fn sample_balanced<R: Rng + ?Sized>(
    catalog: &Catalog,
    total: usize,
    rng: &mut R,
) -> Vec<QuestionItem> {
    if total == 0 {
        return Vec::new();
    }

    let per = (total / catalog.type_count().max(1)).max(1);
    let mut sampled: Vec<QuestionItem> = Vec::with_capacity(total.min(catalog.total_items()));

    for (_, pool) in catalog.pools() {
        if pool.is_empty() {
            continue;
        }
        let k = per.min(pool.len());
        sampled.extend(pool.choose_multiple(rng, k).cloned());
    }

    if sampled.len() < total {
        let taken: HashSet<&str> = sampled.iter().map(|q| q.id.as_str()).collect();
        let rest: Vec<&QuestionItem> = catalog
            .pools()
            .flat_map(|(_, pool)| pool.iter())
            .filter(|q| !taken.contains(q.id.as_str()))
            .collect();
        let remaining = (total - sampled.len()).min(rest.len());
        let extra: Vec<QuestionItem> = rest
            .choose_multiple(rng, remaining)
            .map(|q| (*q).clone())
            .collect();
        sampled.extend(extra);
    }

    sampled.shuffle(rng);
    sampled.truncate(total);
    sampled
}
