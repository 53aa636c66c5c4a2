//! In-memory snapshot of the question catalog

use crate::core::question::{QuestionItem, QuestionType};
use std::collections::BTreeMap;

/// The loaded catalog: one pool of items per question type.
///
/// Every type always has an entry; a type whose document is missing or
/// unreadable is represented by an empty pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pools: BTreeMap<QuestionType, Vec<QuestionItem>>,
}

impl Catalog {
    /// Create an empty catalog (all four pools empty)
    pub fn new() -> Self {
        let pools = QuestionType::ALL
            .into_iter()
            .map(|t| (t, Vec::new()))
            .collect();
        Self { pools }
    }

    /// Replace the pool for one question type
    pub fn with_pool(mut self, question_type: QuestionType, items: Vec<QuestionItem>) -> Self {
        self.pools.insert(question_type, items);
        self
    }

    /// Items of one question type
    pub fn pool(&self, question_type: QuestionType) -> &[QuestionItem] {
        self.pools
            .get(&question_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over `(type, pool)` pairs in catalog order
    pub fn pools(&self) -> impl Iterator<Item = (QuestionType, &[QuestionItem])> {
        QuestionType::ALL
            .into_iter()
            .map(move |t| (t, self.pool(t)))
    }

    /// Number of question types the catalog is organised into
    pub fn type_count(&self) -> usize {
        QuestionType::ALL.len()
    }

    /// Total number of items across all pools
    pub fn total_items(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::templates::generate_pool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_catalog_has_all_types_empty() {
        let catalog = Catalog::new();
        assert_eq!(catalog.pools().count(), 4);
        assert!(catalog.is_empty());
        assert!(catalog.pool(QuestionType::Imagination).is_empty());
    }

    #[test]
    fn test_total_items() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::new()
            .with_pool(
                QuestionType::Imagination,
                generate_pool(QuestionType::Imagination, 3, &mut rng),
            )
            .with_pool(
                QuestionType::DivergentThinking,
                generate_pool(QuestionType::DivergentThinking, 5, &mut rng),
            );
        assert_eq!(catalog.total_items(), 8);
        assert_eq!(catalog.pool(QuestionType::DivergentThinking).len(), 5);
    }
}
