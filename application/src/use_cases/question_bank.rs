//! Question bank use case
//!
//! Owns the catalog cache: documents are generated once per missing type,
//! loaded once per process, then sampled from.

use crate::ports::catalog_store::{CatalogError, CatalogStore};
use assess_domain::{Catalog, QuestionItem, QuestionType, generate_pool, sample_balanced};
use rand::Rng;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

pub struct QuestionBank<S: CatalogStore + 'static> {
    store: Arc<S>,
    items_per_type: usize,
    catalog: OnceLock<Catalog>,
}

impl<S: CatalogStore + 'static> QuestionBank<S> {
    pub fn new(store: Arc<S>, items_per_type: usize) -> Self {
        Self {
            store,
            items_per_type,
            catalog: OnceLock::new(),
        }
    }

    /// Generate and persist a pool for every type that has no document.
    ///
    /// Existing documents are never touched. Returns the types that were
    /// generated by this call.
    pub fn ensure_catalog(&self) -> Result<Vec<QuestionType>, CatalogError> {
        self.ensure_catalog_with(&mut rand::thread_rng())
    }

    pub fn ensure_catalog_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<QuestionType>, CatalogError> {
        let mut generated = Vec::new();
        for question_type in QuestionType::ALL {
            if self.store.exists(question_type) {
                debug!("Catalog for {} already present", question_type);
                continue;
            }
            let items = generate_pool(question_type, self.items_per_type, rng);
            self.store.save(question_type, &items)?;
            info!(
                "Generated {} items for {}",
                items.len(),
                question_type.label()
            );
            generated.push(question_type);
        }
        Ok(generated)
    }

    /// The cached catalog, loaded from the store on first access.
    ///
    /// A document that cannot be read contributes an empty pool.
    pub fn catalog(&self) -> &Catalog {
        self.catalog.get_or_init(|| self.load_catalog())
    }

    fn load_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for question_type in QuestionType::ALL {
            let items = match self.store.load(question_type) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Catalog for {} unavailable: {}", question_type, e);
                    Vec::new()
                }
            };
            catalog = catalog.with_pool(question_type, items);
        }
        info!("Catalog loaded ({} items)", catalog.total_items());
        catalog
    }

    /// Ensure the catalog exists, then draw a balanced sample of `total` items
    pub fn sample(&self, total: usize) -> Result<Vec<QuestionItem>, CatalogError> {
        self.sample_with(total, &mut rand::thread_rng())
    }

    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        total: usize,
        rng: &mut R,
    ) -> Result<Vec<QuestionItem>, CatalogError> {
        self.ensure_catalog_with(rng)?;
        let items = sample_balanced(self.catalog(), total, rng);
        if items.len() < total {
            warn!(
                "Catalog holds fewer items than requested ({} < {})",
                items.len(),
                total
            );
        }
        Ok(items)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store that counts writes and can be made to fail loads
    #[derive(Default)]
    pub(crate) struct MemoryCatalogStore {
        docs: Mutex<HashMap<QuestionType, Vec<QuestionItem>>>,
        saves: AtomicUsize,
        broken: Mutex<Vec<QuestionType>>,
    }

    impl MemoryCatalogStore {
        pub(crate) fn with_doc(self, question_type: QuestionType, items: Vec<QuestionItem>) -> Self {
            self.docs.lock().unwrap().insert(question_type, items);
            self
        }

        fn break_type(self, question_type: QuestionType) -> Self {
            self.broken.lock().unwrap().push(question_type);
            self
        }

        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl CatalogStore for MemoryCatalogStore {
        fn exists(&self, question_type: QuestionType) -> bool {
            self.docs.lock().unwrap().contains_key(&question_type)
        }

        fn load(&self, question_type: QuestionType) -> Result<Vec<QuestionItem>, CatalogError> {
            if self.broken.lock().unwrap().contains(&question_type) {
                return Err(CatalogError::Json {
                    path: question_type.catalog_file_name(),
                    message: "truncated".to_string(),
                });
            }
            Ok(self
                .docs
                .lock()
                .unwrap()
                .get(&question_type)
                .cloned()
                .unwrap_or_default())
        }

        fn save(
            &self,
            question_type: QuestionType,
            items: &[QuestionItem],
        ) -> Result<(), CatalogError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.docs
                .lock()
                .unwrap()
                .insert(question_type, items.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_ensure_generates_missing_types_once() {
        let store = Arc::new(MemoryCatalogStore::default());
        let bank = QuestionBank::new(Arc::clone(&store), 5);
        let mut rng = StdRng::seed_from_u64(1);

        let generated = bank.ensure_catalog_with(&mut rng).unwrap();
        assert_eq!(generated.len(), 4);
        assert_eq!(store.saves(), 4);

        let generated = bank.ensure_catalog_with(&mut rng).unwrap();
        assert!(generated.is_empty());
        assert_eq!(store.saves(), 4);
        assert_eq!(bank.catalog().total_items(), 20);
    }

    #[test]
    fn test_existing_document_is_not_regenerated() {
        let existing = vec![QuestionItem::new(
            "ima_custom",
            QuestionType::Imagination,
            "自定义",
            "请想象……",
        )];
        let store = Arc::new(
            MemoryCatalogStore::default().with_doc(QuestionType::Imagination, existing),
        );
        let bank = QuestionBank::new(Arc::clone(&store), 3);

        let generated = bank.ensure_catalog().unwrap();
        assert_eq!(generated.len(), 3);
        assert!(!generated.contains(&QuestionType::Imagination));
        assert_eq!(bank.catalog().pool(QuestionType::Imagination).len(), 1);
    }

    #[test]
    fn test_sample_is_balanced() {
        let store = Arc::new(MemoryCatalogStore::default());
        let bank = QuestionBank::new(store, 10);
        let mut rng = StdRng::seed_from_u64(7);

        let items = bank.sample_with(8, &mut rng).unwrap();
        assert_eq!(items.len(), 8);
        for question_type in QuestionType::ALL {
            let count = items
                .iter()
                .filter(|i| i.question_type == question_type)
                .count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_unreadable_document_becomes_empty_pool() {
        let store = Arc::new(
            MemoryCatalogStore::default()
                .with_doc(QuestionType::DivergentThinking, Vec::new())
                .break_type(QuestionType::DivergentThinking),
        );
        let bank = QuestionBank::new(store, 4);
        let mut rng = StdRng::seed_from_u64(3);

        let items = bank.sample_with(8, &mut rng).unwrap();
        assert_eq!(items.len(), 8);
        assert!(
            items
                .iter()
                .all(|i| i.question_type != QuestionType::DivergentThinking)
        );
    }
}
