//! Catalog persistence
//!
//! Provides [`JsonCatalogStore`], implementing the
//! [`CatalogStore`](assess_application::CatalogStore) port.

mod json_store;

pub use json_store::JsonCatalogStore;
