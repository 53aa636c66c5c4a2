//! Question bank domain
//!
//! Pure catalog logic: template-driven item generation and balanced sampling.
//! Loading and persisting catalog documents is an application/infrastructure
//! concern (see the `CatalogStore` port).

pub mod catalog;
pub mod sampler;
pub mod templates;

pub use catalog::Catalog;
pub use sampler::sample_balanced;
pub use templates::{ItemTemplate, generate_pool};
