//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod answer_collector;
pub mod catalog_store;
pub mod judge;
pub mod progress;
pub mod result_sink;
pub mod scoring_logger;
