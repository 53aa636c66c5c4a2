//! Interactive session input

pub mod collector;
