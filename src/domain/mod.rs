//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod catalog;
pub mod config;
pub mod product;
