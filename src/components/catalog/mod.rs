//! Catalog Components
//!
//! List and detail views over catalog products.

pub mod product_details;
pub mod product_list;
