//! Products - Master/detail product browsing

pub mod controller;
pub mod page;
