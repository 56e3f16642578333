//! Multipane Shop Library
//!
//! A master-detail product browser. The product list and details are shown
//! side by side in landscape windows and as separate screens with back
//! navigation otherwise.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod state;
pub mod theme;
pub mod utils;
