//! Layout Components
//!
//! Bars and other chrome around page content.

pub mod top_bar;
