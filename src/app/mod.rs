//! Application Layer
//!
//! Contains app initialization, window management, global entities, layout
//! classification and navigation.

pub mod application;
pub mod entities;
pub mod layout;
pub mod navigation;
pub mod workspace;
