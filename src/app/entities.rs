//! AppEntities - Global Entity Handles
//!
//! The injected catalog, the layout classifier and the pane state entity,
//! collected here so views and controllers share one handle.

use gpui::{App, AppContext, Entity};

use crate::app::layout::{LayoutClass, LayoutClassifier};
use crate::domain::catalog::Catalog;
use crate::state::pane_state::PaneState;

/// Collection of global handles
#[derive(Clone)]
pub struct AppEntities {
    /// Read-only product catalog
    pub catalog: Catalog,
    /// Viewport to layout mapping
    pub classifier: LayoutClassifier,
    /// Layout controller state (selection / navigation history)
    pub pane: Entity<PaneState>,
}

impl AppEntities {
    /// Initialize entities, entering the state for the initial layout
    pub fn init(
        catalog: Catalog,
        classifier: LayoutClassifier,
        initial: LayoutClass,
        cx: &mut App,
    ) -> Self {
        Self {
            catalog,
            classifier,
            pane: cx.new(|_| PaneState::new(initial)),
        }
    }
}
