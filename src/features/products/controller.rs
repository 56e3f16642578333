//! Products Controller
//!
//! Applies selection, back navigation and layout switches to the pane state.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::app::layout::{LayoutClass, Viewport};
use crate::app::navigation::Route;

/// Products page controller
#[derive(Clone)]
pub struct ProductsController {
    entities: AppEntities,
}

impl ProductsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// A list row was clicked
    pub fn select(&self, name: &str, cx: &mut App) {
        let catalog = self.entities.catalog.clone();
        self.entities.pane.update(cx, |pane, cx| {
            pane.select(name);
            tracing::debug!(product = name, layout = pane.layout().label(), "Product selected");
            if pane.is_resolution_miss(&catalog) {
                tracing::warn!(product = name, "Selected product is not in the catalog");
            }
            cx.notify();
        });
    }

    /// Navigate directly to a route (stack navigation) or selection (split pane)
    pub fn navigate(&self, route: Route, cx: &mut App) {
        let catalog = self.entities.catalog.clone();
        self.entities.pane.update(cx, |pane, cx| {
            tracing::debug!(route = %route, "Navigating");
            pane.navigate(route);
            if pane.is_resolution_miss(&catalog) {
                tracing::warn!(
                    product = pane.selected_name().unwrap_or_default(),
                    "Route does not resolve to a catalog product"
                );
            }
            cx.notify();
        });
    }

    /// The back control was clicked
    pub fn back(&self, cx: &mut App) {
        self.entities.pane.update(cx, |pane, cx| {
            if pane.back() {
                tracing::debug!("Navigated back");
                cx.notify();
            } else {
                tracing::debug!("Back ignored at navigation root");
            }
        });
    }

    /// Reclassify the viewport and switch strategies if needed.
    ///
    /// Called while the page renders, so it does not notify observers.
    pub fn sync_layout(&self, viewport: Viewport, cx: &mut App) -> LayoutClass {
        let class = self.entities.classifier.classify(viewport);
        self.entities.pane.update(cx, |pane, _cx| {
            let from = pane.layout();
            if pane.sync_layout(class) {
                tracing::info!(
                    from = from.label(),
                    to = class.label(),
                    width = viewport.width,
                    height = viewport.height,
                    "Layout switched"
                );
            }
        });
        class
    }
}
