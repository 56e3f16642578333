//! PaneState - Layout Controller State Machine
//!
//! Exactly one presentation strategy is active at a time, and each owns its
//! own selection data. Both represent the selection by product name; names are
//! resolved against the catalog only in [`PaneState::screen`], so a name that
//! no longer resolves renders the placeholder instead of failing.

use crate::app::layout::LayoutClass;
use crate::app::navigation::{NavStack, Route};
use crate::domain::catalog::Catalog;
use crate::domain::product::Product;

/// The active presentation strategy and its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneMode {
    /// List and details side by side
    SplitPane { selected: Option<String> },
    /// List and details as separate screens
    StackNav { stack: NavStack },
}

impl PaneMode {
    fn enter(class: LayoutClass) -> Self {
        match class {
            LayoutClass::SplitPane => PaneMode::SplitPane { selected: None },
            LayoutClass::StackNav => PaneMode::StackNav {
                stack: NavStack::new(),
            },
        }
    }

    fn class(&self) -> LayoutClass {
        match self {
            PaneMode::SplitPane { .. } => LayoutClass::SplitPane,
            PaneMode::StackNav { .. } => LayoutClass::StackNav,
        }
    }
}

/// What the products page should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Both panes; details show `selected` or the placeholder
    Split { selected: Option<&'a Product> },
    /// Full-size product list
    List,
    /// Detail screen with a back control
    Detail { product: Option<&'a Product> },
}

/// State owned by the products page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneState {
    mode: PaneMode,
}

impl Default for PaneState {
    fn default() -> Self {
        Self::new(LayoutClass::default())
    }
}

impl PaneState {
    /// Enter the state for a layout class with fresh data
    pub fn new(class: LayoutClass) -> Self {
        Self {
            mode: PaneMode::enter(class),
        }
    }

    pub fn mode(&self) -> &PaneMode {
        &self.mode
    }

    pub fn layout(&self) -> LayoutClass {
        self.mode.class()
    }

    /// Switch strategy if the class changed. The previous state, including its
    /// selection or history, is discarded. Returns whether a switch happened.
    pub fn sync_layout(&mut self, class: LayoutClass) -> bool {
        if self.layout() == class {
            return false;
        }
        self.mode = PaneMode::enter(class);
        true
    }

    /// A list row was clicked
    pub fn select(&mut self, name: &str) {
        match &mut self.mode {
            PaneMode::SplitPane { selected } => *selected = Some(name.to_string()),
            PaneMode::StackNav { stack } => stack.push(Route::detail(name)),
        }
    }

    /// Back control; returns whether anything changed
    pub fn back(&mut self) -> bool {
        match &mut self.mode {
            PaneMode::SplitPane { .. } => false,
            PaneMode::StackNav { stack } => stack.pop(),
        }
    }

    /// Navigate directly to a route
    pub fn navigate(&mut self, route: Route) {
        match &mut self.mode {
            PaneMode::SplitPane { selected } => {
                *selected = match route {
                    Route::List => None,
                    Route::Detail { name } => Some(name),
                }
            }
            PaneMode::StackNav { stack } => {
                if route != Route::List || stack.top() != &Route::List {
                    stack.push(route);
                }
            }
        }
    }

    /// Name of the selected or displayed product, unresolved
    pub fn selected_name(&self) -> Option<&str> {
        match &self.mode {
            PaneMode::SplitPane { selected } => selected.as_deref(),
            PaneMode::StackNav { stack } => stack.top().product_name(),
        }
    }

    /// Resolve the current state against the catalog
    pub fn screen<'a>(&self, catalog: &'a Catalog) -> Screen<'a> {
        let resolved = self.selected_name().and_then(|name| catalog.find(name));

        match &self.mode {
            PaneMode::SplitPane { .. } => Screen::Split { selected: resolved },
            PaneMode::StackNav { stack } => match stack.top() {
                Route::List => Screen::List,
                Route::Detail { .. } => Screen::Detail { product: resolved },
            },
        }
    }

    /// True when a name is selected but not in the catalog
    pub fn is_resolution_miss(&self, catalog: &Catalog) -> bool {
        self.selected_name()
            .is_some_and(|name| catalog.find(name).is_none())
    }
}
